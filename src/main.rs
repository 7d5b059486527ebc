//! simpledice - roll NdM dice from the command line

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use serde::Serialize;
use simpledice::{DiceSet, DEFAULT_COUNT, DEFAULT_SEPARATOR, DEFAULT_SIDES};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roll a set of identical dice
#[derive(Parser, Debug)]
#[command(name = "simpledice", version, about = "Roll NdM dice sets")]
struct Args {
    /// Number of dice (values below 1 become 1)
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    count: u32,

    /// Sides per die (values below 2 give a set that always rolls 0)
    #[arg(short, long, default_value_t = DEFAULT_SIDES)]
    sides: u32,

    /// How many times to roll
    #[arg(short = 'n', long, default_value_t = 1)]
    times: u32,

    /// Show each die's result
    #[arg(long)]
    detail: bool,

    /// Text between count and sides in the set's name
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Seed for a reproducible roll sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

/// JSON output for one invocation
#[derive(Debug, Serialize)]
struct RollReport {
    set: String,
    min: u64,
    max: u64,
    average_floor: u64,
    average_ceil: u64,
    rolls: Vec<RollEntry>,
}

#[derive(Debug, Serialize)]
struct RollEntry {
    total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    dice: Option<Vec<u32>>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simpledice=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut set = match args.seed {
        Some(seed) => DiceSet::seeded(args.count, args.sides, seed),
        None => DiceSet::new(args.count, args.sides),
    };
    if set.count() != args.count || set.sides() != args.sides {
        info!("Requested {}d{}, using {}", args.count, args.sides, set);
    }

    let report = build_report(&mut set, args.times, args.detail, &args.separator);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &report)?;
    }

    Ok(())
}

fn build_report<R: Rng>(
    set: &mut DiceSet<R>,
    times: u32,
    detail: bool,
    separator: &str,
) -> RollReport {
    let mut rolls = Vec::with_capacity(times as usize);
    for _ in 0..times {
        if detail {
            let (total, dice) = set.roll_with_detail();
            rolls.push(RollEntry { total, dice: Some(dice) });
        } else {
            rolls.push(RollEntry { total: set.roll(), dice: None });
        }
    }

    RollReport {
        set: set.format(separator),
        min: set.min(),
        max: set.max(),
        average_floor: set.average(false),
        average_ceil: set.average(true),
        rolls,
    }
}

fn write_text(out: &mut impl Write, report: &RollReport) -> io::Result<()> {
    writeln!(out, "{}", report.set)?;
    writeln!(out, "{} - {}", report.min, report.max)?;
    writeln!(out, "average {} / {}", report.average_floor, report.average_ceil)?;
    writeln!(out)?;

    for roll in &report.rolls {
        match &roll.dice {
            Some(dice) => {
                let dice: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
                writeln!(out, "{} ({})", roll.total, dice.join(", "))?;
            }
            None => writeln!(out, "{}", roll.total)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &RollReport) -> String {
        let mut out = Vec::new();
        write_text(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_detail() {
        let mut set = DiceSet::seeded(3, 6, 11);
        let report = build_report(&mut set, 2, true, "d");
        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "3d6");
        assert_eq!(lines[1], "3 - 18");
        assert_eq!(lines[2], "average 10 / 11");
        assert_eq!(lines[3], "");
        assert_eq!(lines.len(), 6);

        // Each roll line is "total (a, b, c)"
        let mut replay = DiceSet::seeded(3, 6, 11);
        for line in &lines[4..] {
            let (total, dice) = replay.roll_with_detail();
            let dice: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
            assert_eq!(*line, format!("{} ({})", total, dice.join(", ")));
        }
    }

    #[test]
    fn test_text_report_totals_only() {
        let mut set = DiceSet::seeded(10, 2, 5);
        let report = build_report(&mut set, 3, false, "x");
        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "10x2");
        assert_eq!(lines[1], "10 - 20");
        assert_eq!(lines[2], "average 15 / 15");
        assert_eq!(lines.len(), 7);

        let mut replay = DiceSet::seeded(10, 2, 5);
        for line in &lines[4..] {
            assert_eq!(*line, replay.roll().to_string());
        }
    }

    #[test]
    fn test_json_report_shape() {
        let mut set = DiceSet::seeded(2, 8, 3);
        let report = build_report(&mut set, 2, true, "d");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["set"], "2d8");
        assert_eq!(json["min"], 2);
        assert_eq!(json["max"], 16);
        assert_eq!(json["average_floor"], 9);
        assert_eq!(json["average_ceil"], 9);

        let rolls = json["rolls"].as_array().unwrap();
        assert_eq!(rolls.len(), 2);
        for roll in rolls {
            let dice = roll["dice"].as_array().unwrap();
            assert_eq!(dice.len(), 2);
            let sum: u64 = dice.iter().map(|d| d.as_u64().unwrap()).sum();
            assert_eq!(roll["total"].as_u64().unwrap(), sum);
        }
    }

    #[test]
    fn test_json_report_omits_dice_without_detail() {
        let mut set = DiceSet::seeded(2, 8, 3);
        let report = build_report(&mut set, 1, false, "d");
        let json = serde_json::to_value(&report).unwrap();

        let roll = json["rolls"][0].as_object().unwrap();
        assert!(roll.contains_key("total"));
        assert!(!roll.contains_key("dice"));
    }

    #[test]
    fn test_degenerate_report() {
        let mut set = DiceSet::seeded(0, 1, 0);
        let report = build_report(&mut set, 1, true, "d");

        assert_eq!(render(&report), "1d0\n1 - 0\naverage 0 / 1\n\n0 (0)\n");
    }
}
