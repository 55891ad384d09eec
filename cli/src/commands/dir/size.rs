//! # lemonutils Size Command
//!
//! File: cli/src/commands/dir/size.rs
//!
//! Implements `lemon dir size <PATH> [--human]`. Prints the raw byte count by
//! default, or a binary-unit rendering (`1.5 KiB`) with `--human`.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct SizeArgs {
    /// File or directory to measure.
    path: String,
    /// Print with binary units instead of a raw byte count.
    #[arg(long, short = 'H')]
    human: bool,
}

pub fn handle_size(args: SizeArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    let bytes = helper
        .calculate_size(&path)
        .with_context(|| format!("Failed to calculate size of '{}'", path.display()))?;
    if args.human {
        println!("{}", format_size(bytes));
    } else {
        println!("{bytes}");
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(format_size(u64::MAX), "16384.0 PiB");
    }
}
