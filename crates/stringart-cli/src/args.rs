//! Command-line argument definitions for the stringart CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`], and the [`ChordSpec`] value syntax for the
//! repeatable `--chord` flag.

use std::str::FromStr;

use clap::Parser;

/// Command-line arguments for the stringart diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of anchor points on the circle
    #[arg(short = 'n', long, default_value_t = 36)]
    pub points: usize,

    /// Chord to draw, as "A,B" or "A,B,COLOR". Repeatable; chords draw in
    /// the order given. A COLOR suffix changes the active color for this
    /// and all following chords, like an interactive set-color call.
    /// Negative or out-of-range indices wrap around the circle.
    #[arg(short = 'c', long = "chord", value_name = "A,B[,COLOR]")]
    pub chords: Vec<ChordSpec>,

    /// Initial chord color (CSS color string)
    #[arg(long)]
    pub color: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// A single `--chord` value: two anchor indices and an optional color.
#[derive(Debug, Clone)]
pub struct ChordSpec {
    /// First anchor index (wraps modulo the point count).
    pub a: i64,
    /// Second anchor index (wraps modulo the point count).
    pub b: i64,
    /// Active color to switch to before connecting, if given.
    pub color: Option<String>,
}

impl FromStr for ChordSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The color part may itself contain commas ("rgba(72, 26, 132, 0.8)"),
        // so split off at most the first two fields.
        let mut parts = s.splitn(3, ',');

        let a = parts
            .next()
            .ok_or_else(|| format!("invalid chord '{s}': expected A,B[,COLOR]"))?;
        let b = parts
            .next()
            .ok_or_else(|| format!("invalid chord '{s}': expected A,B[,COLOR]"))?;

        let a = a
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid chord '{s}': bad index '{a}': {err}"))?;
        let b = b
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid chord '{s}': bad index '{b}': {err}"))?;

        let color = parts.next().map(|c| c.trim().to_string());

        Ok(Self { a, b, color })
    }
}
