use clap::Parser;
use std::path::PathBuf;

use crate::config::ShiftConfig;

/// Shift every timestamp of a SubRip (.srt) file by a fixed offset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source .srt file (standard input when omitted)
    pub source: Option<PathBuf>,

    /// Destination .srt file (standard output when omitted)
    pub dest: Option<PathBuf>,

    /// Hours to add (any magnitude, negative to move earlier)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub hours: Option<i64>,

    /// Minutes to add (-59..=59)
    #[arg(short, long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,

    /// Seconds to add (-59..=59)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seconds: Option<i64>,

    /// Milliseconds to add (-999..=999)
    #[arg(long = "ms", visible_alias = "milliseconds", allow_negative_numbers = true)]
    pub milliseconds: Option<i64>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write output without a UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,

    /// Save the effective configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}

impl Args {
    /// Overlay the offsets given on the command line onto the configured ones.
    pub fn apply_shift(&self, shift: &mut ShiftConfig) {
        if let Some(hours) = self.hours {
            shift.hours = hours;
        }
        if let Some(minutes) = self.minutes {
            shift.minutes = minutes;
        }
        if let Some(seconds) = self.seconds {
            shift.seconds = seconds;
        }
        if let Some(milliseconds) = self.milliseconds {
            shift.milliseconds = milliseconds;
        }
    }
}
