//! srtshift - shift SubRip subtitle timings
//!
//! Parses `.srt` files, moves every start and end timestamp by a fixed
//! offset and writes the result back in the same format.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod offset;
pub mod stream;
pub mod subtitle;
pub mod timestamp;
pub mod workflow;

pub use document::{ClampedEntry, Document, ShiftReport};
pub use error::{ParseError, Result, SrtShiftError};
pub use offset::Offset;
pub use subtitle::Subtitle;
pub use timestamp::{Shifted, Timestamp};
