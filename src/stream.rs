//! Source and destination handling.
//!
//! Everything is read into memory before parsing and written in one piece
//! after formatting. `None` paths mean standard input and standard output.

use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::{Result, SrtShiftError};

const BOM: char = '\u{feff}';

/// Read the whole source and normalize it for parsing.
pub async fn read_source(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) => {
            if !path.exists() {
                return Err(SrtShiftError::FileNotFound(path.display().to_string()));
            }
            debug!("Reading subtitles from {}", path.display());
            let bytes = fs::read(path).await?;
            normalize(bytes)
        }
        None => {
            debug!("Reading subtitles from standard input");
            read_from(tokio::io::stdin()).await
        }
    }
}

pub async fn read_from<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    normalize(bytes)
}

/// Decode UTF-8, drop a leading byte-order mark and turn `\r\n` and lone
/// `\r` into `\n`.
pub fn normalize(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes)?;
    let text = text.strip_prefix(BOM).unwrap_or(&text);

    if !text.contains('\r') {
        return Ok(text.to_string());
    }
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Write the formatted document, creating or truncating the destination.
pub async fn write_dest(dest: Option<&Path>, text: &str, write_bom: bool) -> Result<()> {
    match dest {
        Some(path) => {
            debug!("Writing subtitles to {}", path.display());
            let file = fs::File::create(path).await?;
            write_to(file, text, write_bom).await
        }
        None => {
            debug!("Writing subtitles to standard output");
            write_to(tokio::io::stdout(), text, write_bom).await
        }
    }
}

pub async fn write_to<W: AsyncWrite + Unpin>(mut writer: W, text: &str, write_bom: bool) -> Result<()> {
    writer.write_all(&encode(text, write_bom)).await?;
    writer.flush().await?;
    Ok(())
}

fn encode(text: &str, write_bom: bool) -> Vec<u8> {
    let mut out = String::with_capacity(text.len() + BOM.len_utf8());
    if write_bom {
        out.push(BOM);
    }
    out.push_str(text);
    out.into_bytes()
}
