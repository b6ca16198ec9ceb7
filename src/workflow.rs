use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::document::{Document, ShiftReport};
use crate::error::Result;
use crate::offset::Offset;
use crate::stream;

pub struct Workflow {
    config: Config,
}

impl Workflow {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read `source`, shift every subtitle by `offset` and write the result
    /// to `dest`. Nothing is written unless the whole source parses.
    pub async fn run(
        &self,
        source: Option<&Path>,
        dest: Option<&Path>,
        offset: &Offset,
    ) -> Result<ShiftReport> {
        info!(
            "Shifting {} by {}",
            describe(source, "standard input"),
            offset
        );

        let text = stream::read_source(source).await?;
        let (output, report) = self.shift_text(&text, offset)?;

        stream::write_dest(dest, &output, self.config.output.write_bom).await?;

        info!(
            "Wrote {} subtitles to {} ({} clamped)",
            report.shifted,
            describe(dest, "standard output"),
            report.clamped.len()
        );
        Ok(report)
    }

    /// Parse, shift and format an in-memory document.
    pub fn shift_text(&self, text: &str, offset: &Offset) -> Result<(String, ShiftReport)> {
        let mut document: Document = text.parse()?;
        if document.is_empty() {
            warn!("Source contains no subtitles");
        }

        let report = document.shift_all(offset);
        for entry in &report.clamped {
            let which = match (entry.start, entry.end) {
                (true, true) => "start and end",
                (true, false) => "start",
                _ => "end",
            };
            warn!(
                "Too big shift for subtitle {} (index {}): {} clamped to 00:00:00,000",
                entry.position + 1,
                entry.index,
                which
            );
        }

        Ok((document.to_string(), report))
    }
}

fn describe(path: Option<&Path>, fallback: &str) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}
