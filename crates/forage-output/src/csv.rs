//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `episodes.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EpisodeRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    episodes:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut episodes = Writer::from_path(dir.join("episodes.csv"))?;
        episodes.write_record(["agent_id", "episode", "end_tick", "steps", "cumulative_reward", "end_reason"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "sim_secs", "contacts"])?;

        Ok(Self {
            episodes,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_episode(&mut self, row: &EpisodeRow) -> OutputResult<()> {
        self.episodes.write_record(&[
            row.agent_id.to_string(),
            row.episode.to_string(),
            row.end_tick.to_string(),
            row.steps.to_string(),
            row.cumulative_reward.to_string(),
            row.end_reason.as_str().to_owned(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.sim_secs.to_string(),
            row.contacts.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.episodes.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
