//! `EpisodeLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use forage_core::{EntityId, SimConfig, Tick};
use forage_sim::{EpisodeSummary, SimObserver};

use crate::row::{EpisodeRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes finished episodes and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct EpisodeLogObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: f32,
    episodes_logged:    u64,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> EpisodeLogObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert ticks
    /// to simulation seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            episodes_logged:    0,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Episodes the writer accepted so far.  Failed writes are not counted.
    pub fn episodes_logged(&self) -> u64 {
        self.episodes_logged
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for EpisodeLogObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, contacts: usize) {
        let row = TickSummaryRow {
            tick:     tick.0,
            sim_secs: (tick.0 as f64 * self.tick_duration_secs as f64) as f32,
            contacts: contacts as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_episode_end(&mut self, agent: EntityId, summary: &EpisodeSummary) {
        let row = EpisodeRow {
            agent_id:          agent.0,
            episode:           summary.episode,
            end_tick:          summary.end_tick.0,
            steps:             summary.steps,
            cumulative_reward: summary.cumulative_reward,
            end_reason:        summary.reason,
        };
        match self.writer.write_episode(&row) {
            Ok(()) => self.episodes_logged += 1,
            Err(e) => self.store_err(Err(e)),
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
