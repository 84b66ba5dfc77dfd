//! `forage-output`: simulation output writers for the forage simulation
//! core.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `episodes.csv`, `tick_summaries.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EpisodeLogObserver`], which implements `forage_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use forage_output::{CsvWriter, EpisodeLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EpisodeLogObserver::new(writer, &config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EpisodeLogObserver;
pub use row::{EpisodeRow, TickSummaryRow};
pub use writer::OutputWriter;
