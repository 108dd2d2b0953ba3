//! Modes of frequency tables
//!
//! This contains a frequency table that tabulates observations in a deterministic order, and
//! functions for getting its mode and every value ranked by how often it occurred.
//!
//! # Examples
//!
//! ```
//! use freq_modes::FrequencyTable;
//!
//! let weeks = [39, 38, 39, 40, 39, 38];
//! let table: FrequencyTable<u32> = weeks.iter().cloned().collect();
//! assert_eq!(39, table.mode().unwrap());
//!
//! let ranked = table.all_modes();
//! assert_eq!((39, 3), (ranked[0].value, ranked[0].count));
//! assert_eq!((38, 2), (ranked[1].value, ranked[1].count));
//! assert_eq!((40, 1), (ranked[2].value, ranked[2].count));
//! ```
mod bytes;
mod error;
mod modes;
mod table;

pub use bytes::{FloatKey, ToBytes};
pub use error::StatsError;
pub use modes::{all_modes, mode, mode_entry, top_modes, ModeResult};
pub use table::FrequencyTable;
