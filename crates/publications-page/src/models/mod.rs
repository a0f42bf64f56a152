//! Data models for publication rows and entries.
//!
//! Raw rows keep every CSV cell; entries are the normalized, immutable
//! records the catalog groups and sorts.

mod entry;
mod enums;
mod row;

pub use entry::{Entry, MediaItem, SortYear, parse_media};
pub use enums::{OutputFormat, RowPolicy, Section};
pub use row::{RawRecord, RawRow};
