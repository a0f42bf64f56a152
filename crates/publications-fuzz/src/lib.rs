//! Fuzzing library for publications-page.
//!
//! This crate provides fuzzing targets for the CSV reader, the media cell
//! parser and abstract formatting.
//!
//! # Usage
//!
//! ```bash
//! cd crates/publications-fuzz
//! cargo +nightly fuzz run fuzz_csv_parse -- -max_total_time=60
//! ```

pub use publications_page::{formatters, models, reader};
