//! Publications Page Builder
//!
//! Turns a CSV list of academic publications into a static HTML page.
//! Entries are grouped into journal, working, conference and other sections
//! and ordered newest first within each section.
//!
//! # Features
//!
//! - **Lenient schema**: unknown CSV columns pass through untouched
//! - **Deterministic**: the same CSV always yields byte-identical output
//! - **Math-friendly**: `$...$` in abstracts is left for MathJax
//! - **JSON dump**: the grouped catalog can be written as JSON instead
//!
//! # Example
//!
//! ```no_run
//! use publications_page::{builder, config::Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let summary = builder::build(&config)?;
//!
//!     println!("Wrote {} ({} items)", summary.output.display(), summary.entries);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod reader;

pub use builder::{BuildSummary, build};
pub use catalog::{Catalog, SectionGroup};
pub use config::Config;
pub use error::{BuildError, BuildResult};
