//! # ranktable
//!
//! **Operator rating tables** - turns a JSON dataset of bookmaker records into
//! a tabbed rating table, tolerating bad data record by record.
//!
//! The crate owns the logic; HTML lives in `ranktable-report` and the browser
//! glue in `ranktable-web`.
//!
//! ## Features
//!
//! - **Formatting** - currency with K/M suffixes, fixed-precision ratings
//! - **Star rating** - `floor(rating + 0.4)` filled stars, one star on mobile
//! - **Fault-tolerant rows** - bad records are skipped, never fatal
//! - **Tab state** - four tabs mirrored to the `type` address parameter
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use ranktable::{RatingApp, RenderConfig};
//! use ranktable::location::{History, Location};
//! use ranktable::source::Dataset;
//!
//! let data = Dataset::from_json(r#"{"byuser": [{"id": "alpha", "rating": 4.5}]}"#).unwrap();
//! let mut app = RatingApp::new(
//!     RenderConfig::default(),
//!     1280,
//!     History::new(Location::parse("/rating")),
//! );
//! futures::executor::block_on(app.load_from_address(&data));
//! assert!(app.container().is_table());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! ranktable render --data data.json --type bybonus -o rating.html
//! ranktable render --data data.json --url '/rating?type=byeditors' --fragment
//! ranktable tabs
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Record validation predicates.
pub mod validators;

/// Currency and rating formatting.
pub mod format;

/// Star sequence for a rating and viewport width.
pub mod stars;

/// Reliability badge text.
pub mod badge;

/// Validated operator record.
pub mod record;

/// Record to row composition.
pub mod row;

/// Record collection to table composition.
pub mod table;

mod boundary;

// ============================================================================
// State & I/O
// ============================================================================

pub mod app;
pub mod location;
pub mod source;
pub mod tabs;

// ============================================================================
// Ambient
// ============================================================================

pub mod config;
pub mod error;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod test_logs;

// ============================================================================
// Re-exports
// ============================================================================

pub use app::RatingApp;
pub use config::RenderConfig;
pub use error::{LoadError, RowError, UnknownTab};
pub use row::RenderContext;
pub use table::{TableOutcome, build_table};
pub use tabs::{TabController, TabId};
