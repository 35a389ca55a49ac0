//! # Tablematch Core
//!
//! Everything a page build derives from the record book. This crate borrows a
//! read-only `RecordStore` from `show_records` and turns it into the routes to
//! build and the data each page shows.
//!
//! ## Core Components
//!
//! - **routes**: Path Enumerator - show route tokens and distinct wrestler ids
//! - **ranking**: Name Ranker - orders recorded name variants by frequency
//! - **profile**: Wrestler Aggregator - per-wrestler match, show and promotion counts
//! - **history**: History Builder - a wrestler's shows, cut down to their matches
//! - **pages**: resolves a route to the data its page renders
//! - **config**: build configuration read from `tablematch.toml`
//!
//! ## Design Philosophy
//!
//! - **Pure**: every derivation is a function of the store it is handed
//! - **Recomputed**: nothing derived is cached or persisted between builds
//! - **Wrestlers only**: only the `wrestlers` list of a match is indexed

pub mod config;
pub mod error;
pub mod history;
pub mod pages;
pub mod profile;
pub mod ranking;
pub mod routes;

pub use config::*;
pub use error::*;
pub use history::*;
pub use pages::*;
pub use profile::*;
pub use ranking::*;
pub use routes::*;
