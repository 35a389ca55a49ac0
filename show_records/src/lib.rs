//! # Show Records
//!
//! The "record book" crate - contains the show, match and participant model,
//! ingest validation, and the read-only Record Store that every derivation
//! in `tablematch_core` borrows from.
//!
//! This crate is the single source of truth for the corpus and contains no
//! aggregation logic.

pub mod corpus;
pub mod entities;
pub mod error;
pub mod ratings;

pub use corpus::*;
pub use entities::*;
pub use error::*;
pub use ratings::*;
