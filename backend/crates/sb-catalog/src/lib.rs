//! Read-only match and stadium reference data.
//!
//! Loaded once at start-up and shared behind an `Arc`; nothing here mutates
//! after construction.

pub mod catalog;
pub mod error;
pub mod records;


pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use records::{MatchCatalogFile, MatchRecord, StadiumLocation, StadiumRecord};
