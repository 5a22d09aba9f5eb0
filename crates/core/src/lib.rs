//! Tradefee Core - Domain entities, services, and traits.
//!
//! This crate contains the lookup logic: the business activity taxonomy,
//! the Finance Act fee table, and the search/selection session that joins
//! the two. It knows nothing about where the datasets come from; the
//! `dataset` crate implements the repository traits defined here.

pub mod constants;
pub mod errors;
pub mod finance_act;
pub mod lookup;
pub mod taxonomies;
pub mod utils;

pub use finance_act::{FinanceActRow, FinanceActService, FinanceActServiceTrait};
pub use lookup::{FeeLookupService, LookupSession, LookupState, SelectionDetails};
pub use taxonomies::{FlattenedActivity, Industry, TaxonomyService, TaxonomyServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
