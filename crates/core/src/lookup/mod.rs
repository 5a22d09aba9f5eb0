//! Lookup module - the search/selection session joining taxonomy and fees.

mod lookup_model;
mod lookup_service;

pub use lookup_model::{DetailField, LookupSession, LookupState, SelectionDetails};
pub use lookup_service::FeeLookupService;
