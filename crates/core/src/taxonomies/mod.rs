//! Taxonomies module - domain models, services, and traits.
//!
//! Provides the four-level business activity taxonomy
//! (industry, business category, business subcategory, activity)
//! and its flattened, searchable projection.

mod taxonomy_model;
mod taxonomy_service;
mod taxonomy_traits;

pub use taxonomy_model::{
    Activity, BusinessCategory, BusinessSubCategory, FlattenedActivity, Industry,
};
pub use taxonomy_service::{filter_activities, flatten_taxonomy, TaxonomyService};
pub use taxonomy_traits::{TaxonomyRepositoryTrait, TaxonomyServiceTrait};
