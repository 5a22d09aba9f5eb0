//! Traits for taxonomy repository and service.

use std::sync::Arc;

use crate::Result;

use super::{FlattenedActivity, Industry};

/// Repository trait for reading the taxonomy tree.
pub trait TaxonomyRepositoryTrait: Send + Sync {
    /// Returns the industries in source order, children included.
    fn get_industries(&self) -> Result<Vec<Industry>>;
}

/// Service trait for taxonomy lookups.
pub trait TaxonomyServiceTrait: Send + Sync {
    /// Flattened leaf activities in traversal order. Computed once per service.
    fn get_activities(&self) -> Result<Arc<[FlattenedActivity]>>;

    /// First activity (in traversal order) with the given activity code.
    fn find_activity(&self, activity_code: &str) -> Result<Option<FlattenedActivity>>;
}
