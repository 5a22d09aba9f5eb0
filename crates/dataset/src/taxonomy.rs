//! Repository implementation for the activity taxonomy.

use std::path::Path;

use tradefee_core::taxonomies::{Industry, TaxonomyRepositoryTrait};
use tradefee_core::Result;

use crate::json::{parse_json, read_json};
use crate::BUNDLED_TAXONOMY_JSON;

/// Taxonomy decoded once from a JSON document and served from memory.
#[derive(Debug, Clone)]
pub struct JsonTaxonomyRepository {
    industries: Vec<Industry>,
}

impl JsonTaxonomyRepository {
    pub fn new(industries: Vec<Industry>) -> Self {
        Self { industries }
    }

    /// The taxonomy compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json("bundled taxonomy", BUNDLED_TAXONOMY_JSON)
    }

    pub fn from_json(origin: &str, json: &str) -> Result<Self> {
        Ok(Self::new(parse_json(origin, json)?))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(read_json(path)?))
    }

    pub fn industry_count(&self) -> usize {
        self.industries.len()
    }
}

impl TaxonomyRepositoryTrait for JsonTaxonomyRepository {
    fn get_industries(&self) -> Result<Vec<Industry>> {
        Ok(self.industries.clone())
    }
}
