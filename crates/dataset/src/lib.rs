//! JSON dataset loading for the trade fee lookup.
//!
//! This crate implements the repository traits defined in `tradefee-core`
//! on top of two JSON documents: the activity taxonomy and the Finance Act
//! fee table. Both are compiled into the binary; a data directory can
//! override either file.
//!
//! ```text
//! core (domain, traits)
//!          │
//!          ▼
//!   dataset (this crate)
//!          │
//!          ├── data/taxonomy.json      (bundled)
//!          ├── data/finance_act.json   (bundled)
//!          └── <data dir>/*.json       (optional overrides)
//! ```
//!
//! Datasets are decoded once when loaded and are read-only afterwards.

pub mod errors;
pub mod finance_act;
pub mod taxonomy;

mod json;

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use errors::LoadError;
pub use finance_act::JsonFinanceActRepository;
pub use taxonomy::JsonTaxonomyRepository;

// Re-export from tradefee-core for convenience
pub use tradefee_core::errors::{DatasetError, Error, Result};

/// File name of the taxonomy inside a data directory
pub const TAXONOMY_FILE_NAME: &str = "taxonomy.json";

/// File name of the Finance Act table inside a data directory
pub const FINANCE_ACT_FILE_NAME: &str = "finance_act.json";

pub const BUNDLED_TAXONOMY_JSON: &str = include_str!("../data/taxonomy.json");
pub const BUNDLED_FINANCE_ACT_JSON: &str = include_str!("../data/finance_act.json");

/// Both repositories, ready to hand to the core services.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub taxonomy: Arc<JsonTaxonomyRepository>,
    pub finance_act: Arc<JsonFinanceActRepository>,
}

impl Dataset {
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            taxonomy: Arc::new(JsonTaxonomyRepository::bundled()?),
            finance_act: Arc::new(JsonFinanceActRepository::bundled()?),
        })
    }
}

/// Loads the datasets, preferring files in `data_dir` over the bundled copies.
///
/// A file missing from `data_dir` falls back to its bundled copy. A file that
/// exists but cannot be read or parsed is an error.
pub fn load_dataset(data_dir: Option<&Path>) -> Result<Dataset> {
    let taxonomy = match override_path(data_dir, TAXONOMY_FILE_NAME) {
        Some(path) => {
            log::info!("Loading taxonomy from {}", path.display());
            JsonTaxonomyRepository::from_path(&path)?
        }
        None => JsonTaxonomyRepository::bundled()?,
    };

    let finance_act = match override_path(data_dir, FINANCE_ACT_FILE_NAME) {
        Some(path) => {
            log::info!("Loading Finance Act table from {}", path.display());
            JsonFinanceActRepository::from_path(&path)?
        }
        None => JsonFinanceActRepository::bundled()?,
    };

    log::info!(
        "Dataset loaded: {} industries, {} Finance Act rows",
        taxonomy.industry_count(),
        finance_act.row_count()
    );

    Ok(Dataset {
        taxonomy: Arc::new(taxonomy),
        finance_act: Arc::new(finance_act),
    })
}

fn override_path(data_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    let path = data_dir?.join(file_name);
    if path.is_file() {
        Some(path)
    } else {
        log::debug!("{} not present, using bundled copy", path.display());
        None
    }
}
