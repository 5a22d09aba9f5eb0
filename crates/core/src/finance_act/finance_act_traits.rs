//! Traits for Finance Act repository and service.

use std::sync::Arc;

use crate::Result;

use super::FinanceActRow;

/// Repository trait for reading the Finance Act table.
pub trait FinanceActRepositoryTrait: Send + Sync {
    fn get_rows(&self) -> Result<Vec<FinanceActRow>>;
}

/// Service trait for fee lookups.
pub trait FinanceActServiceTrait: Send + Sync {
    /// All rows in table order. Loaded once per service.
    fn get_rows(&self) -> Result<Arc<[FinanceActRow]>>;
}
