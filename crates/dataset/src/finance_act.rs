//! Repository implementation for the Finance Act fee table.

use std::path::Path;

use tradefee_core::finance_act::{FinanceActRepositoryTrait, FinanceActRow};
use tradefee_core::Result;

use crate::json::{parse_json, read_json};
use crate::BUNDLED_FINANCE_ACT_JSON;

#[derive(Debug, Clone)]
pub struct JsonFinanceActRepository {
    rows: Vec<FinanceActRow>,
}

impl JsonFinanceActRepository {
    pub fn new(rows: Vec<FinanceActRow>) -> Self {
        Self { rows }
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json("bundled Finance Act table", BUNDLED_FINANCE_ACT_JSON)
    }

    pub fn from_json(origin: &str, json: &str) -> Result<Self> {
        Ok(Self::new(parse_json(origin, json)?))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(read_json(path)?))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl FinanceActRepositoryTrait for JsonFinanceActRepository {
    fn get_rows(&self) -> Result<Vec<FinanceActRow>> {
        Ok(self.rows.clone())
    }
}
