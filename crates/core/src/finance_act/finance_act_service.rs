use std::sync::{Arc, OnceLock};

use crate::Result;

use super::{FinanceActRepositoryTrait, FinanceActRow, FinanceActServiceTrait};

/// Join a trade code against the fee table.
///
/// Returns every row whose `NAICS` equals `trade`, in table order.
pub fn fees_for_trade<'a>(rows: &'a [FinanceActRow], trade: &str) -> Vec<&'a FinanceActRow> {
    rows.iter().filter(|row| row.naics == trade).collect()
}

pub struct FinanceActService {
    repository: Arc<dyn FinanceActRepositoryTrait>,
    rows: OnceLock<Arc<[FinanceActRow]>>,
}

impl FinanceActService {
    pub fn new(repository: Arc<dyn FinanceActRepositoryTrait>) -> Self {
        Self {
            repository,
            rows: OnceLock::new(),
        }
    }
}

impl FinanceActServiceTrait for FinanceActService {
    fn get_rows(&self) -> Result<Arc<[FinanceActRow]>> {
        if let Some(cached) = self.rows.get() {
            return Ok(Arc::clone(cached));
        }

        let rows: Arc<[FinanceActRow]> = self.repository.get_rows()?.into();
        log::debug!("Loaded {} Finance Act rows", rows.len());
        Ok(Arc::clone(self.rows.get_or_init(|| rows)))
    }
}
