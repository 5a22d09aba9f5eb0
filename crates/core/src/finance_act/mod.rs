//! Finance Act module - fee table rows and the trade code join.

mod finance_act_model;
mod finance_act_service;
mod finance_act_traits;

pub use finance_act_model::FinanceActRow;
pub use finance_act_service::{fees_for_trade, FinanceActService};
pub use finance_act_traits::{FinanceActRepositoryTrait, FinanceActServiceTrait};
