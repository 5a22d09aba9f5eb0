//! Domain model for Finance Act fee rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::number_format::format_amount;

/// One row of the Finance Act fee schedule.
///
/// Field names on the wire follow the published table (`NAICS`, `des`,
/// `trade`, ...). Amounts are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceActRow {
    pub code: String,
    #[serde(rename = "NAICS")]
    pub naics: String,
    #[serde(rename = "des")]
    pub description: String,
    #[serde(rename = "trade")]
    pub trade_license: Decimal,
    #[serde(rename = "fire")]
    pub fire_clearance: Decimal,
    #[serde(rename = "food")]
    pub food_hygiene: Decimal,
    #[serde(rename = "health")]
    pub health_certificate: Decimal,
    #[serde(rename = "pest")]
    pub pest_control: Decimal,
}

impl FinanceActRow {
    /// The five fee amounts in column order
    pub fn fees(&self) -> [Decimal; 5] {
        [
            self.trade_license,
            self.fire_clearance,
            self.food_hygiene,
            self.health_certificate,
            self.pest_control,
        ]
    }

    /// Display cells in [`FEE_TABLE_HEADERS`](crate::constants::FEE_TABLE_HEADERS) order.
    pub fn table_cells(&self) -> [String; 7] {
        let [trade, fire, food, health, pest] = self.fees().map(format_amount);
        [
            self.description.clone(),
            self.code.clone(),
            trade,
            fire,
            food,
            health,
            pest,
        ]
    }
}
