//! Domain models for the business activity taxonomy.

use serde::{Deserialize, Serialize};

/// Top level of the taxonomy (e.g. "Accommodation and Food Services")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    #[serde(rename = "industryCode")]
    pub code: String,
    #[serde(rename = "industryName")]
    pub name: String,
    #[serde(rename = "businesses", default)]
    pub categories: Vec<BusinessCategory>,
}

/// A business category within an industry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCategory {
    #[serde(rename = "businessCategoryCode")]
    pub code: String,
    #[serde(rename = "businessCategoryName")]
    pub name: String,
    /// `businessCategory` is the older key; an object carrying both is rejected.
    #[serde(
        rename = "businessSubCategories",
        alias = "businessCategory",
        default
    )]
    pub subcategories: Vec<BusinessSubCategory>,
}

/// A business subcategory within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSubCategory {
    #[serde(rename = "subCategoryCode", alias = "subcategoryCode")]
    pub code: String,
    #[serde(rename = "subCategoryName", alias = "subcategoryName")]
    pub name: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Leaf of the taxonomy. `trade` is the Finance Act join key (NAICS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub code: String,
    pub name: String,
    pub trade: String,
}

/// Denormalized leaf activity carrying all of its ancestors' codes and names.
///
/// One record exists per leaf activity in the taxonomy. Records are built once
/// by [`flatten_taxonomy`](super::flatten_taxonomy) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedActivity {
    pub industry_code: String,
    pub industry_name: String,
    pub category_code: String,
    pub category_name: String,
    pub sub_category_code: String,
    pub sub_category_name: String,
    pub activity_code: String,
    pub activity_name: String,
    pub trade: String,
}

impl FlattenedActivity {
    pub fn new(
        industry: &Industry,
        category: &BusinessCategory,
        sub_category: &BusinessSubCategory,
        activity: &Activity,
    ) -> Self {
        Self {
            industry_code: industry.code.clone(),
            industry_name: industry.name.clone(),
            category_code: category.code.clone(),
            category_name: category.name.clone(),
            sub_category_code: sub_category.code.clone(),
            sub_category_name: sub_category.name.clone(),
            activity_code: activity.code.clone(),
            activity_name: activity.name.clone(),
            trade: activity.trade.clone(),
        }
    }

    /// Label shown in the match list and used for searching
    pub fn display_name(&self) -> &str {
        &self.activity_name
    }
}
