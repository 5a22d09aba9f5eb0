//! Taxonomy service implementation.

use std::sync::{Arc, OnceLock};

use crate::Result;

use super::{FlattenedActivity, Industry, TaxonomyRepositoryTrait, TaxonomyServiceTrait};

/// Flatten the nested taxonomy into one record per leaf activity.
///
/// Output order follows the source: industries, then categories, then
/// subcategories, then activities.
pub fn flatten_taxonomy(industries: &[Industry]) -> Vec<FlattenedActivity> {
    let mut result = Vec::new();

    for industry in industries {
        for category in &industry.categories {
            for sub_category in &category.subcategories {
                for activity in &sub_category.activities {
                    result.push(FlattenedActivity::new(
                        industry,
                        category,
                        sub_category,
                        activity,
                    ));
                }
            }
        }
    }

    result
}

/// Case-insensitive substring match on the activity name.
///
/// An empty query matches everything. Order of `activities` is preserved.
/// Each character is folded on its own, so a query matches any text that
/// contains it regardless of where it sits in the name.
pub fn filter_activities<'a>(
    activities: &'a [FlattenedActivity],
    query: &str,
) -> Vec<&'a FlattenedActivity> {
    if query.is_empty() {
        return activities.iter().collect();
    }

    let needle = fold_case(query);
    activities
        .iter()
        .filter(|activity| fold_case(activity.display_name()).contains(&needle))
        .collect()
}

fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

pub struct TaxonomyService {
    repository: Arc<dyn TaxonomyRepositoryTrait>,
    activities: OnceLock<Arc<[FlattenedActivity]>>,
}

impl TaxonomyService {
    pub fn new(repository: Arc<dyn TaxonomyRepositoryTrait>) -> Self {
        Self {
            repository,
            activities: OnceLock::new(),
        }
    }
}

impl TaxonomyServiceTrait for TaxonomyService {
    fn get_activities(&self) -> Result<Arc<[FlattenedActivity]>> {
        if let Some(cached) = self.activities.get() {
            return Ok(Arc::clone(cached));
        }

        let industries = self.repository.get_industries()?;
        let flattened: Arc<[FlattenedActivity]> = flatten_taxonomy(&industries).into();
        log::debug!(
            "Flattened {} industries into {} activities",
            industries.len(),
            flattened.len()
        );

        Ok(Arc::clone(self.activities.get_or_init(|| flattened)))
    }

    fn find_activity(&self, activity_code: &str) -> Result<Option<FlattenedActivity>> {
        let activities = self.get_activities()?;
        Ok(activities
            .iter()
            .find(|a| a.activity_code == activity_code)
            .cloned())
    }
}
