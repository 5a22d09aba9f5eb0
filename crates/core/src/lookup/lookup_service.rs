use std::sync::Arc;

use crate::finance_act::FinanceActServiceTrait;
use crate::taxonomies::{FlattenedActivity, TaxonomyServiceTrait};
use crate::Result;

use super::LookupSession;

/// Drives a [`LookupSession`] against the loaded datasets.
pub struct FeeLookupService {
    taxonomy_service: Arc<dyn TaxonomyServiceTrait>,
    finance_act_service: Arc<dyn FinanceActServiceTrait>,
}

impl FeeLookupService {
    pub fn new(
        taxonomy_service: Arc<dyn TaxonomyServiceTrait>,
        finance_act_service: Arc<dyn FinanceActServiceTrait>,
    ) -> Self {
        Self {
            taxonomy_service,
            finance_act_service,
        }
    }

    pub fn activities(&self) -> Result<Arc<[FlattenedActivity]>> {
        self.taxonomy_service.get_activities()
    }

    /// Matches currently listed for `session` (empty unless searching).
    pub fn matches(&self, session: &LookupSession) -> Result<Vec<FlattenedActivity>> {
        let activities = self.activities()?;
        Ok(session.matches(&activities).into_iter().cloned().collect())
    }

    pub fn select(&self, session: &mut LookupSession, activity: &FlattenedActivity) -> Result<bool> {
        let rows = self.finance_act_service.get_rows()?;
        Ok(session.select(activity, &rows))
    }

    /// Selects the match at `index` in the current match list.
    ///
    /// Returns `Ok(false)` when the index is out of range or the session is
    /// not searching.
    pub fn select_match(&self, session: &mut LookupSession, index: usize) -> Result<bool> {
        let matches = self.matches(session)?;
        match matches.get(index) {
            Some(activity) => self.select(session, activity),
            None => Ok(false),
        }
    }

    /// Builds a session with `activity_code` already selected.
    ///
    /// Returns `None` when no activity carries that code.
    pub fn lookup_activity(&self, activity_code: &str) -> Result<Option<LookupSession>> {
        let Some(activity) = self.taxonomy_service.find_activity(activity_code)? else {
            log::info!("No activity with code {}", activity_code);
            return Ok(None);
        };

        let mut session = LookupSession::new();
        session.open();
        self.select(&mut session, &activity)?;
        Ok(Some(session))
    }
}
