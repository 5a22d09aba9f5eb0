//! Search/selection session state.
//!
//! The session is a small state machine owned by the presentation layer:
//!
//! ```text
//!   Idle --open--> Searching --select--> Selected
//!    ^                 |                    |
//!    +-----close-------+--------close-------+
//! ```
//!
//! Every transition is synchronous. Actions that do not apply to the current
//! state leave the session untouched and return `false`.

use serde::Serialize;

use crate::constants::DETAIL_FIELD_LABELS;
use crate::finance_act::{fees_for_trade, FinanceActRow};
use crate::taxonomies::{filter_activities, FlattenedActivity};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LookupState {
    /// Search box hidden.
    #[default]
    Idle,
    /// Search box open, match list shown.
    Searching,
    /// An activity is chosen; its fee rows are shown and the match list is hidden.
    Selected {
        activity: FlattenedActivity,
        fees: Vec<FinanceActRow>,
    },
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupSession {
    state: LookupState,
    query: String,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Current text of the search box. Kept across close/open.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_search_open(&self) -> bool {
        !matches!(self.state, LookupState::Idle)
    }

    pub fn selected_activity(&self) -> Option<&FlattenedActivity> {
        match &self.state {
            LookupState::Selected { activity, .. } => Some(activity),
            _ => None,
        }
    }

    /// Fee rows for the selection; empty unless an activity is selected.
    pub fn fees(&self) -> &[FinanceActRow] {
        match &self.state {
            LookupState::Selected { fees, .. } => fees,
            _ => &[],
        }
    }

    /// Matches to list under the search box. Only populated while searching.
    pub fn matches<'a>(&self, activities: &'a [FlattenedActivity]) -> Vec<&'a FlattenedActivity> {
        match self.state {
            LookupState::Searching => filter_activities(activities, &self.query),
            _ => Vec::new(),
        }
    }

    pub fn details(&self) -> SelectionDetails {
        SelectionDetails::from_selection(self.selected_activity())
    }

    /// `Idle -> Searching`.
    pub fn open(&mut self) -> bool {
        if self.state != LookupState::Idle {
            return false;
        }
        self.state = LookupState::Searching;
        log::debug!("Search opened");
        true
    }

    /// Replaces the search text. Ignored while idle; does not drop a selection.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        if !self.is_search_open() {
            return false;
        }
        self.query = query.into();
        true
    }

    /// `Searching -> Selected`, joining the activity's trade code against `finance_act`.
    pub fn select(&mut self, activity: &FlattenedActivity, finance_act: &[FinanceActRow]) -> bool {
        if self.state != LookupState::Searching {
            return false;
        }

        let fees: Vec<FinanceActRow> = fees_for_trade(finance_act, &activity.trade)
            .into_iter()
            .cloned()
            .collect();
        log::debug!(
            "Selected activity {} (trade {}): {} fee rows",
            activity.activity_code,
            activity.trade,
            fees.len()
        );

        self.query = activity.activity_name.clone();
        self.state = LookupState::Selected {
            activity: activity.clone(),
            fees,
        };
        true
    }

    /// Any open state `-> Idle`, discarding the selection and its fee rows.
    pub fn close(&mut self) -> bool {
        if self.state == LookupState::Idle {
            return false;
        }
        self.state = LookupState::Idle;
        log::debug!("Search closed");
        true
    }
}

/// One read-only detail field: a code with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailField {
    pub label: &'static str,
    pub code: String,
    pub name: String,
}

/// The four ancestor fields of a selection, industry first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionDetails {
    pub fields: [DetailField; 4],
}

impl SelectionDetails {
    pub fn from_selection(activity: Option<&FlattenedActivity>) -> Self {
        let pairs = match activity {
            Some(a) => [
                (a.industry_code.clone(), a.industry_name.clone()),
                (a.category_code.clone(), a.category_name.clone()),
                (a.sub_category_code.clone(), a.sub_category_name.clone()),
                (a.activity_code.clone(), a.activity_name.clone()),
            ],
            None => Default::default(),
        };

        let fields = std::array::from_fn(|i| DetailField {
            label: DETAIL_FIELD_LABELS[i],
            code: pairs[i].0.clone(),
            name: pairs[i].1.clone(),
        });
        Self { fields }
    }
}
