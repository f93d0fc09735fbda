//! Filter criteria shared by every listing.
//!
//! A [`FilterModel`] owns the current [`FilterState`] and publishes a copy
//! to subscribers after every change. Listings evaluate the published state
//! against their own records with [`FilterState::matches`].

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::OnceLock,
};

use async_graphql::Enum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::{catalog::FilterField, record::Attributes};

static IDENTIFIER_SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn identifier_separator() -> &'static Regex {
    IDENTIFIER_SEPARATOR.get_or_init(|| Regex::new(r"[\s,;]+").expect("valid regex"))
}

/// A simple filter selection: one value from a dropdown, or a set from a
/// multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum FilterValue {
    One(String),
    Many(BTreeSet<String>),
}

impl FilterValue {
    /// An empty string or an empty set does not constrain matching.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            FilterValue::One(value) => value.is_empty(),
            FilterValue::Many(values) => values.is_empty(),
        }
    }

    fn contains(&self, candidate: &str) -> bool {
        match self {
            FilterValue::One(value) => value == candidate,
            FilterValue::Many(values) => values.contains(candidate),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::One(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::One(value)
    }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
    fn from(values: [&str; N]) -> Self {
        FilterValue::Many(values.into_iter().map(ToString::to_string).collect())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values.into_iter().collect())
    }
}

#[derive(Enum, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Operator {
    #[default]
    Include,
    Exclude,
}

/// How a condition combines with the result of the conditions before it.
#[derive(Enum, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Logic {
    #[default]
    And,
    Or,
}

/// One row of the advanced filter builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FilterCondition {
    pub(crate) field: Option<FilterField>,
    pub(crate) operator: Operator,
    /// Always empty while `field` is unset.
    pub(crate) values: BTreeSet<String>,
    /// Ignored on the first condition.
    pub(crate) logic: Logic,
}

impl FilterCondition {
    /// Conditions without a field or without values are vacuously true.
    pub(crate) fn evaluate<R: Attributes + ?Sized>(&self, record: &R) -> bool {
        let Some(field) = self.field else {
            return true;
        };
        if self.values.is_empty() {
            return true;
        }
        let hit = record
            .values(field)
            .into_iter()
            .any(|value| self.values.contains(value));
        match self.operator {
            Operator::Include => hit,
            Operator::Exclude => !hit,
        }
    }
}

/// The complete, serializable filter state of one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FilterState {
    /// Simple selections keyed by field name. Unknown names are kept as-is.
    pub(crate) criteria: BTreeMap<String, FilterValue>,
    pub(crate) conditions: Vec<FilterCondition>,
    pub(crate) search_text: String,
    pub(crate) identifier_search: String,
    /// Names of fields with a non-empty simple selection, in the order they
    /// became active.
    pub(crate) active_filters: Vec<String>,
}

impl FilterState {
    /// Whether `record` passes every active criterion, the free-text
    /// searches, and the condition sequence.
    pub(crate) fn matches<R: Attributes + ?Sized>(&self, record: &R) -> bool {
        self.matches_search(record)
            && self.matches_identifier(record)
            && self.matches_criteria(record)
            && self.matches_conditions(record)
    }

    fn matches_search<R: Attributes + ?Sized>(&self, record: &R) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record
            .haystack()
            .into_iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }

    fn matches_identifier<R: Attributes + ?Sized>(&self, record: &R) -> bool {
        let tokens: Vec<String> = identifier_separator()
            .split(self.identifier_search.trim())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();
        if tokens.is_empty() {
            return true;
        }
        record.identifiers().into_iter().any(|id| {
            let id = id.to_lowercase();
            tokens.iter().any(|token| id.contains(token.as_str()))
        })
    }

    fn matches_criteria<R: Attributes + ?Sized>(&self, record: &R) -> bool {
        self.criteria
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .all(|(name, selected)| match name.parse::<FilterField>() {
                Ok(field) => record
                    .values(field)
                    .into_iter()
                    .any(|value| selected.contains(value)),
                Err(_) => false,
            })
    }

    /// Folds the conditions left to right; there is no precedence between
    /// `and` and `or`.
    fn matches_conditions<R: Attributes + ?Sized>(&self, record: &R) -> bool {
        let mut conditions = self.conditions.iter();
        let Some(first) = conditions.next() else {
            return true;
        };
        conditions.fold(first.evaluate(record), |acc, condition| {
            match condition.logic {
                Logic::And => acc && condition.evaluate(record),
                Logic::Or => acc || condition.evaluate(record),
            }
        })
    }
}

/// Owns a listing's filter state and notifies subscribers of every change.
///
/// Condition indexes must be in range; an out-of-range index is a caller
/// bug and panics.
#[derive(Debug)]
pub(crate) struct FilterModel {
    state: FilterState,
    revision: u64,
    notifier: watch::Sender<FilterState>,
}

impl Default for FilterModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterModel {
    pub(crate) fn new() -> Self {
        let (notifier, _) = watch::channel(FilterState::default());
        Self {
            state: FilterState::default(),
            revision: 0,
            notifier,
        }
    }

    /// Resumes a model from a saved state, continuing its revision count.
    pub(crate) fn restore(state: FilterState, revision: u64) -> Self {
        let (notifier, _) = watch::channel(state.clone());
        Self {
            state,
            revision,
            notifier,
        }
    }

    pub(crate) fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of notifications published so far.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    /// A receiver that observes the state published after each change.
    pub(crate) fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.notifier.subscribe()
    }

    fn emit(&mut self) {
        self.revision += 1;
        debug!(revision = self.revision, "filter state changed");
        self.notifier.send_replace(self.state.clone());
    }

    /// Sets or clears a simple filter and updates the active-filter badges.
    pub(crate) fn set_simple_filter(&mut self, field: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        if value.is_empty() {
            self.state.criteria.remove(field);
            self.state.active_filters.retain(|active| active != field);
        } else {
            if !self.state.active_filters.iter().any(|active| active == field) {
                self.state.active_filters.push(field.to_string());
            }
            self.state.criteria.insert(field.to_string(), value);
        }
        self.emit();
    }

    pub(crate) fn set_search_text(&mut self, text: &str) {
        self.state.search_text = text.to_string();
        self.emit();
    }

    pub(crate) fn set_identifier_search(&mut self, text: &str) {
        self.state.identifier_search = text.to_string();
        self.emit();
    }

    /// Appends an empty `include` / `and` condition and returns its index.
    pub(crate) fn add_condition(&mut self) -> usize {
        self.state.conditions.push(FilterCondition::default());
        self.emit();
        self.state.conditions.len() - 1
    }

    pub(crate) fn remove_condition(&mut self, index: usize) {
        self.state.conditions.remove(index);
        self.emit();
    }

    /// Chooses (or clears) the field of a condition. Values always reset.
    pub(crate) fn set_condition_field(&mut self, index: usize, field: Option<FilterField>) {
        let condition = &mut self.state.conditions[index];
        condition.field = field;
        condition.values.clear();
        self.emit();
    }

    pub(crate) fn set_condition_operator(&mut self, index: usize, operator: Operator) {
        self.state.conditions[index].operator = operator;
        self.emit();
    }

    pub(crate) fn set_condition_logic(&mut self, index: usize, logic: Logic) {
        self.state.conditions[index].logic = logic;
        self.emit();
    }

    /// Adds `value` to the condition's values if absent, removes it otherwise.
    /// Does nothing when no field is chosen.
    pub(crate) fn toggle_condition_value(&mut self, index: usize, value: &str) {
        let condition = &mut self.state.conditions[index];
        if condition.field.is_none() {
            return;
        }
        if !condition.values.remove(value) {
            condition.values.insert(value.to_string());
        }
        self.emit();
    }

    /// Selects the whole domain of the condition's field. Does nothing when
    /// no field is chosen.
    pub(crate) fn select_all_values_for_condition(&mut self, index: usize) {
        let condition = &mut self.state.conditions[index];
        let Some(field) = condition.field else {
            return;
        };
        condition.values = field.domain().iter().map(ToString::to_string).collect();
        self.emit();
    }

    /// Empties the condition's values but keeps the condition.
    pub(crate) fn clear_condition(&mut self, index: usize) {
        self.state.conditions[index].values.clear();
        self.emit();
    }

    /// Resets every criterion, condition and search box, notifying once.
    pub(crate) fn clear_all(&mut self) {
        self.state = FilterState::default();
        self.emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{self, FilterField, PHASES},
        record::Trial,
    };

    fn visible(state: &FilterState) -> Vec<&'static Trial> {
        catalog::trials()
            .iter()
            .filter(|trial| state.matches(*trial))
            .collect()
    }

    fn ids(trials: &[&Trial]) -> Vec<String> {
        trials.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn empty_state_matches_everything() {
        let model = FilterModel::new();
        assert_eq!(visible(model.state()).len(), catalog::trials().len());
        assert!(catalog::abstracts()
            .iter()
            .all(|a| model.state().matches(a)));
        assert!(catalog::treatments()
            .iter()
            .all(|t| model.state().matches(t)));
    }

    #[test]
    fn simple_phase_filter() {
        let mut model = FilterModel::new();
        model.set_simple_filter("phase", "Phase 3");
        let expected = catalog::trials()
            .iter()
            .filter(|t| t.phase == "Phase 3")
            .count();
        let shown = visible(model.state());
        assert_eq!(shown.len(), expected);
        assert!(shown.iter().all(|t| t.phase == "Phase 3"));
    }

    #[test]
    fn simple_filters_combine_with_and() {
        let mut model = FilterModel::new();
        model.set_simple_filter("company", "Merck");
        model.set_simple_filter("phase", "Phase 3");
        assert_eq!(
            ids(&visible(model.state())),
            ["NCT03539536", "NCT03834506"]
        );
    }

    #[test]
    fn array_field_uses_intersection() {
        let mut model = FilterModel::new();
        model.set_simple_filter("drugs", ["Ipilimumab", "Sotorasib"]);
        assert_eq!(
            ids(&visible(model.state())),
            ["NCT03539537", "NCT03600883"]
        );
    }

    #[test]
    fn empty_value_deactivates_field() {
        let mut model = FilterModel::new();
        model.set_simple_filter("phase", "Phase 3");
        model.set_simple_filter("status", ["Completed"]);
        assert_eq!(model.state().active_filters, ["phase", "status"]);

        model.set_simple_filter("phase", "");
        assert_eq!(model.state().active_filters, ["status"]);
        assert!(!model.state().criteria.contains_key("phase"));

        model.set_simple_filter("status", Vec::<String>::new());
        assert!(model.state().active_filters.is_empty());
        assert_eq!(visible(model.state()).len(), catalog::trials().len());
    }

    #[test]
    fn badge_is_not_duplicated() {
        let mut model = FilterModel::new();
        model.set_simple_filter("phase", "Phase 3");
        model.set_simple_filter("phase", "Phase 2");
        assert_eq!(model.state().active_filters, ["phase"]);
    }

    #[test]
    fn unknown_field_is_stored_but_matches_nothing() {
        let mut model = FilterModel::new();
        model.set_simple_filter("sponsorCountry", "US");
        assert_eq!(model.state().active_filters, ["sponsorCountry"]);
        assert!(visible(model.state()).is_empty());
    }

    #[test]
    fn value_outside_domain_matches_nothing() {
        let mut model = FilterModel::new();
        model.set_simple_filter("phase", "Phase 5");
        assert!(visible(model.state()).is_empty());
    }

    #[test]
    fn new_condition_defaults() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        assert_eq!(index, 0);
        let condition = &model.state().conditions[0];
        assert_eq!(condition.field, None);
        assert!(condition.values.is_empty());
        assert_eq!(condition.operator, Operator::Include);
        assert_eq!(condition.logic, Logic::And);
    }

    #[test]
    fn include_conditions_with_and() {
        let mut model = FilterModel::new();
        let first = model.add_condition();
        model.set_condition_field(first, Some(FilterField::Company));
        model.toggle_condition_value(first, "Merck");
        let second = model.add_condition();
        model.set_condition_field(second, Some(FilterField::Phase));
        model.toggle_condition_value(second, "Phase 3");
        model.set_condition_logic(second, Logic::And);

        let shown = visible(model.state());
        assert_eq!(ids(&shown), ["NCT03539536", "NCT03834506"]);
        assert!(shown
            .iter()
            .all(|t| t.sponsor == "Merck" && t.phase == "Phase 3"));
    }

    #[test]
    fn or_logic_folds_left_to_right() {
        let mut model = FilterModel::new();
        let first = model.add_condition();
        model.set_condition_field(first, Some(FilterField::Company));
        model.toggle_condition_value(first, "Amgen");
        let second = model.add_condition();
        model.set_condition_field(second, Some(FilterField::Indication));
        model.toggle_condition_value(second, "Melanoma");
        model.set_condition_logic(second, Logic::Or);
        let third = model.add_condition();
        model.set_condition_field(third, Some(FilterField::Status));
        model.toggle_condition_value(third, "Completed");

        // (Amgen OR Melanoma) AND Completed
        assert_eq!(ids(&visible(model.state())), ["NCT03539537"]);
    }

    #[test]
    fn exclude_rejects_intersecting_records() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        model.set_condition_field(index, Some(FilterField::Drugs));
        model.set_condition_operator(index, Operator::Exclude);
        model.toggle_condition_value(index, "Pembrolizumab");

        let condition = &model.state().conditions[index];
        for trial in catalog::trials() {
            let uses = trial.drugs.iter().any(|d| d == "Pembrolizumab");
            assert_eq!(condition.evaluate(trial), !uses, "{}", trial.id);
        }
    }

    #[test]
    fn first_condition_logic_is_ignored() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        model.set_condition_field(index, Some(FilterField::Phase));
        model.toggle_condition_value(index, "Phase 2");
        let and_result = ids(&visible(model.state()));
        model.set_condition_logic(index, Logic::Or);
        assert_eq!(ids(&visible(model.state())), and_result);
    }

    #[test]
    fn empty_condition_does_not_constrain() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        assert_eq!(visible(model.state()).len(), catalog::trials().len());
        model.set_condition_field(index, Some(FilterField::Phase));
        model.set_condition_operator(index, Operator::Exclude);
        assert_eq!(visible(model.state()).len(), catalog::trials().len());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        model.set_condition_field(index, Some(FilterField::Phase));
        model.toggle_condition_value(index, "Phase 1");
        let before = model.state().conditions[index].values.clone();
        model.toggle_condition_value(index, "Phase 3");
        model.toggle_condition_value(index, "Phase 3");
        assert_eq!(model.state().conditions[index].values, before);
    }

    #[test]
    fn changing_field_resets_values() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        model.set_condition_field(index, Some(FilterField::Phase));
        model.toggle_condition_value(index, "Phase 3");
        model.set_condition_field(index, Some(FilterField::Status));
        assert!(model.state().conditions[index].values.is_empty());
        model.toggle_condition_value(index, "Active");
        model.set_condition_field(index, None);
        assert!(model.state().conditions[index].values.is_empty());
    }

    #[test]
    fn toggle_without_field_is_ignored() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        let rx = model.subscribe();
        let revision = model.revision();

        model.toggle_condition_value(index, "Phase 3");
        assert!(model.state().conditions[index].values.is_empty());
        assert_eq!(model.revision(), revision);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn restore_resumes_revision_and_state() {
        let mut model = FilterModel::new();
        model.set_simple_filter("phase", "Phase 3");
        let restored = FilterModel::restore(model.state().clone(), model.revision());
        assert_eq!(restored.state(), model.state());
        assert_eq!(restored.revision(), 1);
        assert_eq!(*restored.subscribe().borrow(), *model.state());
    }

    #[test]
    fn select_all_uses_field_domain() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        let revision = model.revision();
        model.select_all_values_for_condition(index);
        assert!(model.state().conditions[index].values.is_empty());
        assert_eq!(model.revision(), revision);

        model.set_condition_field(index, Some(FilterField::Phase));
        model.select_all_values_for_condition(index);
        let values: Vec<_> = model.state().conditions[index]
            .values
            .iter()
            .map(String::as_str)
            .collect();
        let mut domain = PHASES.to_vec();
        domain.sort_unstable();
        assert_eq!(values, domain);
    }

    #[test]
    fn clear_condition_keeps_condition() {
        let mut model = FilterModel::new();
        let index = model.add_condition();
        model.set_condition_field(index, Some(FilterField::Phase));
        model.select_all_values_for_condition(index);
        model.clear_condition(index);
        assert_eq!(model.state().conditions.len(), 1);
        assert!(model.state().conditions[index].values.is_empty());
        assert_eq!(
            model.state().conditions[index].field,
            Some(FilterField::Phase)
        );
    }

    #[test]
    fn remove_condition_shifts_the_rest() {
        let mut model = FilterModel::new();
        model.add_condition();
        let second = model.add_condition();
        model.set_condition_field(second, Some(FilterField::Status));
        model.remove_condition(0);
        assert_eq!(model.state().conditions.len(), 1);
        assert_eq!(
            model.state().conditions[0].field,
            Some(FilterField::Status)
        );
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let mut model = FilterModel::new();
        model.toggle_condition_value(3, "Phase 3");
    }

    #[test]
    fn clear_all_resets_and_notifies_once() {
        let mut model = FilterModel::new();
        let mut rx = model.subscribe();
        model.set_simple_filter("phase", "Phase 3");
        model.set_search_text("pembro");
        model.set_identifier_search("NCT0353");
        let index = model.add_condition();
        model.set_condition_field(index, Some(FilterField::Phase));
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        let revision = model.revision();
        model.clear_all();
        assert_eq!(model.revision(), revision + 1);
        assert_eq!(model.state(), &FilterState::default());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), FilterState::default());
    }

    #[test]
    fn subscribers_see_latest_state() {
        let mut model = FilterModel::new();
        let mut rx = model.subscribe();
        model.set_simple_filter("company", "Merck");
        assert!(rx.has_changed().unwrap());
        let published = rx.borrow_and_update().clone();
        assert_eq!(&published, model.state());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn search_text_is_case_insensitive() {
        let mut model = FilterModel::new();
        model.set_search_text("  PEMBROLIZUMAB ");
        let shown = visible(model.state());
        assert!(!shown.is_empty());
        assert!(shown
            .iter()
            .all(|t| t.drugs.iter().any(|d| d == "Pembrolizumab")
                || t.title.contains("Pembrolizumab")));
    }

    #[test]
    fn identifier_search_accepts_lists() {
        let mut model = FilterModel::new();
        model.set_identifier_search("nct03539537, NCT04083599;");
        assert_eq!(
            ids(&visible(model.state())),
            ["NCT03539537", "NCT04083599"]
        );
    }

    #[test]
    fn identifier_search_finds_abstracts_by_trial() {
        let mut model = FilterModel::new();
        model.set_identifier_search("NCT04294810");
        let shown: Vec<_> = catalog::abstracts()
            .iter()
            .filter(|a| model.state().matches(*a))
            .map(|a| a.abstract_number.as_str())
            .collect();
        assert_eq!(shown, ["GS01-01"]);
    }

    #[test]
    fn state_serializes_for_views() {
        let mut model = FilterModel::new();
        model.set_simple_filter("phase", "Phase 3");
        model.set_simple_filter("drugs", ["Sotorasib"]);
        let json = serde_json::to_value(model.state()).unwrap();
        assert_eq!(json["criteria"]["phase"], "Phase 3");
        assert_eq!(json["criteria"]["drugs"][0], "Sotorasib");
        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(&back, model.state());
    }
}
