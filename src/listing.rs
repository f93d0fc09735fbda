use tokio::sync::watch;

use crate::{
    filter::{FilterModel, FilterState},
    handoff::Handoff,
    record::{Attributes, Record},
    selection::{CompareError, CompareReceipt, SelectionSet},
};

/// Controller for one listing page.
///
/// It owns the filter model and the selection for a catalog, and recomputes
/// the visible subset whenever the filter model publishes a new state.
pub(crate) struct ListingView<R: 'static> {
    catalog: &'static [R],
    filters: FilterModel,
    updates: watch::Receiver<FilterState>,
    selection: SelectionSet,
    visible: Vec<usize>,
}

impl<R> ListingView<R>
where
    R: Attributes + Clone + Into<Record> + 'static,
{
    pub(crate) fn new(catalog: &'static [R]) -> Self {
        Self::with_filters(catalog, FilterModel::new())
    }

    /// Opens the listing with filters carried over from an earlier visit.
    pub(crate) fn with_filters(catalog: &'static [R], filters: FilterModel) -> Self {
        let mut updates = filters.subscribe();
        let visible = matching(catalog, &updates.borrow_and_update());
        Self {
            catalog,
            filters,
            updates,
            selection: SelectionSet::new(),
            visible,
        }
    }

    /// Mutable access for filter panels. Call [`ListingView::refresh`]
    /// afterwards to pick up the change.
    pub(crate) fn filters_mut(&mut self) -> &mut FilterModel {
        &mut self.filters
    }

    /// Applies the latest published filter state, if any. Returns whether
    /// the visible subset was recomputed.
    pub(crate) fn refresh(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        self.visible = matching(self.catalog, &self.updates.borrow_and_update());
        true
    }

    pub(crate) fn visible(&self) -> impl Iterator<Item = &'static R> + '_ {
        self.visible.iter().map(|&index| &self.catalog[index])
    }

    pub(crate) fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub(crate) fn select(&mut self, id: &str) {
        self.selection.select(id);
    }

    pub(crate) fn request_compare(
        &self,
        handoff: &Handoff,
        session: &str,
    ) -> Result<CompareReceipt, CompareError> {
        self.selection.request_compare(self.catalog, handoff, session)
    }
}

fn matching<R: Attributes>(catalog: &[R], state: &FilterState) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, record)| state.matches(*record))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        catalog::{self, FilterField},
        comparison::ComparisonField,
        database::Database,
        handoff::ComparisonView,
        record::Trial,
    };

    fn ids(view: &ListingView<Trial>) -> Vec<&'static str> {
        view.visible().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn starts_with_whole_catalog() {
        let view = ListingView::new(catalog::trials());
        assert_eq!(view.visible_count(), 10);
    }

    #[test]
    fn refresh_follows_filter_notifications() {
        let mut view = ListingView::new(catalog::trials());
        assert!(!view.refresh());

        view.filters_mut().set_simple_filter("phase", "Phase 3");
        assert!(view.refresh());
        assert_eq!(view.visible_count(), 6);
        assert!(!view.refresh());

        view.filters_mut().clear_all();
        assert!(view.refresh());
        assert_eq!(view.visible_count(), 10);
        assert!(view.filters_mut().state().active_filters.is_empty());
    }

    #[test]
    fn carried_over_filters_apply_immediately() {
        let mut filters = FilterModel::new();
        filters.set_simple_filter("phase", "Phase 3");
        let mut view = ListingView::with_filters(catalog::trials(), filters);
        assert_eq!(view.visible_count(), 6);
        assert!(!view.refresh());
    }

    #[test]
    fn merck_phase_three_conditions() {
        let mut view = ListingView::new(catalog::trials());
        let filters = view.filters_mut();
        let company = filters.add_condition();
        filters.set_condition_field(company, Some(FilterField::Company));
        filters.toggle_condition_value(company, "Merck");
        let phase = filters.add_condition();
        filters.set_condition_field(phase, Some(FilterField::Phase));
        filters.toggle_condition_value(phase, "Phase 3");
        view.refresh();
        assert_eq!(ids(&view), ["NCT03539536", "NCT03834506"]);
    }

    #[tokio::test]
    async fn compare_two_of_three_trials() {
        let dir = tempfile::tempdir().unwrap();
        let handoff = Database::connect(dir.path()).unwrap().handoff();
        let mut view = ListingView::new(&catalog::trials()[..3]);

        view.select("NCT03539536");
        assert!(matches!(
            view.request_compare(&handoff, "s"),
            Err(CompareError::TooFewSelected { .. })
        ));

        view.select("NCT03539537");
        let receipt = view.request_compare(&handoff, "s").unwrap();
        assert_eq!(receipt.route, "/compare");

        let ComparisonView::Ready(table) = handoff.load("s", Duration::ZERO).await else {
            panic!("expected a comparison table");
        };
        assert_eq!(table.columns.len(), 2);
        let trial_id = table.row(ComparisonField::TrialId).unwrap();
        assert_eq!(trial_id.label, "Trial ID");
        assert_eq!(trial_id.values, ["NCT03539536", "NCT03539537"]);
    }
}
