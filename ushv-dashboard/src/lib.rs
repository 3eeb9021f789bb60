//! Dashboard state for the health survey explorer.
//!
//! `Dashboard` owns the loaded table and the single selected-state slot.
//! A map click is the only thing that changes the selection; every render
//! pass snapshots it once into a [`RenderContext`] and feeds that snapshot
//! to all eight summaries.

pub mod click;
pub mod render;
pub mod selection;

pub use click::{interpret_click, MapClickEvent, MapPoint};
pub use render::{Panel, RenderContext, RenderPass, ALL_STATES_LABEL};
pub use selection::Selection;

use ushv_survey::error::Result;
use ushv_table::RespondentTable;

/// The loaded survey plus the user's current state selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: RespondentTable,
    selection: Selection,
}

impl Dashboard {
    /// Start with no state selected.
    pub fn new(table: RespondentTable) -> Self {
        Self {
            table,
            selection: Selection::default(),
        }
    }

    pub fn table(&self) -> &RespondentTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Apply a click on the map drawn for `condition_id`.
    ///
    /// The state map for that condition is recomputed so the clicked label
    /// can be checked against the names the map actually showed.
    pub fn click(&mut self, condition_id: &str, event: &MapClickEvent) -> Result<()> {
        let map = self.table.query_state_map(condition_id)?;
        interpret_click(event, &map, &mut self.selection);
        Ok(())
    }

    /// Compute every panel for `condition_id` under the current selection.
    pub fn render(&self, condition_id: &str) -> Result<RenderPass> {
        RenderContext::new(&self.table, condition_id, &self.selection)?.render()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use ushv_survey::SurveyError;
    use ushv_table::{SummaryKind, SummaryTable};

    #[test]
    fn click_then_render_filters_every_panel() {
        let mut dashboard = Dashboard::new(fixtures::table());
        dashboard
            .click("HadAsthma", &MapClickEvent::on_state("Texas"))
            .unwrap();
        assert_eq!(dashboard.selection().selected_state(), Some("Texas"));

        let pass = dashboard.render("HadAsthma").unwrap();
        assert_eq!(pass.scope, "Texas");

        match &pass.panel(SummaryKind::PhysicalActivity).unwrap().table {
            SummaryTable::PhysicalActivity(rows) => {
                assert_eq!(rows[0].cases, 0);
                assert_eq!(rows[1].cases, 1);
            }
            other => panic!("unexpected table {:?}", other.kind()),
        }

        // The map stays national.
        assert_eq!(pass.panel(SummaryKind::StateMap).unwrap().table.len(), 2);
    }

    #[test]
    fn selection_persists_across_conditions() {
        let mut dashboard = Dashboard::new(fixtures::table());
        dashboard
            .click("HadAsthma", &MapClickEvent::on_state("California"))
            .unwrap();

        let pass = dashboard.render("HadDiabetes").unwrap();
        assert_eq!(pass.scope, "California");
        match &pass.panel(SummaryKind::AgeRisk).unwrap().table {
            SummaryTable::AgeRisk(rows) => {
                assert!(rows.iter().all(|r| r.cases == 0 && r.risk_percentage == 0.0))
            }
            other => panic!("unexpected table {:?}", other.kind()),
        }
    }

    #[test]
    fn click_outside_the_map_clears_selection() {
        let mut dashboard = Dashboard::new(fixtures::table());
        dashboard
            .click("HadAsthma", &MapClickEvent::on_state("Texas"))
            .unwrap();
        // Ohio has no asthma cases, so the asthma map never drew it.
        dashboard
            .click("HadAsthma", &MapClickEvent::on_state("Ohio"))
            .unwrap();
        assert_eq!(dashboard.selection().selected_state(), None);
        assert_eq!(dashboard.render("HadAsthma").unwrap().scope, ALL_STATES_LABEL);
    }

    #[test]
    fn unknown_condition_leaves_selection_alone() {
        let mut dashboard = Dashboard::new(fixtures::table());
        dashboard
            .click("HadAsthma", &MapClickEvent::on_state("Texas"))
            .unwrap();
        let err = dashboard
            .click("HadGout", &MapClickEvent::default())
            .unwrap_err();
        assert!(matches!(err, SurveyError::UnknownCondition(_)));
        assert_eq!(dashboard.selection().selected_state(), Some("Texas"));
        assert!(dashboard.render("HadGout").is_err());
    }
}
