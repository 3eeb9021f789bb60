//! Render passes.
//!
//! A pass evaluates all eight summaries against one `(condition, state)`
//! snapshot, so no panel can observe a different selection than another.

use crate::Selection;
use serde::Serialize;
use ushv_survey::error::Result;
use ushv_survey::Condition;
use ushv_table::{RespondentTable, SummaryKind, SummaryTable};

/// Scope label when no state is selected.
pub const ALL_STATES_LABEL: &str = "All U.S.";

/// Everything one render pass reads, captured once.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub table: &'a RespondentTable,
    pub condition: Condition,
    pub state: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// Snapshot `selection` for a pass over `condition_id`.
    ///
    /// Fails on an unknown identifier before anything is computed.
    pub fn new(
        table: &'a RespondentTable,
        condition_id: &str,
        selection: &'a Selection,
    ) -> Result<Self> {
        Ok(Self {
            table,
            condition: Condition::from_id(condition_id)?,
            state: selection.selected_state(),
        })
    }

    /// "All U.S." or the selected state's name.
    pub fn scope(&self) -> &'a str {
        self.state.unwrap_or(ALL_STATES_LABEL)
    }

    pub fn summarize(&self, kind: SummaryKind) -> Result<SummaryTable> {
        self.table.aggregate(kind, self.condition.id(), self.state)
    }

    /// Run every summary in panel order.
    pub fn render(&self) -> Result<RenderPass> {
        let label = self.condition.label();
        let panels = SummaryKind::ALL
            .into_iter()
            .map(|kind| -> Result<Panel> {
                Ok(Panel {
                    title: panel_title(kind, label),
                    table: self.summarize(kind)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "[USHV Debug] render: {} panels for {} ({})",
            panels.len(),
            self.condition,
            self.scope()
        );
        Ok(RenderPass {
            condition_id: self.condition.id().to_string(),
            label: label.to_string(),
            scope: self.scope().to_string(),
            panels,
        })
    }
}

/// Chart heading for `kind` under the condition's display label.
pub fn panel_title(kind: SummaryKind, label: &str) -> String {
    match kind {
        SummaryKind::StateMap => label.to_string(),
        SummaryKind::AgeRisk => format!("{} Risk Percentage by Age", label),
        SummaryKind::SexAgeProportion => {
            format!("{} Case Proportion by Sex Across Age Categories", label)
        }
        SummaryKind::SleepHours => format!("{} Case Distribution by Sleep Hours", label),
        SummaryKind::SmokingAlcohol => format!("Smoking & Alcohol Interaction: {} Risk", label),
        SummaryKind::SmokingVape => {
            format!("{} Case Ratio: Traditional Smoking vs Vape/E-Cig Use", label)
        }
        SummaryKind::GeneralHealth => format!("{} Case Percentage by General Health", label),
        SummaryKind::PhysicalActivity => {
            format!("{} Case Distribution by Physical Activities", label)
        }
    }
}

/// One chart: its heading and the summary behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    #[serde(flatten)]
    pub table: SummaryTable,
}

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPass {
    pub condition_id: String,
    pub label: String,
    pub scope: String,
    pub panels: Vec<Panel>,
}

impl RenderPass {
    pub fn panel(&self, kind: SummaryKind) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.table.kind() == kind)
    }
}
