//! Summary table row structs, one per visualization.
//!
//! All structs derive `Serialize` so the presentation layer can receive
//! them as JSON.

use serde::Serialize;
use ushv_survey::YesNo;

/// Case count per state for the choropleth map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateCases {
    pub state: String,
    /// Two-letter postal code; `None` for names missing from the lookup table.
    pub state_code: Option<String>,
    pub cases: u64,
}

/// Share of all cases falling in each of the 13 age bands.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgeRisk {
    pub age_category: String,
    pub cases: u64,
    /// Percent of all cases in the filtered set, 2 decimals.
    pub risk_percentage: f64,
}

/// Cases per (simplified age band, sex) cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SexAgeProportion {
    /// One of the four simplified bands.
    pub age_category: String,
    pub sex: String,
    pub cases: u64,
    /// Percent of the band's cases held by this sex, 2 decimals.
    pub proportion: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SleepHoursCases {
    pub sleep_hours: f64,
    pub cases: u64,
}

/// Case ratio per (smoker bucket, e-cigarette usage) cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SmokingVapeRatio {
    pub smoker_status: String,
    pub e_cigarette_usage: String,
    /// Every respondent in the cell, case or not.
    pub population: u64,
    pub cases: u64,
    /// `cases / population * 100`, 2 decimals; 0 for an empty cell.
    pub case_ratio: f64,
}

/// Case ratio per (smoker bucket, alcohol drinker) cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SmokingAlcoholRatio {
    pub smoker_status: String,
    pub alcohol_drinker: YesNo,
    pub population: u64,
    pub cases: u64,
    pub case_ratio: f64,
}

/// Share of all cases per general-health band.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneralHealthPercentage {
    pub general_health: String,
    pub cases: u64,
    pub case_percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhysicalActivityCases {
    pub physically_active: YesNo,
    pub cases: u64,
}

/// The eight summary tables the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    StateMap,
    AgeRisk,
    SexAgeProportion,
    SleepHours,
    SmokingAlcohol,
    SmokingVape,
    GeneralHealth,
    PhysicalActivity,
}

impl SummaryKind {
    /// Render order of the panels.
    pub const ALL: [SummaryKind; 8] = [
        SummaryKind::StateMap,
        SummaryKind::AgeRisk,
        SummaryKind::SexAgeProportion,
        SummaryKind::SleepHours,
        SummaryKind::SmokingAlcohol,
        SummaryKind::SmokingVape,
        SummaryKind::GeneralHealth,
        SummaryKind::PhysicalActivity,
    ];
}

/// Any one summary table, tagged by kind when serialized.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum SummaryTable {
    StateMap(Vec<StateCases>),
    AgeRisk(Vec<AgeRisk>),
    SexAgeProportion(Vec<SexAgeProportion>),
    SleepHours(Vec<SleepHoursCases>),
    SmokingAlcohol(Vec<SmokingAlcoholRatio>),
    SmokingVape(Vec<SmokingVapeRatio>),
    GeneralHealth(Vec<GeneralHealthPercentage>),
    PhysicalActivity(Vec<PhysicalActivityCases>),
}

impl SummaryTable {
    pub fn kind(&self) -> SummaryKind {
        match self {
            SummaryTable::StateMap(_) => SummaryKind::StateMap,
            SummaryTable::AgeRisk(_) => SummaryKind::AgeRisk,
            SummaryTable::SexAgeProportion(_) => SummaryKind::SexAgeProportion,
            SummaryTable::SleepHours(_) => SummaryKind::SleepHours,
            SummaryTable::SmokingAlcohol(_) => SummaryKind::SmokingAlcohol,
            SummaryTable::SmokingVape(_) => SummaryKind::SmokingVape,
            SummaryTable::GeneralHealth(_) => SummaryKind::GeneralHealth,
            SummaryTable::PhysicalActivity(_) => SummaryKind::PhysicalActivity,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            SummaryTable::StateMap(rows) => rows.len(),
            SummaryTable::AgeRisk(rows) => rows.len(),
            SummaryTable::SexAgeProportion(rows) => rows.len(),
            SummaryTable::SleepHours(rows) => rows.len(),
            SummaryTable::SmokingAlcohol(rows) => rows.len(),
            SummaryTable::SmokingVape(rows) => rows.len(),
            SummaryTable::GeneralHealth(rows) => rows.len(),
            SummaryTable::PhysicalActivity(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
