//! In-memory respondent table and aggregation queries for the 2022 U.S.
//! health survey dashboard.
//!
//! The whole survey file is parsed once into typed [`Respondent`] records
//! held behind an `Rc`. Every chart on the dashboard is fed by one of the
//! `query_*` methods, each a pure function of the table, a condition
//! identifier and an optional state filter.
//!
//! # Usage
//!
//! ```rust
//! use ushv_table::RespondentTable;
//!
//! let csv = "\
//! State,Sex,AgeCategory,GeneralHealth,SleepHours,SmokerStatus,ECigaretteUsage,AlcoholDrinkers,PhysicalActivities,HadHeartAttack,HadAngina,HadStroke,HadAsthma,HadSkinCancer,HadCOPD,HadDepressiveDisorder,HadKidneyDisease,HadArthritis,HadDiabetes
//! California,Female,Age 18 to 24,Good,7,Never smoked,Not at all (right now),No,Yes,No,No,No,Yes,No,No,No,No,No,No
//! California,Male,Age 80 or older,Poor,6,Former smoker,Not at all (right now),Yes,No,No,No,No,Yes,No,No,No,No,No,No
//! ";
//! let table = RespondentTable::from_csv_str(csv).unwrap();
//! let ages = table.query_age_risk("HadAsthma", Some("California")).unwrap();
//! assert_eq!(ages.len(), 13);
//! assert_eq!(ages[0].risk_percentage, 50.0);
//! assert_eq!(ages[12].risk_percentage, 50.0);
//! ```
//!
//! # Summary tables
//!
//! See [`models`] for the row type of each table and [`SummaryKind`] for
//! the full list.

pub mod cache;
pub mod grouping;
mod loader;
pub mod models;
mod queries;

pub use cache::DatasetCache;
pub use models::{SummaryKind, SummaryTable};

use std::rc::Rc;
use ushv_survey::{Condition, Respondent};

/// The full, immutable set of survey respondents.
///
/// Cheaply cloneable (via `Rc`); clones share the same rows.
#[derive(Debug, Clone)]
pub struct RespondentTable {
    rows: Rc<[Respondent]>,
}

impl RespondentTable {
    pub fn new(rows: Vec<Respondent>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[Respondent] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when both handles point at the same loaded rows.
    pub fn ptr_eq(&self, other: &RespondentTable) -> bool {
        Rc::ptr_eq(&self.rows, &other.rows)
    }

    /// Respondents in `state` (or everywhere), case or not.
    fn population<'a>(&'a self, state: Option<&'a str>) -> impl Iterator<Item = &'a Respondent> + 'a {
        self.rows.iter().filter(move |r| r.in_state(state))
    }

    /// Respondents in `state` (or everywhere) who are cases of `condition`.
    fn cases<'a>(
        &'a self,
        condition: Condition,
        state: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Respondent> + 'a {
        self.population(state).filter(move |r| r.has(condition))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Header in the column order of the 2022 file, with a few columns the
    /// loader ignores.
    pub const HEADER: &str = "State,Sex,GeneralHealth,PhysicalHealthDays,PhysicalActivities,SleepHours,HadHeartAttack,HadAngina,HadStroke,HadAsthma,HadSkinCancer,HadCOPD,HadDepressiveDisorder,HadKidneyDisease,HadArthritis,HadDiabetes,SmokerStatus,ECigaretteUsage,AgeCategory,AlcoholDrinkers";

    /// Builder for one CSV data line matching [`HEADER`].
    #[derive(Clone)]
    pub struct Row {
        pub state: &'static str,
        pub sex: &'static str,
        pub general_health: &'static str,
        pub physically_active: &'static str,
        pub sleep_hours: &'static str,
        /// Identifiers of conditions answered "Yes"
        pub conditions: &'static [&'static str],
        pub smoker_status: &'static str,
        pub e_cigarette_usage: &'static str,
        pub age_category: &'static str,
        pub alcohol_drinker: &'static str,
    }

    impl Default for Row {
        fn default() -> Self {
            Row {
                state: "California",
                sex: "Female",
                general_health: "Good",
                physically_active: "Yes",
                sleep_hours: "7",
                conditions: &[],
                smoker_status: "Never smoked",
                e_cigarette_usage: "Never used e-cigarettes in my entire life",
                age_category: "Age 40 to 44",
                alcohol_drinker: "No",
            }
        }
    }

    impl Row {
        pub fn line(&self) -> String {
            let flags: Vec<&str> = ushv_survey::condition::all_condition_ids()
                .into_iter()
                .map(|id| if self.conditions.contains(&id) { "Yes" } else { "No" })
                .collect();
            format!(
                "{},{},{},0,{},{},{},\"{}\",{},{},{}",
                self.state,
                self.sex,
                self.general_health,
                self.physically_active,
                self.sleep_hours,
                flags.join(","),
                self.smoker_status,
                self.e_cigarette_usage,
                self.age_category,
                self.alcohol_drinker,
            )
        }
    }

    /// Full CSV document for `rows`.
    pub fn csv(rows: &[Row]) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for row in rows {
            out.push_str(&row.line());
            out.push('\n');
        }
        out
    }

    /// `n` copies of `row`.
    pub fn repeat(row: Row, n: usize) -> Vec<Row> {
        vec![row; n]
    }
}
