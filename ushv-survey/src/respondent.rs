use crate::condition::Condition;
use crate::error::{Result, SurveyError};
use crate::state_code::state_code;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header names that must be present besides the ten condition columns.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "State",
    "Sex",
    "AgeCategory",
    "GeneralHealth",
    "SleepHours",
    "SmokerStatus",
    "ECigaretteUsage",
    "AlcoholDrinkers",
    "PhysicalActivities",
];

/// Upper bound of the sleep-hours field.
pub const MAX_SLEEP_HOURS: f64 = 24.0;

/// A strict Yes/No answer.
///
/// `No` orders before `Yes`, which is also the axis order used by charts.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];

    fn parse(value: &str) -> Option<YesNo> {
        match value.trim() {
            "Yes" => Some(YesNo::Yes),
            "No" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One surveyed individual.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Respondent {
    pub state: String,
    /// Postal code derived from `state`; `None` when the name is not in the lookup table
    pub state_code: Option<&'static str>,
    pub sex: String,
    /// One of the 13 raw age bands
    pub age_category: String,
    pub general_health: String,
    /// Hours of sleep in a 24-hour period
    pub sleep_hours: f64,
    /// Free-form answer, see [`crate::category::simplify_smoker_status`]
    pub smoker_status: String,
    pub e_cigarette_usage: String,
    pub alcohol_drinker: YesNo,
    pub physically_active: YesNo,
    /// Case flags indexed by [`Condition::index`]
    pub conditions: [bool; Condition::COUNT],
}

impl Respondent {
    /// True when this respondent is a case of `condition`.
    pub fn has(&self, condition: Condition) -> bool {
        self.conditions[condition.index()]
    }

    /// True when no filter is set or the respondent lives in the filtered state.
    pub fn in_state(&self, filter: Option<&str>) -> bool {
        filter.map_or(true, |state| self.state == state)
    }
}

/// Positions of the required columns inside a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    state: usize,
    sex: usize,
    age_category: usize,
    general_health: usize,
    sleep_hours: usize,
    smoker_status: usize,
    e_cigarette_usage: usize,
    alcohol_drinkers: usize,
    physical_activities: usize,
    conditions: [usize; Condition::COUNT],
}

impl ColumnIndex {
    /// Resolve every required column against `headers`.
    ///
    /// Fails on the first missing column. Extra columns are ignored and
    /// column order is free.
    pub fn from_headers(headers: &StringRecord) -> Result<ColumnIndex> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| SurveyError::MissingColumn(name.to_string()))
        };

        let mut conditions = [0usize; Condition::COUNT];
        for condition in Condition::ALL {
            conditions[condition.index()] = find(condition.id())?;
        }

        Ok(ColumnIndex {
            state: find(REQUIRED_COLUMNS[0])?,
            sex: find(REQUIRED_COLUMNS[1])?,
            age_category: find(REQUIRED_COLUMNS[2])?,
            general_health: find(REQUIRED_COLUMNS[3])?,
            sleep_hours: find(REQUIRED_COLUMNS[4])?,
            smoker_status: find(REQUIRED_COLUMNS[5])?,
            e_cigarette_usage: find(REQUIRED_COLUMNS[6])?,
            alcohol_drinkers: find(REQUIRED_COLUMNS[7])?,
            physical_activities: find(REQUIRED_COLUMNS[8])?,
            conditions,
        })
    }

    /// Build a respondent from one data row. `row` is 1-based and only used
    /// in error messages.
    pub fn parse(&self, record: &StringRecord, row: u64) -> Result<Respondent> {
        let text = |i: usize| record.get(i).unwrap_or("").trim();

        let flag = |i: usize, column: &'static str| -> Result<YesNo> {
            YesNo::parse(text(i)).ok_or_else(|| SurveyError::InvalidValue {
                column,
                row,
                value: text(i).to_string(),
            })
        };

        let sleep_raw = text(self.sleep_hours);
        let sleep_hours = sleep_raw
            .parse::<f64>()
            .ok()
            .filter(|h| (0.0..=MAX_SLEEP_HOURS).contains(h))
            .ok_or_else(|| SurveyError::InvalidValue {
                column: "SleepHours",
                row,
                value: sleep_raw.to_string(),
            })?;

        let mut conditions = [false; Condition::COUNT];
        for condition in Condition::ALL {
            conditions[condition.index()] = text(self.conditions[condition.index()]) == "Yes";
        }

        let state = text(self.state).to_string();
        Ok(Respondent {
            state_code: state_code(&state),
            state,
            sex: text(self.sex).to_string(),
            age_category: text(self.age_category).to_string(),
            general_health: text(self.general_health).to_string(),
            sleep_hours,
            smoker_status: text(self.smoker_status).to_string(),
            e_cigarette_usage: text(self.e_cigarette_usage).to_string(),
            alcohol_drinker: flag(self.alcohol_drinkers, "AlcoholDrinkers")?,
            physically_active: flag(self.physical_activities, "PhysicalActivities")?,
            conditions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "State,Sex,GeneralHealth,PhysicalActivities,SleepHours,HadHeartAttack,HadAngina,HadStroke,HadAsthma,HadSkinCancer,HadCOPD,HadDepressiveDisorder,HadKidneyDisease,HadArthritis,HadDiabetes,SmokerStatus,ECigaretteUsage,AgeCategory,AlcoholDrinkers,BMI";

    fn record(line: &str) -> StringRecord {
        StringRecord::from(line.split(',').collect::<Vec<_>>())
    }

    #[test]
    fn parse_full_row() {
        let index = ColumnIndex::from_headers(&record(HEADER)).unwrap();
        let fields = record("California,Female,Very good,Yes,7.0,No,No,No,Yes,No,No,No,No,No,No,Never smoked,Use them every day,Age 18 to 24,No,27.1");
        let r = index.parse(&fields, 1).unwrap();
        assert_eq!(r.state, "California");
        assert_eq!(r.state_code, Some("CA"));
        assert_eq!(r.general_health, "Very good");
        assert_eq!(r.physically_active, YesNo::Yes);
        assert_eq!(r.alcohol_drinker, YesNo::No);
        assert!((r.sleep_hours - 7.0).abs() < f64::EPSILON);
        assert!(r.has(Condition::HadAsthma));
        assert!(!r.has(Condition::HadHeartAttack));
        assert_eq!(r.age_category, "Age 18 to 24");
    }

    #[test]
    fn only_exact_yes_is_a_case() {
        let index = ColumnIndex::from_headers(&record(HEADER)).unwrap();
        let fields = record("Texas,Male,Good,No,8,No,No,No,No,No,No,No,No,No,Yes but only during pregnancy (female),Former smoker,Not at all (right now),Age 30 to 34,Yes,22.0");
        let r = index.parse(&fields, 1).unwrap();
        assert!(!r.has(Condition::HadDiabetes));
    }

    #[test]
    fn missing_column_is_reported() {
        let without_stroke = HEADER.replace("HadStroke,", "");
        let err = ColumnIndex::from_headers(&record(&without_stroke)).unwrap_err();
        assert!(matches!(err, SurveyError::MissingColumn(ref c) if c == "HadStroke"));
    }

    #[test]
    fn unknown_state_has_no_code() {
        let index = ColumnIndex::from_headers(&record(HEADER)).unwrap();
        let fields = record("Atlantis,Male,Good,No,8,No,No,No,No,No,No,No,No,No,No,Never smoked,Not at all (right now),Age 30 to 34,Yes,22.0");
        let r = index.parse(&fields, 1).unwrap();
        assert_eq!(r.state_code, None);
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let index = ColumnIndex::from_headers(&record(HEADER)).unwrap();
        let fields = record("Texas,Male,Good,Maybe,8,No,No,No,No,No,No,No,No,No,No,Never smoked,Not at all (right now),Age 30 to 34,Yes,22.0");
        let err = index.parse(&fields, 4).unwrap_err();
        assert!(matches!(
            err,
            SurveyError::InvalidValue { column: "PhysicalActivities", row: 4, .. }
        ));
    }

    #[test]
    fn sleep_hours_out_of_range_is_rejected() {
        let index = ColumnIndex::from_headers(&record(HEADER)).unwrap();
        let fields = record("Texas,Male,Good,No,25,No,No,No,No,No,No,No,No,No,No,Never smoked,Not at all (right now),Age 30 to 34,Yes,22.0");
        let err = index.parse(&fields, 2).unwrap_err();
        assert!(matches!(err, SurveyError::InvalidValue { column: "SleepHours", .. }));
    }

    #[test]
    fn in_state_filter() {
        let index = ColumnIndex::from_headers(&record(HEADER)).unwrap();
        let fields = record("Ohio,Male,Good,No,6,No,No,No,No,No,No,No,No,No,No,Never smoked,Not at all (right now),Age 30 to 34,Yes,22.0");
        let r = index.parse(&fields, 1).unwrap();
        assert!(r.in_state(None));
        assert!(r.in_state(Some("Ohio")));
        assert!(!r.in_state(Some("Iowa")));
    }
}
