//! Aggregation queries feeding the dashboard charts.
//!
//! Every query resolves the condition identifier first, so an unknown
//! identifier fails before any grouping happens. Case-only queries keep
//! respondents whose condition answer is exactly "Yes"; the ratio queries
//! also count the whole population of each cell. A state filter that
//! matches nothing yields the canonical categories with zero counts.
//!
//! # Category order
//!
//! Grouped counts are reindexed against the fixed orders in
//! [`ushv_survey::category`], never against what happens to be in the data.

use crate::grouping::{case_ratios, count_keys, reindex, reindex_with_extras};
use crate::models::{
    AgeRisk, GeneralHealthPercentage, PhysicalActivityCases, SexAgeProportion, SleepHoursCases,
    SmokingAlcoholRatio, SmokingVapeRatio, StateCases, SummaryKind, SummaryTable,
};
use crate::RespondentTable;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use ushv_survey::category::{
    canonical_general_health, simplify_age, simplify_smoker_status, AGE_CATEGORIES,
    E_CIGARETTE_USAGES, GENERAL_HEALTH, SEXES, SIMPLE_AGE_CATEGORIES, SMOKER_STATUSES,
};
use ushv_survey::error::Result;
use ushv_survey::{Condition, YesNo};
use ushv_utils::math::{percentage, percentages_of_total};

/// Sleep hours as an ordered grouping key.
#[derive(Debug, Clone, Copy)]
struct HoursKey(f64);

impl PartialEq for HoursKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HoursKey {}

impl PartialOrd for HoursKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HoursKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Cartesian product of two canonical axes, first axis outermost.
fn grid<A: Copy, B: Copy>(outer: &[A], inner: &[B]) -> Vec<(A, B)> {
    outer
        .iter()
        .flat_map(|a| inner.iter().map(move |b| (*a, *b)))
        .collect()
}

impl RespondentTable {
    // ───────────────────── Map ─────────────────────

    /// Case count per state, nationwide.
    ///
    /// Ignores any state filter: this is the overview the user clicks on to
    /// choose one. Only states with at least one case appear, ordered by
    /// name. The names returned here are the valid click targets.
    pub fn query_state_map(&self, condition_id: &str) -> Result<Vec<StateCases>> {
        let condition = Condition::from_id(condition_id)?;
        let counts = count_keys(
            self.cases(condition, None)
                .map(|r| (r.state.as_str(), r.state_code)),
        );
        let rows: Vec<StateCases> = counts
            .into_iter()
            .map(|((state, state_code), cases)| StateCases {
                state: state.to_string(),
                state_code: state_code.map(str::to_string),
                cases,
            })
            .collect();
        log::info!(
            "[USHV Debug] query: query_state_map returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Demographics ─────────────────────

    /// Share of cases in each of the 13 age bands.
    ///
    /// Percentages sum to 100 (within rounding) when there is at least one
    /// case and are all 0 otherwise. Rows with an unrecognized band are not
    /// counted.
    pub fn query_age_risk(&self, condition_id: &str, state: Option<&str>) -> Result<Vec<AgeRisk>> {
        let condition = Condition::from_id(condition_id)?;
        let counts = count_keys(
            self.cases(condition, state)
                .map(|r| r.age_category.as_str()),
        );
        let counted = reindex(&counts, &AGE_CATEGORIES);
        let shares =
            percentages_of_total(&counted.iter().map(|(_, cases)| *cases).collect::<Vec<_>>());

        let rows: Vec<AgeRisk> = counted
            .into_iter()
            .zip(shares)
            .map(|((age_category, cases), risk_percentage)| AgeRisk {
                age_category: age_category.to_string(),
                cases,
                risk_percentage,
            })
            .collect();
        log::info!(
            "[USHV Debug] query: query_age_risk returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Cases per (simplified age band, sex), with each sex's share of its band.
    ///
    /// The four bands times Male/Female always appear; any other observed
    /// combination (an unknown age band or sex) is appended after them.
    pub fn query_sex_age_proportion(
        &self,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<Vec<SexAgeProportion>> {
        let condition = Condition::from_id(condition_id)?;
        let counts = count_keys(
            self.cases(condition, state)
                .map(|r| (simplify_age(&r.age_category), r.sex.as_str())),
        );
        let cells = reindex_with_extras(&counts, &grid(&SIMPLE_AGE_CATEGORIES, &SEXES));

        let mut band_totals: BTreeMap<&str, u64> = BTreeMap::new();
        for ((age_category, _), cases) in &cells {
            *band_totals.entry(*age_category).or_insert(0) += cases;
        }

        let rows: Vec<SexAgeProportion> = cells
            .into_iter()
            .map(|((age_category, sex), cases)| SexAgeProportion {
                age_category: age_category.to_string(),
                sex: sex.to_string(),
                cases,
                proportion: percentage(
                    cases,
                    band_totals.get(age_category).copied().unwrap_or(0),
                ),
            })
            .collect();
        log::info!(
            "[USHV Debug] query: query_sex_age_proportion returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Lifestyle ─────────────────────

    /// Cases per reported sleep duration, ascending.
    ///
    /// Sleep hours have no canonical category list; only observed values
    /// appear, so an empty filter gives an empty table.
    pub fn query_sleep_hours(
        &self,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<Vec<SleepHoursCases>> {
        let condition = Condition::from_id(condition_id)?;
        let counts = count_keys(self.cases(condition, state).map(|r| HoursKey(r.sleep_hours)));
        let rows: Vec<SleepHoursCases> = counts
            .into_iter()
            .map(|(HoursKey(sleep_hours), cases)| SleepHoursCases { sleep_hours, cases })
            .collect();
        log::info!(
            "[USHV Debug] query: query_sleep_hours returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Case ratio per (smoker bucket, e-cigarette usage) cell.
    ///
    /// The population of a cell is everyone in it regardless of condition;
    /// the ratio is cases over population in percent. Empty cells report 0.
    pub fn query_smoking_vape_ratio(
        &self,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<Vec<SmokingVapeRatio>> {
        let condition = Condition::from_id(condition_id)?;
        let population = count_keys(self.population(state).map(|r| {
            (
                simplify_smoker_status(&r.smoker_status),
                r.e_cigarette_usage.as_str(),
            )
        }));
        let cases = count_keys(self.cases(condition, state).map(|r| {
            (
                simplify_smoker_status(&r.smoker_status),
                r.e_cigarette_usage.as_str(),
            )
        }));

        let rows: Vec<SmokingVapeRatio> =
            case_ratios(&population, &cases, &grid(&SMOKER_STATUSES, &E_CIGARETTE_USAGES))
                .into_iter()
                .map(|cell| SmokingVapeRatio {
                    smoker_status: cell.key.0.to_string(),
                    e_cigarette_usage: cell.key.1.to_string(),
                    population: cell.population,
                    cases: cell.cases,
                    case_ratio: cell.ratio,
                })
                .collect();
        log::info!(
            "[USHV Debug] query: query_smoking_vape_ratio returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Case ratio per (smoker bucket, alcohol drinker) cell.
    pub fn query_smoking_alcohol_ratio(
        &self,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<Vec<SmokingAlcoholRatio>> {
        let condition = Condition::from_id(condition_id)?;
        let population = count_keys(
            self.population(state)
                .map(|r| (simplify_smoker_status(&r.smoker_status), r.alcohol_drinker)),
        );
        let cases = count_keys(
            self.cases(condition, state)
                .map(|r| (simplify_smoker_status(&r.smoker_status), r.alcohol_drinker)),
        );

        let rows: Vec<SmokingAlcoholRatio> =
            case_ratios(&population, &cases, &grid(&SMOKER_STATUSES, &YesNo::ALL))
                .into_iter()
                .map(|cell| SmokingAlcoholRatio {
                    smoker_status: cell.key.0.to_string(),
                    alcohol_drinker: cell.key.1,
                    population: cell.population,
                    cases: cell.cases,
                    case_ratio: cell.ratio,
                })
                .collect();
        log::info!(
            "[USHV Debug] query: query_smoking_alcohol_ratio returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Health & activity ─────────────────────

    /// Share of cases per general-health band, Poor through Excellent.
    ///
    /// Always exactly five rows. Bands match ignoring case.
    pub fn query_general_health(
        &self,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<Vec<GeneralHealthPercentage>> {
        let condition = Condition::from_id(condition_id)?;
        let counts = count_keys(
            self.cases(condition, state)
                .filter_map(|r| canonical_general_health(&r.general_health)),
        );
        let counted = reindex(&counts, &GENERAL_HEALTH);
        let shares =
            percentages_of_total(&counted.iter().map(|(_, cases)| *cases).collect::<Vec<_>>());

        let rows: Vec<GeneralHealthPercentage> = counted
            .into_iter()
            .zip(shares)
            .map(|((general_health, cases), case_percentage)| GeneralHealthPercentage {
                general_health: general_health.to_string(),
                cases,
                case_percentage,
            })
            .collect();
        log::info!(
            "[USHV Debug] query: query_general_health returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Cases split by physical activity, No then Yes.
    pub fn query_physical_activity(
        &self,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<Vec<PhysicalActivityCases>> {
        let condition = Condition::from_id(condition_id)?;
        let counts = count_keys(self.cases(condition, state).map(|r| r.physically_active));
        let rows: Vec<PhysicalActivityCases> = reindex(&counts, &YesNo::ALL)
            .into_iter()
            .map(|(physically_active, cases)| PhysicalActivityCases {
                physically_active,
                cases,
            })
            .collect();
        log::info!(
            "[USHV Debug] query: query_physical_activity returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Dispatch ─────────────────────

    /// Run the query for `kind`.
    ///
    /// `state` is ignored by [`SummaryKind::StateMap`].
    pub fn aggregate(
        &self,
        kind: SummaryKind,
        condition_id: &str,
        state: Option<&str>,
    ) -> Result<SummaryTable> {
        let table = match kind {
            SummaryKind::StateMap => SummaryTable::StateMap(self.query_state_map(condition_id)?),
            SummaryKind::AgeRisk => {
                SummaryTable::AgeRisk(self.query_age_risk(condition_id, state)?)
            }
            SummaryKind::SexAgeProportion => {
                SummaryTable::SexAgeProportion(self.query_sex_age_proportion(condition_id, state)?)
            }
            SummaryKind::SleepHours => {
                SummaryTable::SleepHours(self.query_sleep_hours(condition_id, state)?)
            }
            SummaryKind::SmokingAlcohol => SummaryTable::SmokingAlcohol(
                self.query_smoking_alcohol_ratio(condition_id, state)?,
            ),
            SummaryKind::SmokingVape => {
                SummaryTable::SmokingVape(self.query_smoking_vape_ratio(condition_id, state)?)
            }
            SummaryKind::GeneralHealth => {
                SummaryTable::GeneralHealth(self.query_general_health(condition_id, state)?)
            }
            SummaryKind::PhysicalActivity => {
                SummaryTable::PhysicalActivity(self.query_physical_activity(condition_id, state)?)
            }
        };
        Ok(table)
    }
}
