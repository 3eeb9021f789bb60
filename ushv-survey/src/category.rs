//! Canonical category orders shared by every aggregation.
//!
//! Grouped results are reindexed against these sequences rather than the
//! values found in the data, so a category with no matching rows still
//! shows up with a zero count.

/// The 13 raw age bands, youngest first.
pub const AGE_CATEGORIES: [&str; 13] = [
    "Age 18 to 24",
    "Age 25 to 29",
    "Age 30 to 34",
    "Age 35 to 39",
    "Age 40 to 44",
    "Age 45 to 49",
    "Age 50 to 54",
    "Age 55 to 59",
    "Age 60 to 64",
    "Age 65 to 69",
    "Age 70 to 74",
    "Age 75 to 79",
    "Age 80 or older",
];

/// The four collapsed age bands, youngest first.
pub const SIMPLE_AGE_CATEGORIES: [&str; 4] = ["<45 Years", "45-64 Years", "65-79 Years", ">=80 Years"];

/// Self-reported general health, worst first.
pub const GENERAL_HEALTH: [&str; 5] = ["Poor", "Fair", "Good", "Very Good", "Excellent"];

/// Collapsed smoker buckets.
pub const SMOKER_STATUSES: [&str; 3] = ["Never smoked", "Former smoker", "Current smoker"];

/// E-cigarette usage answers.
pub const E_CIGARETTE_USAGES: [&str; 4] = [
    "Never used e-cigarettes in my entire life",
    "Not at all (right now)",
    "Use them some days",
    "Use them every day",
];

/// Sex axis order.
pub const SEXES: [&str; 2] = ["Male", "Female"];

/// Collapse one of the 13 raw age bands into one of four.
///
/// Unrecognized input is returned unchanged.
pub fn simplify_age(age_category: &str) -> &str {
    match age_category {
        "Age 18 to 24" | "Age 25 to 29" | "Age 30 to 34" | "Age 35 to 39" | "Age 40 to 44" => {
            SIMPLE_AGE_CATEGORIES[0]
        }
        "Age 45 to 49" | "Age 50 to 54" | "Age 55 to 59" | "Age 60 to 64" => {
            SIMPLE_AGE_CATEGORIES[1]
        }
        "Age 65 to 69" | "Age 70 to 74" | "Age 75 to 79" => SIMPLE_AGE_CATEGORIES[2],
        "Age 80 or older" => SIMPLE_AGE_CATEGORIES[3],
        other => other,
    }
}

/// Collapse a free-form smoker status into never/former/current.
///
/// "Current" wins over "Former", which wins over "Never". Anything else is
/// returned unchanged.
pub fn simplify_smoker_status(status: &str) -> &str {
    if status.contains("Current") {
        SMOKER_STATUSES[2]
    } else if status.contains("Former") {
        SMOKER_STATUSES[1]
    } else if status.contains("Never") {
        SMOKER_STATUSES[0]
    } else {
        status
    }
}

/// Map a raw general-health answer onto its canonical spelling.
///
/// The 2022 file writes "Very good"; matching ignores ASCII case.
pub fn canonical_general_health(value: &str) -> Option<&'static str> {
    GENERAL_HEALTH
        .iter()
        .copied()
        .find(|band| band.eq_ignore_ascii_case(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplify_age_is_total_over_known_bands() {
        for band in AGE_CATEGORIES {
            let simple = simplify_age(band);
            assert!(
                SIMPLE_AGE_CATEGORIES.contains(&simple),
                "{} mapped to {}",
                band,
                simple
            );
        }
    }

    #[test]
    fn simplify_age_boundaries() {
        assert_eq!(simplify_age("Age 40 to 44"), "<45 Years");
        assert_eq!(simplify_age("Age 45 to 49"), "45-64 Years");
        assert_eq!(simplify_age("Age 60 to 64"), "45-64 Years");
        assert_eq!(simplify_age("Age 65 to 69"), "65-79 Years");
        assert_eq!(simplify_age("Age 75 to 79"), "65-79 Years");
        assert_eq!(simplify_age("Age 80 or older"), ">=80 Years");
    }

    #[test]
    fn simplify_age_echoes_unknown() {
        assert_eq!(simplify_age("Age 12 to 17"), "Age 12 to 17");
        assert_eq!(simplify_age(""), "");
    }

    #[test]
    fn simplify_smoker_status_buckets() {
        assert_eq!(
            simplify_smoker_status("Current smoker - now smokes every day"),
            "Current smoker"
        );
        assert_eq!(
            simplify_smoker_status("Current smoker - now smokes some days"),
            "Current smoker"
        );
        assert_eq!(simplify_smoker_status("Former smoker"), "Former smoker");
        assert_eq!(simplify_smoker_status("Never smoked"), "Never smoked");
        assert_eq!(simplify_smoker_status("Prefers not to say"), "Prefers not to say");
    }

    #[test]
    fn simplify_smoker_status_precedence() {
        assert_eq!(simplify_smoker_status("Former, Current"), "Current smoker");
        assert_eq!(simplify_smoker_status("Never Former"), "Former smoker");
    }

    #[test]
    fn general_health_matches_ignoring_case() {
        assert_eq!(canonical_general_health("Very good"), Some("Very Good"));
        assert_eq!(canonical_general_health("Poor"), Some("Poor"));
        assert_eq!(canonical_general_health("Okay"), None);
    }
}
