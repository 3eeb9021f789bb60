use crate::error::UnknownConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten tracked health outcomes.
///
/// Each variant corresponds to a Yes/No column of the survey file; the
/// column header doubles as the condition identifier.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Condition {
    HadHeartAttack,
    HadAngina,
    HadStroke,
    HadAsthma,
    HadSkinCancer,
    #[serde(rename = "HadCOPD")]
    HadCopd,
    HadDepressiveDisorder,
    HadKidneyDisease,
    HadArthritis,
    HadDiabetes,
}

impl Condition {
    /// Number of tracked conditions.
    pub const COUNT: usize = 10;

    /// All conditions in selection order.
    pub const ALL: [Condition; Condition::COUNT] = [
        Condition::HadHeartAttack,
        Condition::HadAngina,
        Condition::HadStroke,
        Condition::HadAsthma,
        Condition::HadSkinCancer,
        Condition::HadCopd,
        Condition::HadDepressiveDisorder,
        Condition::HadKidneyDisease,
        Condition::HadArthritis,
        Condition::HadDiabetes,
    ];

    /// Column header / identifier of this condition.
    pub fn id(self) -> &'static str {
        match self {
            Condition::HadHeartAttack => "HadHeartAttack",
            Condition::HadAngina => "HadAngina",
            Condition::HadStroke => "HadStroke",
            Condition::HadAsthma => "HadAsthma",
            Condition::HadSkinCancer => "HadSkinCancer",
            Condition::HadCopd => "HadCOPD",
            Condition::HadDepressiveDisorder => "HadDepressiveDisorder",
            Condition::HadKidneyDisease => "HadKidneyDisease",
            Condition::HadArthritis => "HadArthritis",
            Condition::HadDiabetes => "HadDiabetes",
        }
    }

    /// Display label used in chart titles and selectors.
    pub fn label(self) -> &'static str {
        match self {
            Condition::HadHeartAttack => "💔 Heart Attack",
            Condition::HadAngina => "💓 Angina",
            Condition::HadStroke => "🧠 Stroke",
            Condition::HadAsthma => "🌬️ Asthma",
            Condition::HadSkinCancer => "☀️ Skin Cancer",
            Condition::HadCopd => "😤 Chronic Obstructive Pulmonary Disease",
            Condition::HadDepressiveDisorder => "🌀 Depression",
            Condition::HadKidneyDisease => "🫁 Kidney Disease",
            Condition::HadArthritis => "🤲 Arthritis",
            Condition::HadDiabetes => "🍬 Diabetes",
        }
    }

    /// Position of this condition in [`Condition::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve an identifier to its condition.
    pub fn from_id(id: &str) -> Result<Condition, UnknownConditionError> {
        Condition::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| UnknownConditionError(id.to_string()))
    }
}

impl FromStr for Condition {
    type Err = UnknownConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::from_id(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up the display label of a condition identifier.
pub fn label_of(condition_id: &str) -> Result<&'static str, UnknownConditionError> {
    Condition::from_id(condition_id).map(Condition::label)
}

/// Every condition identifier, in selection order.
pub fn all_condition_ids() -> Vec<&'static str> {
    Condition::ALL.iter().map(|c| c.id()).collect()
}
