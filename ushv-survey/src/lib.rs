//! Core types for the 2022 U.S. health survey dataset.
//!
//! Everything here is independent of any loaded data: the condition
//! registry, the canonical category orders shared by every aggregation,
//! the state-code lookup and the typed respondent record.

pub mod category;
pub mod condition;
pub mod error;
pub mod respondent;
pub mod state_code;

pub use condition::Condition;
pub use error::{SurveyError, UnknownConditionError};
pub use respondent::{Respondent, YesNo};
