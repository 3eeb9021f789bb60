//! Map-click interpretation.
//!
//! The choropleth reports a click as a list of points, each labelled with
//! the hovered state's name. The first point wins; an empty list clears
//! the selection.

use crate::Selection;
use serde::{Deserialize, Serialize};
use ushv_table::models::StateCases;

/// One clicked point on the state map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPoint {
    /// State name shown on hover
    #[serde(rename = "hovertext")]
    pub hover_text: String,
    /// Postal code of the clicked shape, when the map supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A click on the state map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapClickEvent {
    #[serde(default)]
    pub points: Vec<MapPoint>,
}

impl MapClickEvent {
    /// A click landing on `state`.
    pub fn on_state(state: impl Into<String>) -> Self {
        Self {
            points: vec![MapPoint {
                hover_text: state.into(),
                location: None,
            }],
        }
    }
}

/// Update `selection` from a map click.
///
/// The first point's label becomes the selected state if it names a row of
/// `map`; no points, or a label the map never drew, clears the selection.
/// Applying the same event twice leaves the same selection.
pub fn interpret_click(event: &MapClickEvent, map: &[StateCases], selection: &mut Selection) {
    let clicked = match event.points.first() {
        Some(point) => point.hover_text.trim(),
        None => {
            log::debug!("[USHV Debug] click: No points, clearing state filter");
            selection.set_selected_state(None);
            return;
        }
    };

    if map.iter().any(|row| row.state == clicked) {
        log::info!("[USHV Debug] click: Selected state {}", clicked);
        selection.set_selected_state(Some(clicked.to_string()));
    } else {
        log::warn!(
            "[USHV Debug] click: {:?} is not on the current map, clearing state filter",
            clicked
        );
        selection.set_selected_state(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> Vec<StateCases> {
        ["Alaska", "Nevada"]
            .into_iter()
            .map(|state| StateCases {
                state: state.to_string(),
                state_code: ushv_survey::state_code::state_code(state).map(str::to_string),
                cases: 3,
            })
            .collect()
    }

    #[test]
    fn first_point_wins() {
        let event = MapClickEvent {
            points: vec![
                MapPoint {
                    hover_text: "Nevada".to_string(),
                    location: Some("NV".to_string()),
                },
                MapPoint {
                    hover_text: "Alaska".to_string(),
                    location: Some("AK".to_string()),
                },
            ],
        };
        let mut selection = Selection::new();
        interpret_click(&event, &map(), &mut selection);
        assert_eq!(selection.selected_state(), Some("Nevada"));
    }

    #[test]
    fn empty_event_clears() {
        let mut selection = Selection::new();
        selection.set_selected_state(Some("Alaska".to_string()));
        interpret_click(&MapClickEvent::default(), &map(), &mut selection);
        assert_eq!(selection.selected_state(), None);
    }

    #[test]
    fn unknown_label_clears() {
        let mut selection = Selection::new();
        selection.set_selected_state(Some("Alaska".to_string()));
        interpret_click(&MapClickEvent::on_state("Atlantis"), &map(), &mut selection);
        assert_eq!(selection.selected_state(), None);
    }

    #[test]
    fn idempotent() {
        let event = MapClickEvent::on_state("Alaska");
        let mut once = Selection::new();
        interpret_click(&event, &map(), &mut once);
        let mut twice = once.clone();
        interpret_click(&event, &map(), &mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn deserializes_map_payload() {
        let event: MapClickEvent = serde_json::from_str(
            r#"{"points":[{"hovertext":"Alaska","location":"AK","z":3}]}"#,
        )
        .unwrap();
        assert_eq!(event.points[0].hover_text, "Alaska");
        assert_eq!(event.points[0].location.as_deref(), Some("AK"));

        let empty: MapClickEvent = serde_json::from_str("{}").unwrap();
        assert!(empty.points.is_empty());
    }
}
