//! Dashboard view model
//!
//! The three screens of the application and the events that move between
//! them, independent of any rendering framework.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{LocationTable, MapLayer};
use crate::resolver::LocationQuery;
use crate::types::Coordinates;

/// Screen currently shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Landing,
    FarmSelection,
    Dashboard,
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::Landing => write!(f, "landing"),
            ViewState::FarmSelection => write!(f, "farm-selection"),
            ViewState::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// User actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    Start,
    Search(String),
    SelectVillage(String),
    DropPin(Coordinates),
    Continue,
    Back,
    SelectLayer(MapLayer),
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            ViewEvent::Start => "start",
            ViewEvent::Search(_) => "search",
            ViewEvent::SelectVillage(_) => "select_village",
            ViewEvent::DropPin(_) => "drop_pin",
            ViewEvent::Continue => "continue",
            ViewEvent::Back => "back",
            ViewEvent::SelectLayer(_) => "select_layer",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Hindi prompt asking the farmer to pick a village or drop a pin
    #[error("कृपया पहले अपना गाँव चुनें या नक्शे पर पिन लगाएं!")]
    NoLocationSelected,

    #[error("Cannot {event} from {from}")]
    InvalidTransition { from: ViewState, event: &'static str },
}

/// Explicit state for the single-page application
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub state: ViewState,
    pub search_input: String,
    pub selected_village: Option<String>,
    pub map_pin: Option<Coordinates>,
    pub selected_layer: MapLayer,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event, returning the new screen
    ///
    /// | from           | event          | to             |
    /// |----------------|----------------|----------------|
    /// | Landing        | Start          | FarmSelection  |
    /// | FarmSelection  | Search         | FarmSelection  |
    /// | FarmSelection  | SelectVillage  | FarmSelection  |
    /// | FarmSelection  | DropPin        | FarmSelection  |
    /// | FarmSelection  | Continue       | Dashboard      |
    /// | Dashboard      | SelectLayer    | Dashboard      |
    /// | Dashboard      | Back           | Landing        |
    pub fn apply(
        &mut self,
        event: ViewEvent,
        villages: &LocationTable,
    ) -> Result<ViewState, TransitionError> {
        let next = match (self.state, event) {
            (ViewState::Landing, ViewEvent::Start) => ViewState::FarmSelection,
            (ViewState::FarmSelection, ViewEvent::Search(text)) => {
                self.search_input = text;
                ViewState::FarmSelection
            }
            (ViewState::FarmSelection, ViewEvent::SelectVillage(name)) => {
                if let Some(record) = villages.get(&name) {
                    self.map_pin = Some(record.coordinates);
                }
                self.search_input = name.clone();
                self.selected_village = Some(name);
                ViewState::FarmSelection
            }
            (ViewState::FarmSelection, ViewEvent::DropPin(coordinates)) => {
                self.map_pin = Some(coordinates);
                ViewState::FarmSelection
            }
            (ViewState::FarmSelection, ViewEvent::Continue) => {
                if self.selected_village.is_none() && self.map_pin.is_none() {
                    return Err(TransitionError::NoLocationSelected);
                }
                ViewState::Dashboard
            }
            (ViewState::Dashboard, ViewEvent::SelectLayer(layer)) => {
                self.selected_layer = layer;
                ViewState::Dashboard
            }
            (ViewState::Dashboard, ViewEvent::Back) => ViewState::Landing,
            (from, event) => {
                return Err(TransitionError::InvalidTransition {
                    from,
                    event: event.name(),
                })
            }
        };

        self.state = next;
        Ok(next)
    }

    /// Whether the suggestion list should be open
    pub fn show_suggestions(&self) -> bool {
        self.state == ViewState::FarmSelection
            && !self.search_input.is_empty()
            && self.selected_village.as_deref() != Some(self.search_input.as_str())
    }

    /// Village names matching the current search input
    pub fn suggestions<'a>(&self, villages: &'a LocationTable) -> Vec<&'a str> {
        if !self.show_suggestions() {
            return Vec::new();
        }
        villages
            .search(&self.search_input)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Query for the dashboard's advisory
    pub fn location_query(&self) -> LocationQuery {
        LocationQuery {
            village_name: self.selected_village.clone(),
            coordinates: self.map_pin,
        }
    }
}
