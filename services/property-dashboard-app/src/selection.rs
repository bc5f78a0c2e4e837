//! Selector state and the view it renders to

use crate::api::Property;
use crate::loader::{ListSource, LoadOutcome};

/// Lifecycle phase of the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    LoadedWithData,
    LoadedEmpty,
}

/// State behind the property selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorState {
    #[default]
    Loading,
    Loaded {
        properties: Vec<Property>,
        selected: Option<String>,
        source: ListSource,
    },
}

/// One entry of the select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Unique per row, since property ids may repeat
    pub key: String,
    pub value: String,
    pub label: String,
}

/// What the selector should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorView {
    Loading,
    Empty,
    Ready {
        options: Vec<SelectOption>,
        selected: String,
    },
}

impl SelectorState {
    pub fn phase(&self) -> LoadPhase {
        match self {
            SelectorState::Loading => LoadPhase::Loading,
            SelectorState::Loaded { properties, .. } if properties.is_empty() => {
                LoadPhase::LoadedEmpty
            }
            SelectorState::Loaded { .. } => LoadPhase::LoadedWithData,
        }
    }

    /// Entries of the select control, empty until a list is loaded
    pub fn options(&self) -> Vec<SelectOption> {
        match self {
            SelectorState::Loading => Vec::new(),
            SelectorState::Loaded { properties, .. } => properties
                .iter()
                .enumerate()
                .map(|(idx, p)| SelectOption {
                    key: format!("{}-{}", p.id, idx),
                    value: p.id.clone(),
                    label: p.name.clone(),
                })
                .collect(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            SelectorState::Loading => None,
            SelectorState::Loaded { selected, .. } => selected.as_deref(),
        }
    }

    /// Adopt a finished load, selecting its first property
    pub fn apply(&mut self, outcome: LoadOutcome) {
        let selected = outcome.default_selection().map(str::to_string);
        *self = SelectorState::Loaded {
            properties: outcome.properties,
            selected,
            source: outcome.source,
        };
    }

    /// Select the property with `id`
    ///
    /// Returns false and leaves the selection alone if `id` is not in the
    /// active list.
    pub fn select(&mut self, id: &str) -> bool {
        match self {
            SelectorState::Loaded {
                properties,
                selected,
                ..
            } if properties.iter().any(|p| p.id == id) => {
                *selected = Some(id.to_string());
                true
            }
            _ => {
                tracing::debug!("Ignoring selection of unknown property {}", id);
                false
            }
        }
    }

    pub fn view(&self) -> SelectorView {
        match self {
            SelectorState::Loading => SelectorView::Loading,
            SelectorState::Loaded { properties, .. } if properties.is_empty() => {
                SelectorView::Empty
            }
            SelectorState::Loaded {
                properties,
                selected,
                ..
            } => {
                let options = self.options();
                let selected = selected
                    .clone()
                    .unwrap_or_else(|| properties[0].id.clone());
                SelectorView::Ready { options, selected }
            }
        }
    }
}
