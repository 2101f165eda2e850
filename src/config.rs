//! Read-more configuration.
//!
//! Pages that use the default markup need no configuration. Pages with other
//! ids or labels pass a JSON object; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ToggleError;

/// Element ids, class name and labels for one read-more control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadMoreConfig {
    /// Id of the container whose class carries the expanded state.
    pub container_id: String,
    /// Id of the button whose text mirrors the state.
    pub button_id: String,
    /// Class marking the container as expanded.
    pub expanded_class: String,
    /// Button text while expanded.
    pub expanded_label: String,
    /// Button text while collapsed.
    pub collapsed_label: String,
}

impl Default for ReadMoreConfig {
    fn default() -> Self {
        Self {
            container_id: consts::CONTAINER_ID.to_owned(),
            button_id: consts::BUTTON_ID.to_owned(),
            expanded_class: consts::EXPANDED_CLASS.to_owned(),
            expanded_label: consts::EXPANDED_LABEL.to_owned(),
            collapsed_label: consts::COLLAPSED_LABEL.to_owned(),
        }
    }
}

impl ReadMoreConfig {
    /// Parse a config from JSON, filling absent keys from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Config`] if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        Ok(serde_json::from_str(json)?)
    }
}
