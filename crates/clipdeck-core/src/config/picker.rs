//! Material picker configuration.

use serde::{Deserialize, Serialize};

use crate::types::MaterialType;

/// Settings for the folder picker shown when attaching material to a segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Length of the "recently added" shortcut list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Folder categories the picker offers by default.
    #[serde(default = "default_wanted_types")]
    pub wanted_types: Vec<MaterialType>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            wanted_types: default_wanted_types(),
        }
    }
}

fn default_recent_limit() -> usize {
    5
}

fn default_wanted_types() -> Vec<MaterialType> {
    vec![MaterialType::Video, MaterialType::Image]
}
