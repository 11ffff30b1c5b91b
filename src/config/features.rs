//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Load the demo users and wishes at startup (wishes only into an empty store)
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            json_logs: false,
        }
    }
}

fn default_true() -> bool {
    true
}
