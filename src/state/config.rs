use crate::state::session::Theme;
use serde::{Deserialize, Serialize};

/// App configuration loaded from config.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// The multipliers the presentation layer offers. The scaler itself
    /// accepts any positive factor; this set only drives the UI.
    #[serde(default = "default_scale_factors")]
    pub scale_factors: Vec<f64>,

    #[serde(default)]
    pub default_theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scale_factors: default_scale_factors(),
            default_theme: Theme::default(),
        }
    }
}

fn default_scale_factors() -> Vec<f64> {
    vec![0.5, 1.0, 2.0, 3.0, 4.0]
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_selectable(&self, factor: f64) -> bool {
        self.scale_factors.iter().any(|f| *f == factor)
    }
}
