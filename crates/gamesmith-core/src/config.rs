use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Contact and branding fields echoed into every artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub contact_email: String,
    pub public_handle: String,
    pub brand: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            contact_email: "sales@gamesmith.dev".to_string(),
            public_handle: "gamesmith-dev".to_string(),
            brand: "gamesmith.dev".to_string(),
        }
    }
}

/// Schedule metadata carried through reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub target_end_date: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            target_end_date: "2027-12-31".to_string(),
        }
    }
}

/// Production knobs for a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Production {
    pub units_per_run: u32,
}

impl Default for Production {
    fn default() -> Self {
        Self { units_per_run: 3 }
    }
}

/// Static factory configuration.
///
/// There is no global config: this value is constructed once at startup and
/// passed explicitly into each component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryConfig {
    #[serde(default)]
    pub identity: Identity,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub production: Production,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            schedule: Schedule::default(),
            production: Production::default(),
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl FactoryConfig {
    /// Load TOML configuration from `path`, falling back to defaults when
    /// the file does not exist. A present-but-invalid file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: FactoryConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
