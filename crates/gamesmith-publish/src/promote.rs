use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use gamesmith_core::{FactoryConfig, Unit};

use crate::errors::PublishResult;
use crate::templates::{render_promo_long, render_promo_medium, render_promo_short};

/// The three promotional variants for one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoKit {
    pub short: String,
    pub medium: String,
    pub long: String,
}

/// Renders promotional copy and writes it under `promotion/<id>/`.
///
/// Rendering has no conditional logic beyond variant selection; output is
/// deterministic given a unit and the configuration.
pub struct Promoter {
    config: FactoryConfig,
    promo_dir: PathBuf,
}

impl Promoter {
    pub fn new(config: FactoryConfig, out_dir: &Path) -> Self {
        Self {
            config,
            promo_dir: out_dir.join("promotion"),
        }
    }

    pub fn promote(&self, unit: &Unit) -> PublishResult<PromoKit> {
        let kit = PromoKit {
            short: render_promo_short(unit, &self.config),
            medium: render_promo_medium(unit, &self.config),
            long: render_promo_long(unit, &self.config),
        };

        let unit_dir = self.promo_dir.join(&unit.id);
        fs::create_dir_all(&unit_dir)?;
        fs::write(unit_dir.join("promotion.json"), serde_json::to_vec_pretty(&kit)?)?;
        for (file, content) in [
            ("short_promo.txt", &kit.short),
            ("medium_promo.txt", &kit.medium),
            ("long_promo.txt", &kit.long),
        ] {
            fs::write(unit_dir.join(file), content)?;
        }

        info!(id = %unit.id, name = %unit.name, "promotion created");
        Ok(kit)
    }
}
