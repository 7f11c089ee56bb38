use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use gamesmith_core::{FactoryConfig, Unit};

use crate::errors::PublishResult;
use crate::templates::{render_readme, render_stub};

/// Writes the three per-unit artifacts under `games/<id>/`.
///
/// Persisting is idempotent: a second call for the same unit overwrites
/// the directory with byte-identical content. I/O failures propagate.
pub struct Persister {
    config: FactoryConfig,
    games_dir: PathBuf,
}

impl Persister {
    pub fn new(config: FactoryConfig, out_dir: &Path) -> Self {
        Self {
            config,
            games_dir: out_dir.join("games"),
        }
    }

    pub fn persist(&self, unit: &Unit) -> PublishResult<PathBuf> {
        let unit_dir = self.games_dir.join(&unit.id);
        fs::create_dir_all(&unit_dir)?;

        let info = serde_json::to_vec_pretty(unit)?;
        fs::write(unit_dir.join("game_info.json"), info)?;
        fs::write(unit_dir.join("README.md"), render_readme(unit, &self.config))?;
        fs::write(unit_dir.join("game.py"), render_stub(unit, &self.config))?;

        info!(
            id = %unit.id,
            name = %unit.name,
            price = unit.price,
            path = %unit_dir.display(),
            "game saved"
        );
        Ok(unit_dir)
    }
}
