use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use gamesmith_core::{Dimension, FactoryConfig, Unit};

use crate::errors::ReportResult;
use crate::model::DailyReport;

/// Fold a non-empty batch into its aggregate report.
///
/// Callers skip reporting entirely for an empty batch; that policy lives in
/// the orchestrator, not here.
pub fn build_report(
    units: &[Unit],
    config: &FactoryConfig,
    run_id: &str,
    now: DateTime<Utc>,
) -> DailyReport {
    let units_2d = units
        .iter()
        .filter(|unit| unit.dimension == Dimension::TwoD)
        .count() as u64;
    DailyReport {
        run_id: run_id.to_string(),
        generated_at: now,
        public_handle: config.identity.public_handle.clone(),
        contact_email: config.identity.contact_email.clone(),
        brand: config.identity.brand.clone(),
        version: config.version.clone(),
        units_created: units.len() as u64,
        total_value: units.iter().map(|unit| unit.price).sum(),
        units_2d,
        units_3d: units.len() as u64 - units_2d,
        units: units.to_vec(),
        target_end_date: config.schedule.target_end_date.clone(),
    }
}

/// Render the human-readable companion summary.
pub fn render_summary(report: &DailyReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{} GAME FACTORY - DAILY REPORT", report.brand.to_uppercase()));
    lines.push(format!(
        "Date: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Handle: {}", report.public_handle));
    lines.push(format!("Email: {}", report.contact_email));
    lines.push(format!("Version: {}", report.version));
    lines.push(String::new());

    lines.push("PRODUCTION SUMMARY:".to_string());
    lines.push(format!("- Games created: {}", report.units_created));
    lines.push(format!("- Total value: ${}", report.total_value));
    lines.push(format!("- 2D games: {}", report.units_2d));
    lines.push(format!("- 3D games: {}", report.units_3d));
    lines.push(String::new());

    lines.push("GAMES CREATED:".to_string());
    for unit in &report.units {
        lines.push(format!(
            "- {} - ${} ({} {})",
            unit.name, unit.price, unit.dimension, unit.kind
        ));
    }
    lines.push(String::new());

    lines.push(format!("Contact for sales: {}", report.contact_email));
    lines.push(format!("Target end date: {}", report.target_end_date));
    lines.push(String::new());

    lines.join("\n")
}

/// Paths of the written report artifacts.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub report_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Writes the date-stamped report pair under `reports/`.
pub struct Reporter {
    config: FactoryConfig,
    reports_dir: PathBuf,
}

impl Reporter {
    pub fn new(config: FactoryConfig, out_dir: &Path) -> Self {
        Self {
            config,
            reports_dir: out_dir.join("reports"),
        }
    }

    /// Build and write `daily_report_<YYYYMMDD>.json` and
    /// `summary_<YYYYMMDD>.txt`. Reruns on the same day overwrite both
    /// files; last write wins.
    pub fn write_daily(
        &self,
        units: &[Unit],
        run_id: &str,
        now: DateTime<Utc>,
    ) -> ReportResult<ReportPaths> {
        let report = build_report(units, &self.config, run_id, now);
        let stamp = now.format("%Y%m%d").to_string();
        let paths = ReportPaths {
            report_path: self.reports_dir.join(format!("daily_report_{stamp}.json")),
            summary_path: self.reports_dir.join(format!("summary_{stamp}.txt")),
        };

        fs::create_dir_all(&self.reports_dir)?;
        write_atomic(&paths.report_path, &serde_json::to_vec_pretty(&report)?)?;
        write_atomic(&paths.summary_path, render_summary(&report).as_bytes())?;

        info!(
            run_id = %report.run_id,
            units = report.units_created,
            total_value = report.total_value,
            path = %paths.report_path.display(),
            "daily report written"
        );
        Ok(paths)
    }
}

// Write-to-temp-then-rename so a same-day overwrite never leaves a torn file.
fn write_atomic(path: &Path, data: &[u8]) -> ReportResult<()> {
    let tmp_path = path.with_extension("tmp");
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
