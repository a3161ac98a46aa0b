use crate::model::RunReport;
use std::path::Path;

pub fn to_json(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn save_to_file(report: &RunReport, path: &Path) -> anyhow::Result<()> {
    let json = to_json(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
