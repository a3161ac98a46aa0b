//! Fixture discovery: every `<name>.txt` under the inputs directory is one
//! test case, keyed by its file stem.

use crate::model::Fixture;
use std::path::Path;

/// Enumerate fixtures, sorted lexicographically by name so a run produces
/// the same ordering on every platform. Subdirectories and files without a
/// `.txt` extension are ignored.
pub fn discover_fixtures(inputs_dir: &Path) -> anyhow::Result<Vec<Fixture>> {
    let mut fixtures = Vec::new();

    for entry in std::fs::read_dir(inputs_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        fixtures.push(Fixture {
            name: name.to_string(),
            input_path: path.clone(),
        });
    }

    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fixtures)
}

/// Keep only fixtures whose name contains one of the patterns. An empty
/// pattern list keeps everything.
pub fn filter_fixtures(fixtures: Vec<Fixture>, patterns: &[String]) -> Vec<Fixture> {
    if patterns.is_empty() {
        return fixtures;
    }
    fixtures
        .into_iter()
        .filter(|f| patterns.iter().any(|p| f.name.contains(p.as_str())))
        .collect()
}
