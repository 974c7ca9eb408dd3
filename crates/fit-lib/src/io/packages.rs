use crate::{dispatch::build_workout, error::WorkoutError, workout::AnyWorkout};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw record from the tracker: a workout code and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    pub fn build(&self) -> Result<AnyWorkout, WorkoutError> {
        build_workout(&self.code, &self.data)
    }
}

#[derive(Debug, Deserialize)]
struct PackageFile {
    #[serde(default)]
    package: Vec<Package>,
}

/// Parse a TOML document of `[[package]]` tables.
pub fn parse_packages(text: &str) -> Result<Vec<Package>> {
    let file: PackageFile = toml::from_str(text).context("parsing workout packages")?;
    if file.package.is_empty() {
        anyhow::bail!("no packages found");
    }
    Ok(file.package)
}

/// Read workout packages from disk.
pub fn read_packages(path: &Path) -> Result<Vec<Package>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_packages(&text).with_context(|| format!("in {}", path.display()))
}
