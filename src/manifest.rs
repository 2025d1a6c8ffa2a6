use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents the contents of a `package.json` manifest.
///
/// Only the fields the hook touches are modeled; everything else is carried
/// through `extra` so a rewrite leaves it untouched. The `bin` map keeps its
/// keys in file order, so "first binary" means first entry in the file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Manifest {
    /// The package name.
    pub name: String,
    /// Version-control metadata for the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
    /// Declared executables: binary name to relative source path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Map<String, Value>>,
    /// All remaining manifest fields, round-tripped verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The manifest's `repository` object.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    /// The kind of version control, e.g. `"git"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The remote URL.
    pub url: String,
}

impl Manifest {
    pub const FILE_NAME: &'static str = "package.json";

    /// Loads the manifest from `<project_dir>/package.json`.
    ///
    /// # Errors
    /// Returns an error if the file is missing or is not valid JSON.
    pub fn load<P: AsRef<Path>>(project_dir: P) -> Result<Manifest> {
        let path = project_dir.as_ref().join(Self::FILE_NAME);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("{} not found", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Could not parse {}", path.display()))
    }

    /// Saves the manifest to `<project_dir>/package.json` as pretty-printed
    /// JSON with 2-space indentation, overwriting any existing file.
    ///
    /// # Errors
    /// Returns an error if the file can't be written.
    pub fn save<P: AsRef<Path>>(&self, project_dir: P) -> Result<()> {
        let path = project_dir.as_ref().join(Self::FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json + "\n")
            .with_context(|| format!("Could not write {}", path.display()))?;
        Ok(())
    }

    /// Returns the first declared executable as (name, relative path).
    ///
    /// `None` if there is no `bin` field, the map is empty, or the first
    /// entry's path is not a string.
    pub fn first_bin(&self) -> Option<(&str, &str)> {
        let bin = self.bin.as_ref()?;
        let (name, path) = bin.iter().next()?;
        Some((name.as_str(), path.as_str()?))
    }
}
