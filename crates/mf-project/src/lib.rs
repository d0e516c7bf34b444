//! mf-project: network input formats.
//!
//! Networks come either as the plain-text node/edge lists (see [`text`])
//! or as a versioned YAML/JSON network file ([`NetworkDef`]).

use std::path::Path;

pub mod schema;
pub mod text;

pub use schema::*;
pub use text::{ParseError, ParseResult, parse_network, parse_text_file};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Unsupported version: {version} (latest is {})", LATEST_VERSION)]
    UnsupportedVersion { version: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn check_version(def: &NetworkDef) -> ProjectResult<()> {
    if def.version == 0 || def.version > LATEST_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: def.version,
        });
    }
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    check_version(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &NetworkDef) -> ProjectResult<()> {
    check_version(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    check_version(&def)?;
    Ok(def)
}

pub fn save_json(path: &Path, def: &NetworkDef) -> ProjectResult<()> {
    check_version(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a text-format file; the network is named after the file stem.
pub fn load_text(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let mut def = parse_text_file(&content)?;
    if let Some(stem) = path.file_stem() {
        def.name = stem.to_string_lossy().into_owned();
    }
    Ok(def)
}
