//! YAML job files.
//!
//! A job file carries the same values as the command line flags, so a
//! hatch setup can be saved and re-run:
//!
//! ```yaml
//! points: [[0, 0], [10, 0], [10, 10], [0, 10]]
//! angle: 30
//! step: 1.5
//! svg: out.svg   # optional
//! ```
//!
//! Every field is optional here; the argument parser decides what is still
//! missing once flags and file are merged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("Failed to read job file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid job file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Hatch parameters loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HatchJob {
    /// Four `[x, y]` corners in cyclic order
    #[serde(default)]
    pub points: Option<[[f64; 2]; 4]>,

    /// Hatch angle in degrees
    #[serde(default)]
    pub angle: Option<f64>,

    /// Distance between hatch lines
    #[serde(default)]
    pub step: Option<f64>,

    /// SVG output path
    #[serde(default)]
    pub svg: Option<PathBuf>,
}

impl HatchJob {
    pub fn load(path: &Path) -> Result<Self, JobError> {
        let text = fs::read_to_string(path).map_err(|source| JobError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| JobError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
