use std::path::{Path, PathBuf};

use crate::{error::Error, figure::Figure, Result};

pub const PERIOD_VAR: &str = "REPORT_MONTH";
pub const DEFAULT_PERIOD: &str = "Dec2025";
pub const TABLE_FILE: &str = "data_timestamp.tex";

/// Everything a build needs to know, fixed for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub period: String,
    pub root: PathBuf,
}

impl Config {
    pub fn new(period: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            period: period.into(),
            root: root.into(),
        }
    }

    /// Reads the period from `REPORT_MONTH` and roots the build in the
    /// current working directory.
    ///
    /// An empty `REPORT_MONTH` is kept as is; a non unicode one is ignored.
    pub fn from_env() -> Result<Self> {
        let period =
            std::env::var(PERIOD_VAR).unwrap_or_else(|_| String::from(DEFAULT_PERIOD));
        let root = std::env::current_dir().map_err(Error::Root)?;
        Ok(Self::new(period, root))
    }

    /// Reserved for real input, nothing reads from it yet.
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.root.join("figures")
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.root.join("tables")
    }

    pub fn figure_path(&self, figure: Figure) -> PathBuf {
        self.figures_dir().join(figure.file_name(&self.period))
    }

    pub fn table_path(&self) -> PathBuf {
        self.tables_dir().join(TABLE_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
