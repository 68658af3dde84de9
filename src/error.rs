use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Could not create directory `{}`", .path.display())]
    #[diagnostic(code(report_assets::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not write `{}`", .path.display())]
    #[diagnostic(code(report_assets::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not render `{}`: {message}", .path.display())]
    #[diagnostic(
        code(report_assets::render),
        help("rendering passed the startup probe, so this is likely a disk or font issue")
    )]
    Render { path: PathBuf, message: String },
    #[error("Could not resolve the working directory")]
    #[diagnostic(code(report_assets::root))]
    Root(#[source] io::Error),
    #[error("Could not write to the output stream")]
    #[diagnostic(code(report_assets::output))]
    Output(#[from] io::Error),
}

/// Creates `path` and its parents. Repeating it is harmless.
pub(crate) fn create_dir_all(path: impl Into<PathBuf>) -> Result<()> {
    let path = path.into();
    std::fs::create_dir_all(&path).map_err(|source| Error::CreateDir { path, source })
}
