use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::registry::Artifact;

/// Main error type for bsp-loader operations
#[derive(Error, Diagnostic, Debug)]
pub enum BspError {
    #[error("Missing required {artifact}: {path}")]
    #[diagnostic(
        code(bsp::missing),
        help("Check that --root points at the Battlestations Pacific install directory")
    )]
    MissingFile { artifact: Artifact, path: PathBuf },

    #[error("Scene file for mission '{mission}' not found: {path}")]
    #[diagnostic(code(bsp::scene))]
    MissionScene { mission: String, path: PathBuf },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bsp::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bsp::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid config {path}: {message}")]
    #[diagnostic(code(bsp::config), help("Check bsp.yaml syntax"))]
    Config { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(bsp::write))]
    Write { path: PathBuf, message: String },

    #[error("{path} already exists")]
    #[diagnostic(code(bsp::exists), help("Use --force to overwrite"))]
    Exists { path: PathBuf },

    #[error("Validation failed with {errors} error(s)")]
    #[diagnostic(code(bsp::validate))]
    Validation { errors: usize },

    #[error("Generation error: {message}")]
    #[diagnostic(code(bsp::generate))]
    Generate {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BspError>;
