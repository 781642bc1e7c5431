// src/error.rs
use thiserror::Error;

use crate::types::ScalarField;

pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields (Name, Email, Phone)";
pub const FETCH_FAILED_MESSAGE: &str =
    "Could not connect to the backend. Please make sure it is running.";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create resume. Please try again.";
pub const RENDER_FAILED_MESSAGE: &str = "Error generating PDF. Please try again.";

/// Draft edits that address a position outside the current list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{list} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        list: &'static str,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("backend returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NetworkError {
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            NetworkError::Status(status) => Some(*status),
            NetworkError::Transport(e) => e.status(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please fill in all required fields (Name, Email, Phone)")]
    Validation { missing: Vec<ScalarField> },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl SubmitError {
    /// Message shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Validation { .. } => VALIDATION_MESSAGE,
            SubmitError::Network(_) => CREATE_FAILED_MESSAGE,
        }
    }
}

/// Failure while laying out a document. Never leaves the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("layout panicked: {0}")]
    Panicked(String),
}
