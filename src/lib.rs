// src/lib.rs
//! Resume builder client: draft editing, backend submission, list view and
//! PDF export.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod form;
pub mod render;
pub mod types;
pub mod utils;
pub mod view;

pub use app::{LoadState, ResumeApp};
pub use error::{FormError, NetworkError, RenderError, SubmitError};
pub use form::Draft;
pub use render::{render, Document, PdfExporter};
pub use types::{ListField, Project, ProjectField, ResumeData, ResumeId, ScalarField, StoredResume};

/// Log through `tracing` at the given level: `app_log!(info, "...", args)`.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
