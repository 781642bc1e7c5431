// src/render/mod.rs
//! Resume to document rendering and PDF export

pub mod document;
pub mod export;
pub mod typst;

pub use document::{render, Document, Entry, Header, ProjectEntry, ResumeLayout, Section};
pub use export::{ExportedPdf, PdfExporter};
pub use typst::to_typst;
