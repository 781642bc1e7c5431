// src/render/export.rs
//! Compile rendered documents to PDF with the Typst CLI

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::process::Command;

use super::document::{render, Document};
use super::typst::to_typst;
use crate::app_log;
use crate::core::AppConfig;
use crate::types::ResumeData;
use crate::utils::export_filename;

const SOURCE_FILE: &str = "main.typ";
const OUTPUT_FILE: &str = "resume.pdf";

#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub path: PathBuf,
    pub filename: String,
    pub size: usize,
    /// The placeholder error document was written instead of the resume
    pub fallback: bool,
}

pub struct PdfExporter {
    typst_bin: String,
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(typst_bin: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            typst_bin: typst_bin.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.typst_bin.clone(), config.output_dir.clone())
    }

    /// Render `resume` and write `<name>-resume.pdf` to the output directory.
    ///
    /// A resume that fails to render or compile is replaced by the error
    /// document; `Err` only when not even that can be produced.
    pub async fn export(&self, resume: &ResumeData) -> Result<ExportedPdf> {
        let filename = export_filename(&resume.name);
        let document = render(resume);
        let mut fallback = document.is_error();

        let pdf = match self.compile(&document).await {
            Ok(pdf) => pdf,
            Err(e) if !fallback => {
                app_log!(error, "Error generating PDF for {}: {:#}", filename, e);
                fallback = true;
                self.compile(&Document::error())
                    .await
                    .context("Failed to compile error document")?
            }
            Err(e) => return Err(e),
        };

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create output directory: {}",
                    self.output_dir.display()
                )
            })?;

        let path = self.output_dir.join(&filename);
        tokio::fs::write(&path, &pdf)
            .await
            .with_context(|| format!("Failed to write PDF: {}", path.display()))?;

        app_log!(info, "Exported {} ({} bytes)", path.display(), pdf.len());

        Ok(ExportedPdf {
            path,
            filename,
            size: pdf.len(),
            fallback,
        })
    }

    async fn compile(&self, document: &Document) -> Result<Vec<u8>> {
        let workspace = tempfile::Builder::new()
            .prefix("resume-export")
            .tempdir()
            .context("Failed to create export workspace")?;

        tokio::fs::write(workspace.path().join(SOURCE_FILE), to_typst(document))
            .await
            .context("Failed to write Typst source")?;

        let output = Command::new(&self.typst_bin)
            .arg("compile")
            .arg(SOURCE_FILE)
            .arg(OUTPUT_FILE)
            .current_dir(workspace.path())
            .output()
            .await
            .with_context(|| format!("Failed to execute {}", self.typst_bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            anyhow::bail!(
                "Typst compilation failed: stderr={}, stdout={}",
                stderr,
                stdout
            );
        }

        tokio::fs::read(workspace.path().join(OUTPUT_FILE))
            .await
            .context("Failed to read generated PDF")
    }
}
