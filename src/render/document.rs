// src/render/document.rs
//! Fixed-layout document model and the pure `render` mapping

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::app_log;
use crate::error::{RenderError, RENDER_FAILED_MESSAGE};
use crate::types::{ListField, Project, ResumeData};

pub const PAPER: &str = "a4";
pub const PROJECTS_TITLE: &str = "Projects";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Resume(ResumeLayout),
    /// Placeholder produced when layout fails
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLayout {
    pub paper: &'static str,
    pub header: Header,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub contact: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Line(String),
    Project(ProjectEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl Document {
    pub fn error() -> Self {
        Document::Error {
            message: RENDER_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Document::Error { .. })
    }
}

/// Map a resume onto the fixed layout. Never panics: any layout failure
/// yields `Document::Error`.
pub fn render(resume: &ResumeData) -> Document {
    render_with(resume, layout)
}

pub(crate) fn render_with<F>(resume: &ResumeData, layout_fn: F) -> Document
where
    F: FnOnce(&ResumeData) -> ResumeLayout,
{
    match guarded(resume, layout_fn) {
        Ok(layout) => Document::Resume(layout),
        Err(e) => {
            app_log!(error, "Error generating PDF: {}", e);
            Document::error()
        }
    }
}

fn guarded<F>(resume: &ResumeData, layout_fn: F) -> Result<ResumeLayout, RenderError>
where
    F: FnOnce(&ResumeData) -> ResumeLayout,
{
    panic::catch_unwind(AssertUnwindSafe(|| layout_fn(resume)))
        .map_err(|payload| RenderError::Panicked(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn layout(resume: &ResumeData) -> ResumeLayout {
    let mut sections: Vec<Section> = ListField::ALL
        .iter()
        .map(|field| Section {
            title: field.title(),
            entries: resume
                .list(*field)
                .iter()
                .map(|line| Entry::Line(line.clone()))
                .collect(),
        })
        .collect();

    sections.push(Section {
        title: PROJECTS_TITLE,
        entries: resume.projects.iter().map(project_entry).collect(),
    });

    ResumeLayout {
        paper: PAPER,
        header: Header {
            name: resume.name.clone(),
            contact: vec![
                format!("Email: {}", resume.email),
                format!("Phone: {}", resume.phone),
            ],
        },
        sections,
    }
}

fn project_entry(project: &Project) -> Entry {
    Entry::Project(ProjectEntry {
        title: project.title.clone(),
        description: project.description.lines().map(str::to_string).collect(),
        technologies: project.technologies.clone(),
    })
}
