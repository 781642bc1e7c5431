// src/types/resume.rs
//! Resume data structures shared by the form, the backend client and the renderer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned identifier of a stored resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(pub u64);

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resume content without an identifier: the draft payload sent on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Project {
    /// Empty project with a single technology placeholder
    pub fn placeholder() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            technologies: vec![String::new()],
        }
    }
}

/// Resume as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: ResumeId,
    #[serde(flatten)]
    pub data: ResumeData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Name,
    Email,
    Phone,
}

impl ScalarField {
    pub const REQUIRED: [ScalarField; 3] = [ScalarField::Name, ScalarField::Email, ScalarField::Phone];

    pub fn label(&self) -> &'static str {
        match self {
            ScalarField::Name => "Name",
            ScalarField::Email => "Email",
            ScalarField::Phone => "Phone",
        }
    }
}

/// Flat string lists of a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Education,
    Experience,
    Skills,
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::Education, ListField::Experience, ListField::Skills];

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            ListField::Education => "Education",
            ListField::Experience => "Experience",
            ListField::Skills => "Skills",
        }
    }

    /// Per-entry form label, e.g. "Skill 2"
    pub fn entry_label(&self) -> &'static str {
        match self {
            ListField::Education => "Education",
            ListField::Experience => "Experience",
            ListField::Skills => "Skill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
}

impl ResumeData {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Email => &self.email,
            ScalarField::Phone => &self.phone,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Email => &mut self.email,
            ScalarField::Phone => &mut self.phone,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Education => &self.education,
            ListField::Experience => &self.experience,
            ListField::Skills => &self.skills,
        }
    }

    pub(crate) fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Education => &mut self.education,
            ListField::Experience => &mut self.experience,
            ListField::Skills => &mut self.skills,
        }
    }

    /// Required scalar fields that are still empty
    pub fn missing_required(&self) -> Vec<ScalarField> {
        ScalarField::REQUIRED
            .into_iter()
            .filter(|field| self.scalar(*field).is_empty())
            .collect()
    }
}
