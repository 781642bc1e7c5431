// src/form.rs
//! Draft resume state. Every edit returns a new snapshot and leaves the
//! receiver untouched.

use crate::error::FormError;
use crate::types::{ListField, Project, ProjectField, ResumeData, ScalarField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    data: ResumeData,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    /// Fresh draft with one placeholder per list field
    pub fn new() -> Self {
        Self {
            data: ResumeData {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                education: vec![String::new()],
                experience: vec![String::new()],
                skills: vec![String::new()],
                projects: vec![Project::placeholder()],
            },
        }
    }

    /// Wrap existing content, e.g. a draft loaded from a JSON file
    pub fn from_data(data: ResumeData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn into_data(self) -> ResumeData {
        self.data
    }

    pub fn set_scalar(&self, field: ScalarField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.data.scalar_mut(field) = value.into();
        next
    }

    pub fn add_list_entry(&self, field: ListField) -> Self {
        let mut next = self.clone();
        next.data.list_mut(field).push(String::new());
        next
    }

    pub fn set_list_entry(
        &self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<Self, FormError> {
        let mut next = self.clone();
        let list = next.data.list_mut(field);
        let len = list.len();
        let slot = list.get_mut(index).ok_or(FormError::IndexOutOfBounds {
            list: field.title(),
            index,
            len,
        })?;
        *slot = value.into();
        Ok(next)
    }

    pub fn add_project(&self) -> Self {
        let mut next = self.clone();
        next.data.projects.push(Project::placeholder());
        next
    }

    pub fn set_project_field(
        &self,
        index: usize,
        field: ProjectField,
        value: impl Into<String>,
    ) -> Result<Self, FormError> {
        let mut next = self.clone();
        let project = project_mut(&mut next.data, index)?;
        match field {
            ProjectField::Title => project.title = value.into(),
            ProjectField::Description => project.description = value.into(),
        }
        Ok(next)
    }

    pub fn add_technology(&self, project_index: usize) -> Result<Self, FormError> {
        let mut next = self.clone();
        project_mut(&mut next.data, project_index)?
            .technologies
            .push(String::new());
        Ok(next)
    }

    pub fn set_technology(
        &self,
        project_index: usize,
        tech_index: usize,
        value: impl Into<String>,
    ) -> Result<Self, FormError> {
        let mut next = self.clone();
        let technologies = &mut project_mut(&mut next.data, project_index)?.technologies;
        let len = technologies.len();
        let slot = technologies
            .get_mut(tech_index)
            .ok_or(FormError::IndexOutOfBounds {
                list: "technologies",
                index: tech_index,
                len,
            })?;
        *slot = value.into();
        Ok(next)
    }

    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Fill a list from values, reusing existing slots before appending.
    pub fn with_list(&self, field: ListField, values: &[String]) -> Result<Self, FormError> {
        let mut next = self.clone();
        for (index, value) in values.iter().enumerate() {
            if index >= next.data.list(field).len() {
                next = next.add_list_entry(field);
            }
            next = next.set_list_entry(field, index, value.as_str())?;
        }
        Ok(next)
    }
}

fn project_mut(data: &mut ResumeData, index: usize) -> Result<&mut Project, FormError> {
    let len = data.projects.len();
    data.projects
        .get_mut(index)
        .ok_or(FormError::IndexOutOfBounds {
            list: "projects",
            index,
            len,
        })
}
