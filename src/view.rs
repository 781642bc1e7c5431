// src/view.rs
//! Plain-text views of the stored resume list and the current draft

use std::fmt::Write;

use crate::form::Draft;
use crate::types::{ListField, StoredResume};

pub fn render_resume_list(resumes: &[StoredResume]) -> String {
    let mut out = String::from("Your Resumes\n");
    if resumes.is_empty() {
        out.push_str("  (none)\n");
    }
    for resume in resumes {
        out.push('\n');
        render_resume(&mut out, resume);
    }
    out
}

fn render_resume(out: &mut String, resume: &StoredResume) {
    let data = &resume.data;
    let _ = writeln!(out, "[{}] {}", resume.id, data.name);
    let _ = writeln!(out, "Email: {}", data.email);
    let _ = writeln!(out, "Phone: {}", data.phone);

    for field in ListField::ALL {
        let _ = writeln!(out, "  {}", field.title());
        for entry in data.list(field) {
            let _ = writeln!(out, "    - {}", entry);
        }
    }

    let _ = writeln!(out, "  Projects");
    for project in &data.projects {
        let _ = writeln!(out, "    {}", project.title);
        for line in project.description.lines() {
            let _ = writeln!(out, "      {}", line);
        }
        let _ = writeln!(out, "      Technologies Used:");
        for tech in &project.technologies {
            let _ = writeln!(out, "        - {}", tech);
        }
    }
}

/// Echo a draft with the form's field labels ("Education 1", "Technology 2", ...)
pub fn render_draft(draft: &Draft) -> String {
    let data = draft.data();
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", data.name);
    let _ = writeln!(out, "Email: {}", data.email);
    let _ = writeln!(out, "Phone: {}", data.phone);

    for field in ListField::ALL {
        for (i, entry) in data.list(field).iter().enumerate() {
            let _ = writeln!(out, "{} {}: {}", field.entry_label(), i + 1, entry);
        }
    }

    for (i, project) in data.projects.iter().enumerate() {
        let _ = writeln!(out, "Project {} Title: {}", i + 1, project.title);
        let _ = writeln!(out, "Project {} Description: {}", i + 1, project.description);
        for (t, tech) in project.technologies.iter().enumerate() {
            let _ = writeln!(out, "Project {} Technology {}: {}", i + 1, t + 1, tech);
        }
    }
    out
}
