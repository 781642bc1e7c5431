// src/app.rs
//! Application state: the draft being edited and the list of stored resumes

use crate::app_log;
use crate::core::ResumeBackend;
use crate::error::{
    FormError, SubmitError, CREATE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, VALIDATION_MESSAGE,
};
use crate::form::Draft;
use crate::types::{ResumeId, ScalarField, StoredResume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

pub struct ResumeApp<B> {
    backend: B,
    draft: Draft,
    resumes: Vec<StoredResume>,
    load_state: LoadState,
    error: Option<String>,
}

impl<B: ResumeBackend> ResumeApp<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            draft: Draft::new(),
            resumes: Vec::new(),
            load_state: LoadState::Pending,
            error: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn resumes(&self) -> &[StoredResume] {
        &self.resumes
    }

    pub fn find(&self, id: ResumeId) -> Option<&StoredResume> {
        self.resumes.iter().find(|r| r.id == id)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply one draft edit. A failed edit leaves the draft as it was.
    pub fn edit<F>(&mut self, f: F) -> Result<(), FormError>
    where
        F: FnOnce(&Draft) -> Result<Draft, FormError>,
    {
        self.draft = f(&self.draft)?;
        Ok(())
    }

    pub fn replace_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Initial one-shot fetch of the stored resumes
    pub async fn load(&mut self) -> LoadState {
        if self.load_state != LoadState::Pending {
            return self.load_state;
        }

        match self.backend.list_resumes().await {
            Ok(resumes) => {
                app_log!(info, "Loaded {} resumes", resumes.len());
                self.resumes = resumes;
                self.error = None;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                app_log!(error, "Error fetching resumes: {}", e);
                self.resumes.clear();
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.load_state = LoadState::Failed;
            }
        }

        self.load_state
    }

    /// Validate and submit the current draft.
    pub async fn submit(&mut self) -> Result<&StoredResume, SubmitError> {
        let missing = self.draft.data().missing_required();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(ScalarField::label).collect();
            app_log!(warn, "Submission rejected, missing: {}", labels.join(", "));
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return Err(SubmitError::Validation { missing });
        }

        let created = match self.backend.create_resume(self.draft.data()).await {
            Ok(created) => created,
            Err(e) => {
                app_log!(error, "Error creating resume: {}", e);
                self.error = Some(CREATE_FAILED_MESSAGE.to_string());
                return Err(e.into());
            }
        };

        // The list is replaced, not appended to: only the latest create is shown.
        app_log!(
            debug,
            "Replacing {} listed resumes with created resume {}",
            self.resumes.len(),
            created.id
        );
        self.resumes = vec![created];
        self.draft = self.draft.reset();
        self.error = None;

        Ok(&self.resumes[0])
    }
}
