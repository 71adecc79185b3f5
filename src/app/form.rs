// src/app/form.rs
use std::collections::BTreeMap;

use tracing::debug;

use super::data::{FormField, MovieDraft};

pub const TITLE_REQUIRED: &str = "Title is required";

/// Raises a flag for the lifetime of the guard; lowered on every exit path.
struct Busy<'a> {
    flag: &'a mut bool,
}

impl<'a> Busy<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

#[derive(Debug, Default)]
pub struct MovieFormController {
    draft: MovieDraft,
    submitting: bool,
    field_errors: BTreeMap<FormField, String>,
}

impl MovieFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field_errors(&self) -> &BTreeMap<FormField, String> {
        &self.field_errors
    }

    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    /// Edits clear the field's error; nothing is re-validated until the next submit.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set(field, value.into());
        self.field_errors.remove(&field);
    }

    pub fn validate(&mut self) -> bool {
        if self.draft.has_title() {
            self.field_errors.remove(&FormField::Title);
        } else {
            self.field_errors
                .insert(FormField::Title, TITLE_REQUIRED.to_string());
        }
        self.field_errors.is_empty()
    }

    /// Validates, then hands the draft to `create`. The draft is reset only
    /// when `create` reports success; `submitting` is cleared regardless.
    pub fn submit<F>(&mut self, create: F)
    where
        F: FnOnce(&MovieDraft) -> bool,
    {
        if !self.validate() {
            debug!("submit rejected: {:?}", self.field_errors);
            return;
        }
        let Self {
            draft, submitting, ..
        } = self;
        let _busy = Busy::raise(submitting);
        if create(&*draft) {
            *draft = MovieDraft::default();
        }
    }

    /// Non-blocking half of [`submit`](Self::submit): validates and marks the
    /// form busy, returning the draft to send. Pair with `finish_submit`.
    pub fn begin_submit(&mut self) -> Option<MovieDraft> {
        if self.submitting {
            debug!("submit ignored: a submission is already in flight");
            return None;
        }
        if !self.validate() {
            debug!("submit rejected: {:?}", self.field_errors);
            return None;
        }
        self.submitting = true;
        Some(self.draft.clone())
    }

    pub fn finish_submit(&mut self, created: bool) {
        if created {
            self.draft = MovieDraft::default();
        }
        self.submitting = false;
    }

    pub const fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Adding..."
        } else {
            "Add Movie"
        }
    }
}
