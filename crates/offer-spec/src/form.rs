use chrono::NaiveDate;

use crate::data::{Field, FieldError, OfferDraft, OfferLetterData};
use crate::notify::{Notification, NotificationSink};
use crate::validate::validate;

/// The form controller.
///
/// Owns the mutable draft, the field errors from the last submission, and
/// the currently published snapshot. All access happens on the caller's
/// thread; validity is recomputed only on [`OfferForm::submit`], never while
/// fields change.
#[derive(Debug, Default)]
pub struct OfferForm {
    draft: OfferDraft,
    errors: Vec<FieldError>,
    published: Option<OfferLetterData>,
}

impl OfferForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &OfferDraft {
        &self.draft
    }

    /// Replace the whole draft at once, e.g. from a deserialized JSON file.
    pub fn load_draft(&mut self, draft: OfferDraft) {
        self.draft = draft;
    }

    pub fn set_candidate_name(&mut self, value: impl Into<String>) {
        self.draft.candidate_name = value.into();
    }

    pub fn set_position(&mut self, value: impl Into<String>) {
        self.draft.position = value.into();
    }

    pub fn set_department(&mut self, value: impl Into<String>) {
        self.draft.department = value.into();
    }

    pub fn set_salary(&mut self, value: impl Into<String>) {
        self.draft.salary = value.into();
    }

    pub fn set_start_date(&mut self, value: Option<NaiveDate>) {
        self.draft.start_date = value;
    }

    pub fn set_benefits_package(&mut self, value: impl Into<String>) {
        self.draft.benefits_package = value.into();
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.draft.company_name = value.into();
    }

    pub fn set_company_address(&mut self, value: impl Into<String>) {
        self.draft.company_address = value.into();
    }

    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.draft.additional_notes = value.into();
    }

    /// Set the raw employment type selection key; `None` clears it.
    pub fn set_employment_type(&mut self, value: Option<String>) {
        self.draft.employment_type = value;
    }

    pub fn set_signatory_name(&mut self, value: impl Into<String>) {
        self.draft.signatory_name = value.into();
    }

    pub fn set_signatory_title(&mut self, value: impl Into<String>) {
        self.draft.signatory_title = value.into();
    }

    /// Field errors recorded by the last submission.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message attached to one field, if its last check failed.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// The currently published snapshot, if any submission has succeeded.
    pub fn published(&self) -> Option<&OfferLetterData> {
        self.published.as_ref()
    }

    /// Validate every field and, if all pass, publish a snapshot.
    ///
    /// On failure the per-field messages are stored (see
    /// [`OfferForm::error_for`]), no snapshot is produced, the previously
    /// published one is untouched, and the sink is not called. On success
    /// exactly one notification is emitted and the snapshot replaces any
    /// prior one.
    pub fn submit(
        &mut self,
        sink: &mut dyn NotificationSink,
    ) -> Result<&OfferLetterData, &[FieldError]> {
        match validate(&self.draft) {
            Ok(data) => {
                self.errors.clear();
                let published = self.published.insert(data);
                sink.notify(Notification::letter_generated());
                Ok(&*published)
            }
            Err(errors) => {
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }

    /// Clear all field state back to defaults. Field errors are dropped;
    /// the published snapshot is not affected.
    pub fn reset(&mut self) {
        self.draft = OfferDraft::default();
        self.errors.clear();
    }
}
