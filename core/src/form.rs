//! Contact form state and the submission flow.
//!
//! # State machine
//! ```text
//!   Idle --begin_submission--> Submitting --complete_submission--> Resolved
//!     ^                                                              |
//!     +----------------------------- edit ---------------------------+
//! ```
//! * `begin_submission` runs the checks a browser form makes before letting a
//!   submit through (required fields present, email shape, select values,
//!   date format), refuses while another submission is in flight, and yields the
//!   wire payload.
//! * `complete_submission` always clears `submitting`. On success the status
//!   records the server's message and reference and every field is reset; on
//!   failure the fields stay as typed.
//! * `edit` applies the new value and drops any Resolved status.
//!
//! `submit` drives the whole cycle against an `ApiService` and resets
//! `submitting` even if the call's future is dropped part-way.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{SubmitError, ValidationError};
use crate::service::{ApiResult, ApiService, FailureKind};
use crate::transport::Transport;
use crate::types::{ContactReceipt, ContactRequest, DocumentType, ServiceType, Urgency};

/// Message shown when the submission never reached the server.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ServiceType,
    DocumentType,
    PreferredDate,
    Message,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::ServiceType,
        Field::DocumentType,
        Field::PreferredDate,
        Field::Message,
    ];

    /// Wire/form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ServiceType => "service_type",
            Field::DocumentType => "document_type",
            Field::PreferredDate => "preferred_date",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Phone | Field::ServiceType)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The form's raw values, exactly as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub document_type: String,
    pub preferred_date: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ServiceType => &self.service_type,
            Field::DocumentType => &self.document_type,
            Field::PreferredDate => &self.preferred_date,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::ServiceType => &mut self.service_type,
            Field::DocumentType => &mut self.document_type,
            Field::PreferredDate => &mut self.preferred_date,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Turn the draft into the outbound payload.
    ///
    /// Blank optional fields are dropped rather than sent as empty strings,
    /// and urgency is always `Normal`.
    pub fn to_request(&self) -> Result<ContactRequest, ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).is_empty())
        {
            return Err(ValidationError::Missing(field));
        }

        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        let service_type: ServiceType = self
            .service_type
            .trim()
            .parse()
            .map_err(ValidationError::UnknownServiceType)?;

        let document_type = match non_blank(&self.document_type) {
            Some(raw) => Some(raw.trim().parse::<DocumentType>().map_err(ValidationError::UnknownDocumentType)?),
            None => None,
        };

        let preferred_date = match non_blank(&self.preferred_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
            ),
            None => None,
        };

        Ok(ContactRequest {
            name: self.name.clone(),
            email: email.to_string(),
            phone: self.phone.clone(),
            service_type,
            document_type,
            preferred_date,
            message: non_blank(&self.message).map(str::to_string),
            urgency: Urgency::Normal,
        })
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The `type=email` input rule: `local@domain`, no whitespace, both parts
/// non-empty.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// What the form shows after a submission resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { message: String, reference: String },
    Failure { error: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Resolved,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
    status: Option<SubmissionResult>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&SubmissionResult> {
        self.status.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.status.is_some() {
            Phase::Resolved
        } else {
            Phase::Idle
        }
    }

    /// Apply one keystroke/selection. Any shown result is cleared.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
        if self.status.take().is_some() {
            tracing::debug!(%field, "edit cleared previous submission status");
        }
    }

    pub fn begin_submission(&mut self) -> Result<ContactRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let request = self.draft.to_request()?;
        self.submitting = true;
        self.status = None;
        tracing::debug!(service_type = %request.service_type, "contact submission started");
        Ok(request)
    }

    pub fn complete_submission(&mut self, outcome: ApiResult<ContactReceipt>) -> &SubmissionResult {
        self.submitting = false;
        let result = match outcome {
            ApiResult::Success(receipt) => {
                self.status = None;
                tracing::info!(reference = %receipt.reference, "contact submission accepted");
                let result = SubmissionResult::Success {
                    message: receipt.message,
                    reference: receipt.reference,
                };
                self.draft = ContactDraft::default();
                result
            }
            ApiResult::Failure(failure) => {
                tracing::warn!(kind = ?failure.kind, error = %failure.error, "contact submission failed");
                let error = match failure.kind {
                    FailureKind::Transport => SUBMIT_FAILED_MESSAGE.to_string(),
                    FailureKind::Rejected | FailureKind::Malformed => failure.error,
                };
                SubmissionResult::Failure { error }
            }
        };
        self.status.insert(result)
    }

    /// Validate, send, and record the outcome.
    ///
    /// Returns `Err` only when nothing was sent; every sent submission ends
    /// in a `SubmissionResult`.
    pub async fn submit<T: Transport>(
        &mut self,
        api: &ApiService<T>,
    ) -> Result<&SubmissionResult, SubmitError> {
        let request = self.begin_submission()?;
        let outcome = {
            let _in_flight = InFlight(&mut self.submitting);
            api.submit_contact_form(&request).await
        };
        Ok(self.complete_submission(outcome))
    }
}

/// Clears the `submitting` flag when dropped.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ApiFailure;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Jane Doe");
        form.edit(Field::Email, "jane@x.com");
        form.edit(Field::Phone, "555-0100");
        form.edit(Field::ServiceType, "remote");
        form
    }

    fn receipt() -> ApiResult<ContactReceipt> {
        ApiResult::Success(ContactReceipt {
            message: "ok".to_string(),
            reference: "REQ-1".to_string(),
            estimated_response: None,
        })
    }

    fn failure(kind: FailureKind, error: &str) -> ApiResult<ContactReceipt> {
        ApiResult::Failure(ApiFailure {
            error: error.to_string(),
            kind,
        })
    }

    #[test]
    fn new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.draft().is_empty());
        assert!(form.status().is_none());
    }

    #[test]
    fn missing_required_field_blocks_submission() {
        let mut form = filled();
        form.edit(Field::Phone, "");
        assert_eq!(
            form.begin_submission(),
            Err(SubmitError::Invalid(ValidationError::Missing(Field::Phone)))
        );
        assert!(!form.is_submitting());
        assert_eq!(form.draft().name, "Jane Doe");
    }

    #[test]
    fn whitespace_counts_as_present_for_required_fields() {
        let mut form = filled();
        form.edit(Field::Name, "  ");
        let request = form.begin_submission().unwrap();
        assert_eq!(request.name, "  ");
        assert!(form.is_submitting());
    }

    #[test]
    fn unselected_service_type_is_missing() {
        let mut form = filled();
        form.edit(Field::ServiceType, "");
        assert_eq!(
            form.begin_submission(),
            Err(SubmitError::Invalid(ValidationError::Missing(Field::ServiceType)))
        );
    }

    #[test]
    fn email_must_have_local_and_domain_parts() {
        for bad in ["jane", "jane@", "@x.com", "jane @x.com", "a@b@c"] {
            let mut form = filled();
            form.edit(Field::Email, bad);
            assert!(
                matches!(
                    form.begin_submission(),
                    Err(SubmitError::Invalid(ValidationError::InvalidEmail(_)))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn date_must_be_iso() {
        let mut form = filled();
        form.edit(Field::PreferredDate, "03/14/2025");
        assert_eq!(
            form.begin_submission(),
            Err(SubmitError::Invalid(ValidationError::InvalidDate("03/14/2025".to_string())))
        );
    }

    #[test]
    fn unknown_select_values_are_rejected() {
        let mut form = filled();
        form.edit(Field::DocumentType, "tax-return");
        assert_eq!(
            form.begin_submission(),
            Err(SubmitError::Invalid(ValidationError::UnknownDocumentType("tax-return".to_string())))
        );
    }

    #[test]
    fn blank_optionals_are_omitted_and_urgency_is_normal() {
        let mut form = filled();
        form.edit(Field::Message, "   ");
        let request = form.begin_submission().unwrap();
        assert_eq!(request.document_type, None);
        assert_eq!(request.preferred_date, None);
        assert_eq!(request.message, None);
        assert_eq!(request.urgency, Urgency::Normal);
    }

    #[test]
    fn filled_optionals_are_typed() {
        let mut form = filled();
        form.edit(Field::DocumentType, "power-attorney");
        form.edit(Field::PreferredDate, "2025-03-14");
        form.edit(Field::Message, "Two signers");
        let request = form.begin_submission().unwrap();
        assert_eq!(request.document_type, Some(DocumentType::PowerAttorney));
        assert_eq!(request.preferred_date, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(request.message.as_deref(), Some("Two signers"));
    }

    #[test]
    fn second_begin_while_in_flight_is_refused() {
        let mut form = filled();
        form.begin_submission().unwrap();
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(form.begin_submission(), Err(SubmitError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn success_records_reference_and_resets_fields() {
        let mut form = filled();
        form.begin_submission().unwrap();
        let result = form.complete_submission(receipt()).clone();
        assert_eq!(
            result,
            SubmissionResult::Success {
                message: "ok".to_string(),
                reference: "REQ-1".to_string()
            }
        );
        assert!(!form.is_submitting());
        assert!(form.draft().is_empty());
        assert_eq!(form.phase(), Phase::Resolved);
    }

    #[test]
    fn rejection_keeps_fields_and_server_message() {
        let mut form = filled();
        let before = form.draft().clone();
        form.begin_submission().unwrap();
        form.complete_submission(failure(FailureKind::Rejected, "Email already has a pending request"));
        assert_eq!(
            form.status(),
            Some(&SubmissionResult::Failure {
                error: "Email already has a pending request".to_string()
            })
        );
        assert_eq!(form.draft(), &before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn transport_failure_shows_retry_message() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.complete_submission(failure(FailureKind::Transport, "Failed to submit contact form"));
        assert_eq!(
            form.status(),
            Some(&SubmissionResult::Failure {
                error: SUBMIT_FAILED_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn edit_after_result_clears_status() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.complete_submission(failure(FailureKind::Rejected, "nope"));
        assert_eq!(form.phase(), Phase::Resolved);

        form.edit(Field::Phone, "555-0101");
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.status().is_none());
        assert_eq!(form.draft().phone, "555-0101");
    }

    #[test]
    fn fields_are_independent() {
        let mut form = ContactForm::new();
        form.edit(Field::Message, "hello");
        form.edit(Field::Name, "Ann");
        form.edit(Field::Message, "hello again");
        assert_eq!(form.draft().name, "Ann");
        assert_eq!(form.draft().get(Field::Message), "hello again");
        assert_eq!(form.draft().get(Field::Email), "");
    }
}
