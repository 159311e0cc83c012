use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed option list for the legal-violations multi-select. Selections are
/// stored as the option strings themselves, in the order the user picked them.
pub const LEGAL_VIOLATION_OPTIONS: &[&str] = &[
    "Due process violation",
    "Interference with parental rights",
    "Civil rights violation (42 U.S.C. § 1983)",
    "False allegations in court filings",
    "Denial of court-ordered visitation",
    "Judicial misconduct",
    "Agency overreach",
    "Other",
];

pub fn is_known_violation(s: &str) -> bool {
    LEGAL_VIOLATION_OPTIONS.contains(&s)
}

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// A file the user picked in the wizard, held in memory until submission.
/// Re-selecting replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The in-progress complaint form state for one wizard session.
///
/// Owned by the wizard page for the lifetime of the session and discarded on
/// successful submit or navigation away. This layer is pure storage; all
/// validation lives in [`crate::wizard`] and the submission gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub claimants: Vec<String>,
    pub defendants: Vec<String>,
    pub witnesses: Vec<String>,
    pub case_numbers: Vec<String>,
    pub legal_violations: Vec<String>,
    pub subject: String,
    pub description: String,
    pub attachment: Option<AttachmentFile>,
    pub consent: bool,
}

impl Default for ComplaintDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            // Each repeatable list starts with a single empty entry.
            claimants: vec![String::new()],
            defendants: vec![String::new()],
            witnesses: vec![String::new()],
            case_numbers: vec![String::new()],
            legal_violations: Vec::new(),
            subject: String::new(),
            description: String::new(),
            attachment: None,
            consent: false,
        }
    }
}

/// The repeatable list fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyList {
    Claimants,
    Defendants,
    Witnesses,
    CaseNumbers,
}

impl PartyList {
    pub fn label(&self) -> &'static str {
        match self {
            PartyList::Claimants => "Claimants",
            PartyList::Defendants => "Potential Defendants",
            PartyList::Witnesses => "Witnesses",
            PartyList::CaseNumbers => "Case Numbers",
        }
    }
}

/// A single field mutation, applied through [`ComplaintDraft::apply`].
///
/// Modeled as a tagged union rather than string-keyed updates so that field
/// names are checked at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Subject(String),
    Description(String),
    /// Replace one entry of a repeatable list. Out-of-range indices are ignored.
    ListEntry {
        list: PartyList,
        index: usize,
        value: String,
    },
    /// Append one empty entry to a repeatable list.
    AppendEntry(PartyList),
    /// Toggle membership of a violation option: absent → appended,
    /// present → removed. Toggling twice is a no-op.
    ToggleViolation(String),
    Attachment(Option<AttachmentFile>),
    Consent(bool),
}

impl ComplaintDraft {
    fn list_mut(&mut self, list: PartyList) -> &mut Vec<String> {
        match list {
            PartyList::Claimants => &mut self.claimants,
            PartyList::Defendants => &mut self.defendants,
            PartyList::Witnesses => &mut self.witnesses,
            PartyList::CaseNumbers => &mut self.case_numbers,
        }
    }

    pub fn list(&self, list: PartyList) -> &[String] {
        match list {
            PartyList::Claimants => &self.claimants,
            PartyList::Defendants => &self.defendants,
            PartyList::Witnesses => &self.witnesses,
            PartyList::CaseNumbers => &self.case_numbers,
        }
    }

    /// Apply one field update. Scalars replace, list entries replace in place,
    /// appends add one empty entry, violation toggles flip membership.
    pub fn apply(&mut self, update: DraftField) {
        match update {
            DraftField::FirstName(v) => self.first_name = v,
            DraftField::LastName(v) => self.last_name = v,
            DraftField::Email(v) => self.email = v,
            DraftField::Phone(v) => self.phone = v,
            DraftField::Subject(v) => self.subject = v,
            DraftField::Description(v) => self.description = v,
            DraftField::ListEntry { list, index, value } => {
                let entries = self.list_mut(list);
                if let Some(slot) = entries.get_mut(index) {
                    *slot = value;
                }
            }
            DraftField::AppendEntry(list) => self.list_mut(list).push(String::new()),
            DraftField::ToggleViolation(option) => {
                if let Some(pos) = self.legal_violations.iter().position(|v| *v == option) {
                    self.legal_violations.remove(pos);
                } else {
                    self.legal_violations.push(option);
                }
            }
            DraftField::Attachment(file) => self.attachment = file,
            DraftField::Consent(v) => self.consent = v,
        }
    }

    pub fn has_violation(&self, option: &str) -> bool {
        self.legal_violations.iter().any(|v| v == option)
    }

    /// Build the durable document from this draft.
    ///
    /// `file_url` is the object-storage URL returned by the upload endpoint,
    /// or the empty string when no attachment was uploaded. `submitted_at` is
    /// assigned here at submission time and is never user-editable.
    pub fn to_document(&self, user_id: &str, file_url: &str, submitted_at: DateTime<Utc>) -> ComplaintDocument {
        ComplaintDocument {
            user_id: user_id.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            claimants: self.claimants.clone(),
            defendants: self.defendants.clone(),
            witnesses: self.witnesses.clone(),
            case_numbers: self.case_numbers.clone(),
            legal_violations: self.legal_violations.clone(),
            subject: self.subject.clone(),
            description: self.description.clone(),
            file_url: file_url.to_string(),
            consent_given: self.consent,
            submitted_at: Some(submitted_at),
        }
    }
}

// ---------------------------------------------------------------------------
// Durable document
// ---------------------------------------------------------------------------

/// The complaint record as persisted in the content database.
///
/// The camelCase field names are the wire contract shared with the
/// document-create endpoint and any downstream reader. Deserialization is
/// lenient (missing fields default) because the content database, not this
/// type, is the schema authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ComplaintDocument {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub claimants: Vec<String>,
    pub defendants: Vec<String>,
    pub witnesses: Vec<String>,
    pub case_numbers: Vec<String>,
    pub legal_violations: Vec<String>,
    pub subject: String,
    pub description: String,
    /// Empty string when the submission carried no attachment.
    pub file_url: String,
    pub consent_given: bool,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Default for ComplaintDocument {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            claimants: Vec::new(),
            defendants: Vec::new(),
            witnesses: Vec::new(),
            case_numbers: Vec::new(),
            legal_violations: Vec::new(),
            subject: String::new(),
            description: String::new(),
            file_url: String::new(),
            consent_given: false,
            submitted_at: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Upload result
// ---------------------------------------------------------------------------

/// Outcome of one attachment upload attempt. Produced once per submission,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadResult {
    pub success: bool,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Submission errors
// ---------------------------------------------------------------------------

/// Where a submission attempt failed. Every variant is recoverable: the
/// wizard stays on the final step with the draft intact so the user can retry.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// The pipeline-level gate rejected the draft (missing required field or
    /// consent). No network calls were made.
    Validation(String),
    /// The attachment upload failed. No document was created.
    Upload(String),
    /// Document creation failed. The attachment, if any, was already stored.
    Create(String),
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Validation(msg) => write!(f, "{}", msg),
            SubmissionError::Upload(msg) => write!(f, "File upload failed: {}", msg),
            SubmissionError::Create(msg) => write!(f, "Submission failed: {}", msg),
        }
    }
}

impl std::error::Error for SubmissionError {}
