use serde::{Deserialize, Serialize};

use crate::complaint::ComplaintDraft;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The fixed-order steps of the complaint wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Identity,
    Parties,
    Narrative,
    Attachment,
}

pub const WIZARD_STEPS: &[WizardStep] = &[
    WizardStep::Identity,
    WizardStep::Parties,
    WizardStep::Narrative,
    WizardStep::Attachment,
];

impl WizardStep {
    pub fn first() -> Self {
        WizardStep::Identity
    }

    /// 1-based position, for the step indicator.
    pub fn index(&self) -> usize {
        WIZARD_STEPS.iter().position(|s| s == self).unwrap_or(0) + 1
    }

    pub fn count() -> usize {
        WIZARD_STEPS.len()
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStep::Attachment
    }

    fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Identity => Some(WizardStep::Parties),
            WizardStep::Parties => Some(WizardStep::Narrative),
            WizardStep::Narrative => Some(WizardStep::Attachment),
            WizardStep::Attachment => None,
        }
    }

    fn prev(&self) -> Option<Self> {
        match self {
            WizardStep::Identity => None,
            WizardStep::Parties => Some(WizardStep::Identity),
            WizardStep::Narrative => Some(WizardStep::Parties),
            WizardStep::Attachment => Some(WizardStep::Narrative),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Your Information",
            WizardStep::Parties => "Parties & Violations",
            WizardStep::Narrative => "Complaint Details",
            WizardStep::Attachment => "Supporting Files & Consent",
        }
    }
}

// ---------------------------------------------------------------------------
// Step validation
// ---------------------------------------------------------------------------

/// Decide whether the wizard may advance past `step`.
///
/// `identity_email` is the email supplied by the identity provider when the
/// user is signed in; it satisfies the identity-step email requirement even
/// when the draft's own email field is empty.
///
/// The parties step is always advance-eligible. The final step has no
/// advance; its gate lives in the submission pipeline.
pub fn can_advance(
    step: WizardStep,
    draft: &ComplaintDraft,
    identity_email: Option<&str>,
) -> Result<(), String> {
    match step {
        WizardStep::Identity => {
            let has_email = !draft.email.trim().is_empty()
                || identity_email.map(|e| !e.trim().is_empty()).unwrap_or(false);
            if draft.first_name.trim().is_empty()
                || draft.last_name.trim().is_empty()
                || !has_email
            {
                return Err("Please provide your first name, last name, and email.".to_string());
            }
            Ok(())
        }
        WizardStep::Parties => Ok(()),
        WizardStep::Narrative => {
            if draft.subject.trim().is_empty() || draft.description.trim().is_empty() {
                return Err("Please provide a subject and a description.".to_string());
            }
            Ok(())
        }
        WizardStep::Attachment => Ok(()),
    }
}

/// The pipeline-level submission gate, independent of per-step validation:
/// the minimal required fields plus consent.
pub fn submission_gate(draft: &ComplaintDraft) -> Result<(), String> {
    if !draft.consent {
        return Err("You must consent before submitting.".to_string());
    }
    if draft.first_name.trim().is_empty()
        || draft.last_name.trim().is_empty()
        || draft.email.trim().is_empty()
    {
        return Err("First name, last name, and email are required.".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Sequences the wizard steps. Holds only the position; the draft itself
/// lives in the form state store and is passed in by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    pub step: WizardStep,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: WizardStep::first(),
        }
    }
}

impl Wizard {
    /// Advance one step if the validator allows it. On Err the step is
    /// unchanged and the reason is returned for display.
    pub fn next(
        &mut self,
        draft: &ComplaintDraft,
        identity_email: Option<&str>,
    ) -> Result<(), String> {
        can_advance(self.step, draft, identity_email)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    /// Step backward unconditionally. A no-op on the first step.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Return to the first step after a successful submission.
    pub fn reset(&mut self) {
        self.step = WizardStep::first();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complaint::DraftField;

    fn identity_complete() -> ComplaintDraft {
        let mut draft = ComplaintDraft::default();
        draft.apply(DraftField::FirstName("Ada".into()));
        draft.apply(DraftField::LastName("Lovelace".into()));
        draft.apply(DraftField::Email("ada@example.com".into()));
        draft
    }

    #[test]
    fn identity_step_blocks_on_each_missing_required_field() {
        let mut wizard = Wizard::default();

        for missing in ["first", "last", "email"] {
            let mut draft = identity_complete();
            match missing {
                "first" => draft.first_name.clear(),
                "last" => draft.last_name.clear(),
                _ => draft.email.clear(),
            }
            let result = wizard.next(&draft, None);
            assert!(result.is_err(), "should block with {} missing", missing);
            assert_eq!(wizard.step, WizardStep::Identity, "step must not move");
        }
    }

    #[test]
    fn identity_email_from_provider_satisfies_email_requirement() {
        let mut draft = identity_complete();
        draft.email.clear();
        assert!(can_advance(WizardStep::Identity, &draft, Some("ada@example.com")).is_ok());
        assert!(can_advance(WizardStep::Identity, &draft, Some("  ")).is_err());
        assert!(can_advance(WizardStep::Identity, &draft, None).is_err());
    }

    #[test]
    fn whitespace_only_fields_do_not_pass_identity() {
        let mut draft = identity_complete();
        draft.first_name = "   ".into();
        assert!(can_advance(WizardStep::Identity, &draft, None).is_err());
    }

    #[test]
    fn parties_step_always_advances_even_when_empty() {
        let mut wizard = Wizard {
            step: WizardStep::Parties,
        };
        let draft = ComplaintDraft::default();
        assert!(wizard.next(&draft, None).is_ok());
        assert_eq!(wizard.step, WizardStep::Narrative);
    }

    #[test]
    fn narrative_step_requires_subject_and_description() {
        let mut draft = ComplaintDraft::default();
        assert!(can_advance(WizardStep::Narrative, &draft, None).is_err());

        draft.apply(DraftField::Subject("Denied visitation".into()));
        assert!(can_advance(WizardStep::Narrative, &draft, None).is_err());

        draft.apply(DraftField::Description("What happened...".into()));
        assert!(can_advance(WizardStep::Narrative, &draft, None).is_ok());
    }

    #[test]
    fn back_always_succeeds_regardless_of_draft_validity() {
        // No validation on the way back, even with a completely empty draft.
        let mut wizard = Wizard {
            step: WizardStep::Attachment,
        };
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Narrative);
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Parties);
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Identity);
        // floor: back from the first step is a no-op
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Identity);
    }

    #[test]
    fn full_forward_walk_with_valid_draft() {
        let mut draft = identity_complete();
        draft.apply(DraftField::Subject("S".into()));
        draft.apply(DraftField::Description("D".into()));

        let mut wizard = Wizard::default();
        assert!(wizard.next(&draft, None).is_ok());
        assert_eq!(wizard.step, WizardStep::Parties);
        assert!(wizard.next(&draft, None).is_ok());
        assert_eq!(wizard.step, WizardStep::Narrative);
        assert!(wizard.next(&draft, None).is_ok());
        assert_eq!(wizard.step, WizardStep::Attachment);
        assert!(wizard.step.is_last());
    }

    #[test]
    fn submission_gate_requires_consent_and_identity_fields() {
        let mut draft = identity_complete();
        assert!(submission_gate(&draft).is_err(), "consent missing");

        draft.apply(DraftField::Consent(true));
        assert!(submission_gate(&draft).is_ok());

        draft.email.clear();
        assert!(submission_gate(&draft).is_err(), "email missing");
    }

    #[test]
    fn step_indices_are_one_based_and_stable() {
        assert_eq!(WizardStep::Identity.index(), 1);
        assert_eq!(WizardStep::Attachment.index(), WizardStep::count());
        assert_eq!(WizardStep::count(), 4);
    }

    #[test]
    fn reset_returns_to_first_step() {
        let mut wizard = Wizard {
            step: WizardStep::Attachment,
        };
        wizard.reset();
        assert_eq!(wizard.step, WizardStep::first());
    }
}
