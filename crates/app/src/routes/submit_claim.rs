use dioxus::prelude::*;
use shared_types::{
    AttachmentFile, ComplaintDraft, DraftField, PartyList, Wizard, WizardStep,
    LEGAL_VIOLATION_OPTIONS, WIZARD_STEPS,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle,
    Checkbox, CheckboxIndicator, CheckboxState, Input, Label, Textarea, ToastOptions,
};

use crate::auth::use_auth;
use crate::submit::{submit_complaint, ServerFns};

/// File types the picker offers; the server accepts anything.
const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.png,.jpg";

/// The multi-step complaint wizard.
///
/// Draft state lives in one signal; the wizard controller gates step
/// changes and the submission pipeline runs from the terminal step. The
/// draft is discarded on success or navigation away; nothing persists
/// across reloads.
#[component]
pub fn SubmitClaim() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut draft = use_signal(ComplaintDraft::default);
    let mut wizard = use_signal(Wizard::default);
    let mut submitting = use_signal(|| false);
    let mut seeded = use_signal(|| false);

    // Pre-fill identity fields once the provider session arrives.
    use_effect(move || {
        if *seeded.read() {
            return;
        }
        if let Some(user) = auth.current_user.read().as_ref() {
            let mut d = draft.write();
            if d.first_name.is_empty() {
                d.first_name = user.first_name.clone();
            }
            if d.last_name.is_empty() {
                d.last_name = user.last_name.clone();
            }
            if d.email.is_empty() {
                if let Some(email) = user.primary_email() {
                    d.email = email.to_string();
                }
            }
            seeded.set(true);
        }
    });

    let on_next = move |_| {
        let email = auth.email();
        let result = wizard.write().next(&draft.read(), email.as_deref());
        if let Err(reason) = result {
            toast.error(reason, ToastOptions::new());
        }
    };

    let on_back = move |_| {
        wizard.write().back();
    };

    let on_submit = move |_| {
        spawn(async move {
            submitting.set(true);
            let current = draft.read().clone();
            let user_id = auth.user_id();

            match submit_complaint(&ServerFns, &user_id, &current).await {
                Ok(_id) => {
                    toast.success(
                        "Complaint submitted successfully.".to_string(),
                        ToastOptions::new(),
                    );
                    // Reset-on-success: clear the draft and return to step 1.
                    draft.set(ComplaintDraft::default());
                    wizard.write().reset();
                }
                Err(e) => {
                    // Draft stays intact so the user can retry.
                    toast.error(e.to_string(), ToastOptions::new());
                }
            }
            submitting.set(false);
        });
    };

    let step = wizard.read().step;
    let current = draft.read().clone();
    let email_from_provider = auth.email().is_some();
    let busy = *submitting.read();

    rsx! {
        div { class: "wizard-page",
            Card {
                CardHeader {
                    CardTitle { "File a Parental Rights Complaint" }
                    div { class: "step-indicator",
                        for s in WIZARD_STEPS.iter() {
                            div {
                                class: if s.index() <= step.index() { "step-dot active" } else { "step-dot" },
                            }
                        }
                    }
                    p { class: "step-title", "{step.title()}" }
                }
                CardContent {
                    match step {
                        WizardStep::Identity => rsx! {
                            div { class: "form-group",
                                Input {
                                    label: "First Name",
                                    value: current.first_name.clone(),
                                    on_input: move |evt: FormEvent| {
                                        draft.write().apply(DraftField::FirstName(evt.value().to_string()))
                                    },
                                }
                            }
                            div { class: "form-group",
                                Input {
                                    label: "Last Name",
                                    value: current.last_name.clone(),
                                    on_input: move |evt: FormEvent| {
                                        draft.write().apply(DraftField::LastName(evt.value().to_string()))
                                    },
                                }
                            }
                            div { class: "form-group",
                                Input {
                                    label: if email_from_provider { "Email (from your account)" } else { "Email" },
                                    value: current.email.clone(),
                                    disabled: email_from_provider,
                                    on_input: move |evt: FormEvent| {
                                        draft.write().apply(DraftField::Email(evt.value().to_string()))
                                    },
                                }
                            }
                            div { class: "form-group",
                                Input {
                                    label: "Phone Number (optional)",
                                    value: current.phone.clone(),
                                    on_input: move |evt: FormEvent| {
                                        draft.write().apply(DraftField::Phone(evt.value().to_string()))
                                    },
                                }
                            }
                        },
                        WizardStep::Parties => rsx! {
                            for list in [PartyList::Claimants, PartyList::Defendants, PartyList::Witnesses, PartyList::CaseNumbers] {
                                div { class: "form-group",
                                    Label { "{list.label()}" }
                                    for (index, entry) in current.list(list).iter().enumerate() {
                                        Input {
                                            value: entry.clone(),
                                            on_input: move |evt: FormEvent| {
                                                draft.write().apply(DraftField::ListEntry {
                                                    list,
                                                    index,
                                                    value: evt.value().to_string(),
                                                })
                                            },
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| draft.write().apply(DraftField::AppendEntry(list)),
                                        "+ Add another"
                                    }
                                }
                            }
                            div { class: "form-group",
                                Label { "Legal Violations" }
                                for option in LEGAL_VIOLATION_OPTIONS.iter().copied() {
                                    label { class: "violation-option",
                                        input {
                                            r#type: "checkbox",
                                            checked: current.has_violation(option),
                                            onchange: move |_| {
                                                draft.write().apply(DraftField::ToggleViolation(option.to_string()))
                                            },
                                        }
                                        "{option}"
                                    }
                                }
                            }
                        },
                        WizardStep::Narrative => rsx! {
                            div { class: "form-group",
                                Input {
                                    label: "Subject",
                                    value: current.subject.clone(),
                                    on_input: move |evt: FormEvent| {
                                        draft.write().apply(DraftField::Subject(evt.value().to_string()))
                                    },
                                }
                            }
                            div { class: "form-group",
                                Textarea {
                                    label: "Description",
                                    rows: 6,
                                    value: current.description.clone(),
                                    on_input: move |evt: FormEvent| {
                                        draft.write().apply(DraftField::Description(evt.value().to_string()))
                                    },
                                }
                            }
                        },
                        WizardStep::Attachment => rsx! {
                            div { class: "form-group",
                                Label { "Upload Supporting Files" }
                                input {
                                    r#type: "file",
                                    accept: ACCEPTED_FILE_TYPES,
                                    class: "file-input",
                                    onchange: move |evt: FormEvent| async move {
                                        let files = evt.files();
                                        if let Some(file) = files.first() {
                                            let name = file.name();
                                            let content_type = file
                                                .content_type()
                                                .unwrap_or_else(|| "application/octet-stream".to_string());
                                            match file.read_bytes().await {
                                                Ok(bytes) => {
                                                    draft.write().apply(DraftField::Attachment(Some(AttachmentFile {
                                                        name,
                                                        content_type,
                                                        bytes: bytes.to_vec(),
                                                    })));
                                                }
                                                Err(_) => {
                                                    toast.error("Failed to read file".to_string(), ToastOptions::new());
                                                }
                                            }
                                        }
                                    },
                                }
                                if let Some(file) = current.attachment.as_ref() {
                                    p { class: "file-selected", "Selected: {file.name}" }
                                }
                            }
                            div { class: "form-group consent-row",
                                Checkbox {
                                    default_checked: if current.consent { CheckboxState::Checked } else { CheckboxState::Unchecked },
                                    on_checked_change: move |state: CheckboxState| {
                                        let checked = matches!(state, CheckboxState::Checked);
                                        draft.write().apply(DraftField::Consent(checked));
                                    },
                                    CheckboxIndicator {}
                                }
                                Label {
                                    "I consent to this information being stored and used for legal purposes."
                                }
                            }
                        },
                    }
                }
                CardFooter {
                    if step.index() > 1 {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: on_back,
                            "Back"
                        }
                    } else {
                        div {}
                    }
                    if step.is_last() {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: busy,
                            onclick: on_submit,
                            if busy { "Submitting..." } else { "Submit" }
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: on_next,
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
