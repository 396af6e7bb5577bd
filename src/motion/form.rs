//! Contact form state machine and mailto construction.
//!
//! There is no backend: "sending" means building a `mailto:` deep link and
//! asking the environment to open it in a new context. Success therefore
//! only means the link was constructed and an open was attempted — whether
//! a mail client exists, let alone whether anything was delivered, is
//! unknowable from here, and the machine makes no stronger claim.
//!
//! Validation checks that all three fields are non-empty strings, without
//! trimming: a field of only spaces passes. That leniency matches the
//! original page and is pinned by a test rather than corrected.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use super::timer::Deadline;

/// How long the submitted notice shows before the form returns to idle.
pub const SUBMITTED_RESET_MS: u64 = 5000;

/// User-visible message for missing fields.
pub const VALIDATION_MESSAGE: &str = "Please fill out all fields";

/// User-visible message when the mail link cannot be built or opened.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// User-visible notice while the submitted status shows.
pub const SUBMITTED_MESSAGE: &str = "Message sent! Thank you for reaching out.";

/// Percent-encoding set equivalent to JavaScript's `encodeURIComponent`:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The three raw input fields. All required; none trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// Exact non-empty checks — whitespace-only content passes.
    pub fn all_present(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Transient submission status. Exactly one variant is ever active, which
/// is what the display layer relies on (one status line at a time).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Submitted,
    Error(String),
}

/// A composed mail deep link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    /// Compose the draft for a filled form: subject `Contact from {name}`,
    /// body carrying name, email and message.
    pub fn compose(to: &str, fields: &FormFields) -> Self {
        Self {
            to: to.to_string(),
            subject: format!("Contact from {}", fields.name),
            body: format!(
                "Name: {}\nEmail: {}\n\n{}",
                fields.name, fields.email, fields.message
            ),
        }
    }

    /// The `mailto:` URI with subject and body percent-encoded.
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            utf8_percent_encode(&self.subject, URI_COMPONENT),
            utf8_percent_encode(&self.body, URI_COMPONENT),
        )
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    /// The environment refused or failed to open the link.
    #[error("could not open mail client: {0}")]
    OpenFailed(String),
}

/// Opens a composed mail link in a new context (must not replace the page).
///
/// The runtime and tests plug in recorders or failing stubs; the shipped
/// script's `window.open` is the real counterpart.
pub trait MailClient {
    fn open(&mut self, href: &str) -> Result<(), MailError>;
}

/// The contact form controller.
///
/// ```text
/// Idle --submit, fields valid--> Submitting --open ok--> Submitted --5000ms--> Idle
/// Idle --submit, field empty--> Error("Please fill out all fields")
/// Submitting --open fails--> Error("Failed to send message. ...")
/// Error --submit--> (revalidates, as above)
/// ```
#[derive(Debug)]
pub struct ContactForm {
    to: String,
    fields: FormFields,
    status: FormStatus,
    reset: Option<Deadline>,
}

impl ContactForm {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            fields: FormFields::default(),
            status: FormStatus::Idle,
            reset: None,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Submit the form at `now_ms`.
    ///
    /// On validation failure no link is constructed. On a successful open
    /// attempt the raw fields reset unconditionally — there is no way to
    /// observe whether a mail client actually appeared. On open failure the
    /// fields are preserved so the user can retry.
    pub fn submit(&mut self, now_ms: u64, mail: &mut dyn MailClient) {
        if !self.fields.all_present() {
            self.status = FormStatus::Error(VALIDATION_MESSAGE.to_string());
            return;
        }
        self.status = FormStatus::Submitting;
        let link = MailtoLink::compose(&self.to, &self.fields);
        match mail.open(&link.href()) {
            Ok(()) => {
                self.status = FormStatus::Submitted;
                self.reset = Some(Deadline::at(now_ms + SUBMITTED_RESET_MS));
                self.fields = FormFields::default();
            }
            Err(_) => {
                self.status = FormStatus::Error(SEND_FAILED_MESSAGE.to_string());
                self.reset = None;
            }
        }
    }

    /// Advance the submitted-notice timeout.
    pub fn poll(&mut self, now_ms: u64) {
        if let Some(reset) = self.reset.as_mut()
            && reset.fire(now_ms)
        {
            self.status = FormStatus::Idle;
            self.reset = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every href it is asked to open.
    #[derive(Default)]
    struct RecordingMail {
        opened: Vec<String>,
    }

    impl MailClient for RecordingMail {
        fn open(&mut self, href: &str) -> Result<(), MailError> {
            self.opened.push(href.to_string());
            Ok(())
        }
    }

    /// Always fails to open.
    struct BrokenMail;

    impl MailClient for BrokenMail {
        fn open(&mut self, _href: &str) -> Result<(), MailError> {
            Err(MailError::OpenFailed("no handler registered".into()))
        }
    }

    fn filled() -> FormFields {
        FormFields {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn empty_field_is_a_validation_error_without_link_construction() {
        let mut form = ContactForm::new("hessam.mamagani@gmail.com");
        *form.fields_mut() = FormFields {
            name: String::new(),
            ..filled()
        };
        let mut mail = RecordingMail::default();
        form.submit(0, &mut mail);

        assert_eq!(
            form.status(),
            &FormStatus::Error(VALIDATION_MESSAGE.to_string())
        );
        assert!(mail.opened.is_empty(), "no mailto may be constructed");
        // Fields survive for correction
        assert_eq!(form.fields().email, "a@b.com");
    }

    #[test]
    fn valid_submit_opens_encoded_mailto_and_resets_fields() {
        let mut form = ContactForm::new("hessam.mamagani@gmail.com");
        *form.fields_mut() = filled();
        let mut mail = RecordingMail::default();
        form.submit(0, &mut mail);

        assert!(form.is_submitted());
        assert_eq!(mail.opened.len(), 1);
        let href = &mail.opened[0];
        assert!(href.starts_with("mailto:hessam.mamagani@gmail.com?subject=Contact%20from%20A"));
        assert!(href.contains("&body="));
        assert!(href.contains("a%40b.com"), "email must be encoded: {href}");
        // Fields reset after the attempt — there is no delivery signal to wait on
        assert_eq!(form.fields(), &FormFields::default());
    }

    #[test]
    fn submitted_reverts_to_idle_after_5000_ms() {
        let mut form = ContactForm::new("x@y.z");
        *form.fields_mut() = filled();
        form.submit(0, &mut RecordingMail::default());
        assert!(form.is_submitted());

        form.poll(4999);
        assert!(form.is_submitted());
        form.poll(5000);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn open_failure_surfaces_message_and_keeps_fields() {
        let mut form = ContactForm::new("x@y.z");
        *form.fields_mut() = filled();
        form.submit(0, &mut BrokenMail);

        assert_eq!(
            form.status(),
            &FormStatus::Error(SEND_FAILED_MESSAGE.to_string())
        );
        assert_eq!(form.fields(), &filled(), "fields preserved for retry");

        // Retry against a working client succeeds
        let mut mail = RecordingMail::default();
        form.submit(100, &mut mail);
        assert!(form.is_submitted());
        assert_eq!(mail.opened.len(), 1);
    }

    #[test]
    fn whitespace_only_fields_pass_validation() {
        // Known quirk preserved from the original page: validation does not
        // trim, so whitespace-only input counts as present.
        let mut form = ContactForm::new("x@y.z");
        *form.fields_mut() = FormFields {
            name: "   ".to_string(),
            email: " ".to_string(),
            message: "\t".to_string(),
        };
        let mut mail = RecordingMail::default();
        form.submit(0, &mut mail);
        assert!(form.is_submitted());
        assert_eq!(mail.opened.len(), 1);
    }

    #[test]
    fn body_carries_name_email_and_message() {
        let link = MailtoLink::compose("x@y.z", &filled());
        assert_eq!(link.subject, "Contact from A");
        assert_eq!(link.body, "Name: A\nEmail: a@b.com\n\nhi");
    }

    #[test]
    fn href_encoding_matches_encode_uri_component() {
        let fields = FormFields {
            name: "Jo & Co (on-call)".to_string(),
            email: "jo+dev@example.com".to_string(),
            message: "100% sure!\nsecond line ~ok~ *bold* 'q'".to_string(),
        };
        let href = MailtoLink::compose("x@y.z", &fields).href();
        // Spaces and ampersands encode; encodeURIComponent's unreserved
        // marks do not
        assert!(href.contains("subject=Contact%20from%20Jo%20%26%20Co%20(on-call)"));
        assert!(href.contains("jo%2Bdev%40example.com"));
        assert!(href.contains("100%25%20sure!%0Asecond%20line%20~ok~%20*bold*%20'q'"));
    }

    #[test]
    fn statuses_are_mutually_exclusive_by_construction() {
        // The enum cannot express overlapping statuses; assert the display
        // mapping anyway for the renderer's benefit.
        let mut form = ContactForm::new("x@y.z");
        assert_eq!(form.status(), &FormStatus::Idle);
        *form.fields_mut() = filled();
        form.submit(0, &mut RecordingMail::default());
        assert!(matches!(form.status(), FormStatus::Submitted));
    }
}
