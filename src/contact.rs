//! Contact form state and `mailto:` link composition.
//!
//! Submitting the form hands everything to the visitor's mail client. There
//! is no validation and no delivery feedback.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters escaped inside `mailto:` header values (RFC 6068 `hfvalue`).
///
/// Unreserved characters and the `some-delims` set stay literal so addresses
/// such as `ada@example.com` remain readable. `+` is escaped because several
/// mail clients decode it as a space.
const MAILTO_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@');

/// Editable contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender's name
    Name,
    /// Sender's email address
    Email,
    /// Message body
    Message,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Field whose form control is called `name`.
    #[must_use]
    pub fn from_control_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.control_name() == name)
    }

    /// Form control name of the field.
    #[must_use]
    pub const fn control_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// The three free-text fields of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Sender's name
    pub name: String,
    /// Sender's email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Creates a form with all three fields filled.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Replaces one field with user input.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Subject line carrying the sender's name and address.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("Contact from {} ({})", self.name, self.email)
    }

    /// Composes the mail link for the current field values.
    #[must_use]
    pub fn mail_link(&self, recipient: &str) -> MailLink {
        MailLink {
            recipient: recipient.to_string(),
            subject: self.subject(),
            body: self.message.clone(),
        }
    }
}

/// A `mailto:` link with a subject and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailLink {
    recipient: String,
    subject: String,
    body: String,
}

impl MailLink {
    /// Recipient address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Unescaped subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Unescaped body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Escaped subject as it appears in the link.
    #[must_use]
    pub fn encoded_subject(&self) -> String {
        utf8_percent_encode(&self.subject, MAILTO_VALUE).to_string()
    }

    /// Escaped body as it appears in the link.
    #[must_use]
    pub fn encoded_body(&self) -> String {
        utf8_percent_encode(&self.body, MAILTO_VALUE).to_string()
    }

    /// The full link, ready to navigate to.
    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            utf8_percent_encode(&self.recipient, MAILTO_VALUE),
            self.encoded_subject(),
            self.encoded_body()
        )
    }
}

/// Splits a `mailto:` href into its decoded `subject` and `body` values.
///
/// Returns `None` when the href is not a mail link. Missing parameters decode
/// as empty strings.
#[must_use]
pub fn parse_mail_link(href: &str) -> Option<(String, String, String)> {
    let rest = href.strip_prefix("mailto:")?;
    let (recipient, query) = rest.split_once('?').unwrap_or((rest, ""));

    let decode = |value: &str| percent_decode_str(value).decode_utf8_lossy().into_owned();
    let mut subject = String::new();
    let mut body = String::new();
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("subject", value)) => subject = decode(value),
            Some(("body", value)) => body = decode(value),
            _ => {}
        }
    }

    Some((decode(recipient), subject, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "studio@example.com";

    #[test]
    fn test_reference_submission() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let link = form.mail_link(RECIPIENT);

        assert_eq!(link.encoded_body(), "Hello");
        assert!(link.encoded_subject().contains("Ada"));
        assert!(link.encoded_subject().contains("ada@example.com"));
        assert_eq!(
            link.href(),
            "mailto:studio@example.com?subject=Contact%20from%20Ada%20(ada@example.com)&body=Hello"
        );
    }

    #[test]
    fn test_fields_by_control_name() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_control_name(field.control_name()), Some(field));
        }
        assert_eq!(ContactField::from_control_name("phone"), None);

        let mut form = ContactForm::default();
        form.set(ContactField::Message, "Hi");
        assert_eq!(form.get(ContactField::Message), "Hi");
    }

    #[test]
    fn test_empty_fields_still_compose() {
        let link = ContactForm::default().mail_link(RECIPIENT);
        assert_eq!(
            link.href(),
            "mailto:studio@example.com?subject=Contact%20from%20%20()&body="
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let form = ContactForm::new("A&B", "x+y@example.com", "line one\nline two & more?=");
        let href = form.mail_link(RECIPIENT).href();

        assert!(href.contains("A%26B"));
        assert!(href.contains("x%2By@example.com"));
        assert!(href.ends_with("&body=line%20one%0Aline%20two%20%26%20more%3F%3D"));
        assert_eq!(href.matches('&').count(), 1);
        assert_eq!(href.matches('?').count(), 1);
    }

    #[test]
    fn test_unicode_round_trips() {
        let form = ContactForm::new("Zoë", "zoe@example.com", "こんにちは");
        let link = form.mail_link(RECIPIENT);
        let (recipient, subject, body) = parse_mail_link(&link.href()).unwrap();

        assert_eq!(recipient, RECIPIENT);
        assert_eq!(subject, "Contact from Zoë (zoe@example.com)");
        assert_eq!(body, "こんにちは");
    }

    #[test]
    fn test_link_tracks_latest_input() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Name, "Grace");
        form.set(ContactField::Message, "Hi");

        assert_eq!(form.get(ContactField::Name), "Grace");
        let link = form.mail_link(RECIPIENT);
        assert_eq!(link.subject(), "Contact from Grace ()");
        assert_eq!(link.body(), "Hi");
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(parse_mail_link("https://example.com").is_none());
        assert_eq!(
            parse_mail_link("mailto:a@b.c"),
            Some(("a@b.c".to_string(), String::new(), String::new()))
        );
    }

    #[test]
    fn test_control_names() {
        assert_eq!(ContactField::Name.control_name(), "name");
        assert_eq!(ContactField::Email.control_name(), "email");
        assert_eq!(ContactField::Message.control_name(), "message");
    }
}
