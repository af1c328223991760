//! Invoice message templates pre-filled with the extracted recipient.

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::models::config::TemplateConfig;
use crate::models::recipient::RecipientData;

const SUFFIX_PLACEHOLDER: &str = "{{ANREDE_SUFFIX}}";
const ANREDE_PLACEHOLDER: &str = "{{ANREDE}}";
const NAME_PLACEHOLDER: &str = "{{NAME}}";

const INVOICE_SUBJECT: &str = "Ihre Rechnung - Zahnarztpraxis ZÄ Turan & Kaganaslan";
const HTML_HEADING: &str = "<h3>Message from DentKlar</h3>";

const INVOICE_BODY: &str = "Sehr geehrte{{ANREDE_SUFFIX}} {{ANREDE}} {{NAME}},

anbei erhalten Sie Ihre Rechnung für die zahnärztliche Behandlung in unserer Praxis.

Bitte überweisen Sie den Rechnungsbetrag innerhalb von 14 Tagen auf das in der Rechnung angegebene Konto.

Bei Fragen zu Ihrer Rechnung stehen wir Ihnen gerne zur Verfügung.

Mit freundlichen Grüßen
Ihre Zahnarztpraxis
ZÄ Turan & Kaganaslan";

/// A subject/body pair with recipient placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Subject line; empty means "Message from {name}".
    pub subject: String,
    /// Body with `{{ANREDE_SUFFIX}}`, `{{ANREDE}}` and `{{NAME}}` placeholders.
    pub body: String,
}

/// A template with all placeholders filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

impl MessageTemplate {
    /// Create a template, rejecting an empty body.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Result<Self, TemplateError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(TemplateError::EmptyBody);
        }
        Ok(Self {
            subject: subject.into(),
            body,
        })
    }

    /// The built-in German invoice e-mail.
    pub fn invoice_default() -> Self {
        Self {
            subject: INVOICE_SUBJECT.to_string(),
            body: INVOICE_BODY.to_string(),
        }
    }

    /// Built-in template with any configured overrides applied.
    pub fn from_config(config: &TemplateConfig) -> Result<Self, TemplateError> {
        let default = Self::invoice_default();
        Self::new(
            config.subject.clone().unwrap_or(default.subject),
            config.body.clone().unwrap_or(default.body),
        )
    }

    /// Fill in salutation and name.
    pub fn render(&self, anrede: &str, name: &str) -> RenderedMessage {
        // "Sehr geehrter Herr" vs. "Sehr geehrte Frau"
        let suffix = if anrede == "Herr" { "r" } else { "" };

        let body = self
            .body
            .replace(SUFFIX_PLACEHOLDER, suffix)
            .replace(ANREDE_PLACEHOLDER, anrede)
            .replace(NAME_PLACEHOLDER, name);

        let subject = if self.subject.trim().is_empty() {
            format!("Message from {}", name)
        } else {
            self.subject
                .replace(SUFFIX_PLACEHOLDER, suffix)
                .replace(ANREDE_PLACEHOLDER, anrede)
                .replace(NAME_PLACEHOLDER, name)
        };

        RenderedMessage { subject, body }
    }

    /// Render for an extraction result.
    pub fn render_for(&self, recipient: &RecipientData) -> RenderedMessage {
        self.render(&recipient.anrede, &recipient.name)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::invoice_default()
    }
}

impl RenderedMessage {
    /// HTML alternative of the body: a sender heading, then the escaped
    /// body with `<br>` line breaks.
    pub fn html_body(&self) -> String {
        let mut html = String::with_capacity(self.body.len() + 16);
        for c in self.body.chars() {
            match c {
                '&' => html.push_str("&amp;"),
                '<' => html.push_str("&lt;"),
                '>' => html.push_str("&gt;"),
                '"' => html.push_str("&quot;"),
                '\'' => html.push_str("&#39;"),
                '\r' => {}
                '\n' => html.push_str("<br>"),
                other => html.push(other),
            }
        }
        format!("{}<p>{}</p>", HTML_HEADING, html)
    }
}
