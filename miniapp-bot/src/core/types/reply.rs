//! Outgoing reply: text, optional parse mode and optional Mini App button.

use reqwest::Url;

/// How the client should render the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Html,
}

/// Inline button that opens a web app inside the messaging client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAppButton {
    pub label: String,
    pub url: Url,
}

/// One outbound message. A button, when present, is rendered as a one-row inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub button: Option<WebAppButton>,
}

impl Reply {
    /// Plain text reply without markup or keyboard.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
            button: None,
        }
    }

    /// HTML-formatted reply without keyboard.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            parse_mode: Some(ParseMode::Html),
            ..Self::text(text)
        }
    }

    /// Attaches a web-app button with the given label and target.
    pub fn with_web_app(mut self, label: impl Into<String>, url: Url) -> Self {
        self.button = Some(WebAppButton {
            label: label.into(),
            url,
        });
        self
    }
}
