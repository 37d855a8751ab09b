//! Snapshot of the form for rendering.

use super::result::{PLACEHOLDER_TEXT, ShortenResult};

/// Which kind of content the result area holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Placeholder,
    Shortened,
    Failed,
}

/// Icon state of the copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyIcon {
    Copy,
    /// Shown while the copied flag is set.
    Check,
}

/// Everything a front end needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub input: String,
    pub result_text: String,
    pub result_kind: ResultKind,
    /// `None` when there is nothing to copy.
    pub copy_control: Option<CopyIcon>,
}

impl FormView {
    pub fn new(input: &str, result: Option<&ShortenResult>, copied: bool) -> Self {
        // An empty short URL from the service displays like no result.
        let result = result.filter(|result| !result.text().is_empty());
        let (result_text, result_kind, copy_control) = match result {
            None => (PLACEHOLDER_TEXT.to_string(), ResultKind::Placeholder, None),
            Some(result) => {
                let kind = if result.is_shortened() {
                    ResultKind::Shortened
                } else {
                    ResultKind::Failed
                };
                let icon = if copied { CopyIcon::Check } else { CopyIcon::Copy };
                (result.text().to_string(), kind, Some(icon))
            }
        };

        Self {
            input: input.to_string(),
            result_text,
            result_kind,
            copy_control,
        }
    }
}
