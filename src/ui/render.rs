//! Terminal rendering of a [`FormView`].

use crate::domain::view::{CopyIcon, FormView, ResultKind};
use colored::*;

const INPUT_PLACEHOLDER: &str = "Enter your URL";

/// Renders the form as colored terminal text.
///
/// # Output Format
///
/// ```text
/// Shorten your URL here:
///   example.com
/// Short URL:
///   http://s.ly/abc  [⧉ copy]
/// ```
pub fn render(view: &FormView) -> String {
    let input = if view.input.is_empty() {
        INPUT_PLACEHOLDER.bright_black()
    } else {
        view.input.normal()
    };

    let result = match view.result_kind {
        ResultKind::Placeholder => view.result_text.bright_black(),
        ResultKind::Shortened => view.result_text.bright_green().bold(),
        ResultKind::Failed => view.result_text.red(),
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Shorten your URL here:".bright_white().bold()));
    out.push_str(&format!("  {input}\n"));
    out.push_str(&format!("{}\n", "Short URL:".bright_white().bold()));

    match view.copy_control {
        Some(icon) => out.push_str(&format!("  {result}  [{}]\n", copy_label(icon))),
        None => out.push_str(&format!("  {result}\n")),
    }

    out
}

fn copy_label(icon: CopyIcon) -> ColoredString {
    match icon {
        CopyIcon::Copy => "⧉ copy".bright_black(),
        CopyIcon::Check => "✔ copied".green().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::{FailureKind, ShortenResult};
    use pretty_assertions::assert_eq;

    fn plain(view: &FormView) -> String {
        colored::control::set_override(false);
        render(view)
    }

    #[test]
    fn test_render_empty_form() {
        let view = FormView::new("", None, false);
        assert_eq!(
            plain(&view),
            "Shorten your URL here:\n  Enter your URL\nShort URL:\n  Your short URL will appear here\n"
        );
    }

    #[test]
    fn test_render_shortened_with_copy_control() {
        let result = ShortenResult::Shortened("http://s.ly/abc".to_string());
        let view = FormView::new("example.com", Some(&result), false);
        assert_eq!(
            plain(&view),
            "Shorten your URL here:\n  example.com\nShort URL:\n  http://s.ly/abc  [⧉ copy]\n"
        );
    }

    #[test]
    fn test_render_copied_state() {
        let result = ShortenResult::Shortened("http://s.ly/abc".to_string());
        let view = FormView::new("example.com", Some(&result), true);
        assert!(plain(&view).ends_with("http://s.ly/abc  [✔ copied]\n"));
    }

    #[test]
    fn test_render_failure() {
        let result = ShortenResult::Failed(FailureKind::ServiceUnavailable);
        let view = FormView::new("example.com", Some(&result), false);
        assert!(plain(&view).contains("  Failed to shorten URL. Please try again.  [⧉ copy]\n"));
    }
}
