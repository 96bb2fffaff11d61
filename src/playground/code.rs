//! Generated prop code (`<Button size="lg" disabled />`) and the code
//! preview block with its copy indicator.

use std::fmt;
use std::time::{Duration, Instant};

use super::clipboard::{Clipboard, ClipboardError};

/// How long the copied indicator stays visible after a successful copy.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// PropList
// ---------------------------------------------------------------------------

/// Builds a JSX-like element string from the props that differ from their
/// documented defaults, in the order they are added.
///
/// ```
/// use tokenkit::playground::PropList;
///
/// let code = PropList::new("Button")
///     .changed("size", "lg", "md")
///     .flag("disabled", false)
///     .finish();
/// assert_eq!(code, r#"<Button size="lg" />"#);
/// assert_eq!(PropList::new("Button").finish(), "<Button />");
/// ```
#[derive(Debug, Clone)]
pub struct PropList {
    component: &'static str,
    props: Vec<String>,
}

impl PropList {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            props: Vec::new(),
        }
    }

    /// A boolean prop, emitted bare when `true` and omitted when `false`.
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.props.push(name.to_owned());
        }
        self
    }

    /// A string prop, always emitted as `name="value"`.
    pub fn string(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.props.push(format!("{name}=\"{value}\""));
        self
    }

    /// A string prop, emitted only when it differs from `default`.
    pub fn changed<T>(self, name: &str, value: T, default: T) -> Self
    where
        T: PartialEq + fmt::Display,
    {
        if value == default {
            self
        } else {
            self.string(name, value)
        }
    }

    /// An optional string prop, emitted only when present.
    pub fn optional(self, name: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.string(name, value),
            None => self,
        }
    }

    /// A non-string prop, emitted as `name={value}`.
    pub fn expr(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.props.push(format!("{name}={{{value}}}"));
        self
    }

    pub fn finish(self) -> String {
        if self.props.is_empty() {
            format!("<{} />", self.component)
        } else {
            format!("<{} {} />", self.component, self.props.join(" "))
        }
    }
}

// ---------------------------------------------------------------------------
// CodePreview
// ---------------------------------------------------------------------------

/// A code block with a transient "copied" indicator.
#[derive(Debug, Clone)]
pub struct CodePreview {
    code: String,
    copied_at: Option<Instant>,
    indicator: Duration,
}

impl CodePreview {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            copied_at: None,
            indicator: COPIED_INDICATOR,
        }
    }

    /// Override how long the copied indicator stays up (builder).
    pub fn with_indicator(mut self, indicator: Duration) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replace the code. A changed code hides the copied indicator.
    pub fn set_code(&mut self, code: impl Into<String>) {
        let code = code.into();
        if code != self.code {
            self.code = code;
            self.copied_at = None;
        }
    }

    /// Write the code to `clipboard`.
    ///
    /// On success the indicator shows from `now` for the configured
    /// duration. On failure it stays hidden and the error is logged and
    /// returned; callers may ignore it.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<(), ClipboardError> {
        match clipboard.write_text(&self.code) {
            Ok(()) => {
                tracing::debug!(bytes = self.code.len(), "copied code to clipboard");
                self.copied_at = Some(now);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.copied_at = None;
                Err(err)
            }
        }
    }

    /// Whether the copied indicator is visible at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.indicator)
    }

    /// The copy button caption at `now`.
    pub fn caption(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "\u{2713} Copied!"
        } else {
            "Copy"
        }
    }

    /// Drop an expired indicator. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.copied_at.is_some() && !self.is_copied(now) {
            self.copied_at = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::clipboard::MemoryClipboard;

    // ── PropList ─────────────────────────────────────────────────────

    #[test]
    fn empty_prop_list() {
        assert_eq!(PropList::new("Text").finish(), "<Text />");
    }

    #[test]
    fn prop_forms_in_insertion_order() {
        let code = PropList::new("Button")
            .changed("variant", "danger", "primary")
            .flag("loading", true)
            .expr("tabIndex", 2)
            .optional("label", Some("Email"))
            .optional("helperText", None::<&str>)
            .finish();
        assert_eq!(code, r#"<Button variant="danger" loading tabIndex={2} label="Email" />"#);
    }

    #[test]
    fn defaults_are_omitted() {
        let code = PropList::new("Button")
            .changed("size", "md", "md")
            .flag("disabled", false)
            .finish();
        assert_eq!(code, "<Button />");
    }

    // ── CodePreview ──────────────────────────────────────────────────

    #[test]
    fn copied_indicator_expires() {
        let mut preview = CodePreview::new("<Button />");
        let mut clipboard = MemoryClipboard::new();
        let t0 = Instant::now();

        assert_eq!(preview.caption(t0), "Copy");
        preview.copy(&mut clipboard, t0).unwrap();
        assert_eq!(clipboard.contents(), Some("<Button />"));
        assert!(preview.is_copied(t0 + Duration::from_millis(1999)));
        assert!(!preview.is_copied(t0 + COPIED_INDICATOR));
        assert!(preview.tick(t0 + Duration::from_secs(3)));
        assert!(!preview.tick(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn failed_copy_keeps_indicator_hidden() {
        let mut preview = CodePreview::new("<Button />");
        let mut clipboard = MemoryClipboard::failing();
        let now = Instant::now();
        assert!(preview.copy(&mut clipboard, now).is_err());
        assert!(!preview.is_copied(now));
        assert_eq!(preview.caption(now), "Copy");
    }

    #[test]
    fn changing_code_hides_indicator() {
        let mut preview = CodePreview::new("a");
        let now = Instant::now();
        preview.copy(&mut MemoryClipboard::new(), now).unwrap();
        preview.set_code("a");
        assert!(preview.is_copied(now));
        preview.set_code("b");
        assert!(!preview.is_copied(now));
    }

    #[test]
    fn custom_indicator_duration() {
        let mut preview = CodePreview::new("x").with_indicator(Duration::from_millis(10));
        let now = Instant::now();
        preview.copy(&mut MemoryClipboard::new(), now).unwrap();
        assert!(!preview.is_copied(now + Duration::from_millis(10)));
    }
}
