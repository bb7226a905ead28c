//! Form text field with input-type validation.
//!
//! [`TextFieldController`] holds the text and editing state of one field and
//! decides what the surface shows around it: the underline state, the
//! trailing accessory and whether input is masked. Email fields are checked
//! against [`EMAIL_PATTERN`] when editing ends; password fields only need to
//! be non-empty. Multiline fields never edit in place, a tap is handed to the
//! delegate instead.

use std::ops::Range;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::traits::TextFieldDelegate;

/// Accepted email addresses. The whole text must match.
pub const EMAIL_PATTERN: &str = r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex pattern"));

/// Kind of input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Normal,
    Email,
    Password,
    /// Opens a separate editor instead of editing inline
    Multiline,
}

impl InputType {
    /// Whether the text is masked by default.
    pub fn is_secure(&self) -> bool {
        matches!(self, InputType::Password)
    }

    pub fn accessory(&self) -> Accessory {
        match self {
            InputType::Password => Accessory::RevealPassword,
            InputType::Multiline => Accessory::MultilineDisclosure,
            InputType::Normal | InputType::Email => Accessory::ClearButton,
        }
    }
}

/// Button shown at the trailing edge of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessory {
    /// Eye button toggling masked input, always shown
    RevealPassword,
    /// Disclosure button opening the multiline editor, always shown
    MultilineDisclosure,
    /// Clears the text, shown only while editing
    ClearButton,
}

/// State of the line under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    Inactive,
    Active,
    /// Editing ended on an email the field rejects
    Invalid,
}

pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

pub fn is_valid_password(text: &str) -> bool {
    !text.is_empty()
}

/// Headless controller for one form text field.
pub struct TextFieldController {
    input_type: InputType,
    placeholder: String,
    help_text: Option<String>,
    text: String,
    editing: bool,
    password_revealed: bool,
    underline: Underline,
    delegate: Option<Arc<dyn TextFieldDelegate>>,
}

impl TextFieldController {
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            placeholder: String::new(),
            help_text: None,
            text: String::new(),
            editing: false,
            password_revealed: false,
            underline: Underline::Inactive,
            delegate: None,
        }
    }

    pub fn with_delegate(mut self, delegate: Arc<dyn TextFieldDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Placeholder text, also used as the field's title and accessibility label.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    pub fn set_help_text(&mut self, help_text: Option<String>) {
        self.help_text = help_text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text without notifying the delegate.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn underline(&self) -> Underline {
        self.underline
    }

    /// Whether the current text is acceptable for the input type.
    pub fn is_valid(&self) -> bool {
        match self.input_type {
            InputType::Email => is_valid_email(&self.text),
            InputType::Password => is_valid_password(&self.text),
            InputType::Normal | InputType::Multiline => true,
        }
    }

    /// Whether the surface should mask the text right now.
    pub fn is_secure_entry(&self) -> bool {
        self.input_type.is_secure() && !self.password_revealed
    }

    pub fn accessory(&self) -> Accessory {
        self.input_type.accessory()
    }

    pub fn is_accessory_visible(&self) -> bool {
        match self.accessory() {
            Accessory::ClearButton => self.editing,
            Accessory::RevealPassword | Accessory::MultilineDisclosure => true,
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// The field was tapped. Returns true if inline editing began.
    ///
    /// Multiline fields hand the tap to the delegate and never edit inline.
    pub fn focus(&mut self) -> bool {
        if self.input_type == InputType::Multiline {
            if let Some(delegate) = &self.delegate {
                delegate.did_tap_multiline_action();
            }
            return false;
        }
        if !self.editing {
            self.editing = true;
            self.underline = Underline::Active;
            if let Some(delegate) = &self.delegate {
                delegate.did_begin_editing();
            }
        }
        true
    }

    /// Replace the byte range `range` with `replacement`, if the delegate
    /// allows it. Returns true if the text changed.
    pub fn replace_text(&mut self, range: Range<usize>, replacement: &str) -> bool {
        let in_bounds = range.start <= range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end);
        if !in_bounds {
            tracing::warn!(
                start = range.start,
                end = range.end,
                len = self.text.len(),
                "Ignoring text edit outside the field's text"
            );
            return false;
        }

        if let Some(delegate) = &self.delegate {
            if !delegate.should_change_text(range.clone(), replacement) {
                return false;
            }
        }

        self.text.replace_range(range, replacement);
        self.notify_changed();
        true
    }

    /// Append typed text at the end.
    pub fn insert_text(&mut self, typed: &str) -> bool {
        let end = self.text.len();
        self.replace_text(end..end, typed)
    }

    /// Clear button tapped.
    pub fn clear(&mut self) {
        self.text.clear();
        self.notify_changed();
    }

    /// Eye button tapped on a password field. Returns whether the text is
    /// now masked. Editing begins if it had not.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if self.input_type.is_secure() {
            self.password_revealed = !self.password_revealed;
            self.focus();
        }
        self.is_secure_entry()
    }

    /// Disclosure button tapped on a multiline field.
    pub fn select_multiline_disclosure(&self) {
        if let Some(delegate) = &self.delegate {
            delegate.did_tap_multiline_action();
        }
    }

    /// Return key pressed. Returns whether the keyboard should go away.
    pub fn should_return(&self) -> bool {
        self.delegate
            .as_ref()
            .map(|d| d.should_return())
            .unwrap_or(true)
    }

    /// Editing ended. A non-empty email the field rejects marks the
    /// underline invalid.
    pub fn end_editing(&mut self) {
        self.editing = false;
        if let Some(delegate) = &self.delegate {
            delegate.did_end_editing(&self.text);
        }

        let rejected_email = self.input_type == InputType::Email
            && !self.text.is_empty()
            && !is_valid_email(&self.text);
        self.underline = if rejected_email {
            tracing::debug!("Email field ended with an invalid address");
            Underline::Invalid
        } else {
            Underline::Inactive
        };
    }

    fn notify_changed(&self) {
        if let Some(delegate) = &self.delegate {
            delegate.did_change_text(&self.text);
        }
    }
}
