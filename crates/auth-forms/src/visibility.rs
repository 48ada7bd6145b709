// File: src/visibility.rs
// Purpose: Password show/hide toggle state

/// Whether a password input shows its characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Visible,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) {
        *self = match self {
            PasswordVisibility::Masked => PasswordVisibility::Visible,
            PasswordVisibility::Visible => PasswordVisibility::Masked,
        };
    }

    /// Value for the input's `type` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Visible => "text",
        }
    }

    /// Icon class for the eye button
    pub fn icon_class(&self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "fa-eye",
            PasswordVisibility::Visible => "fa-eye-slash",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, PasswordVisibility::Visible)
    }
}
