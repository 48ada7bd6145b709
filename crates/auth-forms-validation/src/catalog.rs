//! Rule catalog for the login/registration fields
//!
//! Each known field maps to a fixed, ordered slice of [`Rule`]s. The slices are
//! static and never mutated; binding one to a value yields [`FieldRules`], which
//! evaluates front-to-back and stops at the first rule that fails.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const USERNAME_MIN_LENGTH: usize = 6;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters accepted by the password special-character rule
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static USERNAME_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("username pattern compiles"));

// Unanchored at the start: only the trailing ".tld" is checked here.
static EMAIL_DOMAIN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[a-zA-Z]{2,}$").expect("domain suffix pattern compiles"));

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Identifier of a field the catalog has rules for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Username,
    Email,
    Password,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Username, FieldId::Email, FieldId::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Username => "username",
            FieldId::Email => "email",
            FieldId::Password => "password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the input element id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(FieldId::Username),
            "email" => Ok(FieldId::Email),
            "password" => Ok(FieldId::Password),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// A predicate over a field value paired with the message shown when it fails
#[derive(Clone, Copy)]
pub struct Rule {
    pub predicate: fn(&str) -> bool,
    pub message: &'static str,
}

impl Rule {
    /// Returns true when `value` satisfies this rule
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

/// The ordered rules of one field, bound to the value under test
#[derive(Debug, Clone, Copy)]
pub struct FieldRules<'a> {
    field: FieldId,
    value: &'a str,
    rules: &'static [Rule],
}

impl FieldRules<'_> {
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// First rule the value does not satisfy, or `None` if every rule passes.
    ///
    /// Rules after the first failure are never evaluated.
    pub fn first_failure(&self) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| {
            let passed = rule.check(self.value);
            tracing::trace!(field = %self.field, rule = rule.message, passed, "evaluated rule");
            !passed
        })
    }
}

/// Static mapping from [`FieldId`] to its rule list
pub struct RuleCatalog;

impl RuleCatalog {
    /// Rules for `field`, bound to `value`
    ///
    /// # Examples
    /// ```
    /// use auth_forms_validation::{FieldId, RuleCatalog};
    /// let rules = RuleCatalog::rules_for(FieldId::Username, "ab");
    /// assert_eq!(rules.rules().len(), 3);
    /// assert_eq!(
    ///     rules.first_failure().map(|r| r.message),
    ///     Some("Username must be at least 6 characters long")
    /// );
    /// ```
    pub fn rules_for(field: FieldId, value: &str) -> FieldRules<'_> {
        let rules: &'static [Rule] = match field {
            FieldId::Username => &USERNAME_RULES,
            FieldId::Email => &EMAIL_RULES,
            FieldId::Password => &PASSWORD_RULES,
        };
        FieldRules { field, value, rules }
    }

    /// Resolve an input id to a known field, `None` if the catalog has no rules for it
    pub fn lookup(id: &str) -> Option<FieldId> {
        id.parse().ok()
    }

    pub fn contains(id: &str) -> bool {
        Self::lookup(id).is_some()
    }
}

static USERNAME_RULES: [Rule; 3] = [
    Rule {
        predicate: is_present,
        message: "Username is required",
    },
    Rule {
        predicate: has_username_length,
        message: "Username must be at least 6 characters long",
    },
    Rule {
        predicate: is_alphanumeric,
        message: "Username must contain only letters and numbers",
    },
];

static EMAIL_RULES: [Rule; 4] = [
    Rule {
        predicate: is_present,
        message: "Email is required",
    },
    Rule {
        predicate: has_at_sign,
        message: "Email must contain an @ symbol",
    },
    Rule {
        predicate: has_domain_suffix,
        message: "Email must contain a valid domain",
    },
    Rule {
        predicate: is_email_address,
        message: "Email must be valid",
    },
];

static PASSWORD_RULES: [Rule; 4] = [
    Rule {
        predicate: is_present,
        message: "Password is required",
    },
    Rule {
        predicate: has_password_length,
        message: "Password must be at least 8 characters long",
    },
    Rule {
        predicate: has_digit,
        message: "Password must contain at least one number",
    },
    Rule {
        predicate: has_special_character,
        message: "It must contain at least one special character",
    },
];

/// Length as a browser reports it (UTF-16 code units)
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_username_length(value: &str) -> bool {
    input_length(value) >= USERNAME_MIN_LENGTH
}

fn is_alphanumeric(value: &str) -> bool {
    USERNAME_CHARSET.is_match(value)
}

fn has_at_sign(value: &str) -> bool {
    value.contains('@')
}

fn has_domain_suffix(value: &str) -> bool {
    EMAIL_DOMAIN_SUFFIX.is_match(value)
}

fn is_email_address(value: &str) -> bool {
    EMAIL_ADDRESS.is_match(value)
}

fn has_password_length(value: &str) -> bool {
    input_length(value) >= PASSWORD_MIN_LENGTH
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn has_special_character(value: &str) -> bool {
    value.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}
