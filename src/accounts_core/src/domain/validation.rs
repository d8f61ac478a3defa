use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;

pub const BLANK: &str = "cannot be blank";
pub const NOT_ALPHANUMERIC: &str = "must contain English letters and digits only";
pub const NOT_EMAIL: &str = "must be a valid email address";

// Dot-atom local part, LDH domain labels.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Field name to reason, one reason per field.
///
/// Displays as `field: reason; field: reason.` with fields in lexicographic
/// order, which is the form clients see in the error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, reason: impl Into<String>) {
        self.0.insert(field, reason.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, reason)| (*field, reason.as_str()))
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, reason)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {reason}")?;
        }
        if !self.0.is_empty() {
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A single check on a string field. Rules of a field run in order and the
/// first failure is the field's reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Length(usize, usize),
    Alphanumeric,
    Email,
}

impl Rule {
    /// Reason reported when this rule fails.
    pub fn reason(self) -> String {
        match self {
            Rule::Required => BLANK.to_string(),
            Rule::Length(min, max) => format!("the length must be between {min} and {max}"),
            Rule::Alphanumeric => NOT_ALPHANUMERIC.to_string(),
            Rule::Email => NOT_EMAIL.to_string(),
        }
    }

    /// Returns the failure reason, if any. Empty values only fail `Required`.
    pub fn check(self, value: &str) -> Option<String> {
        let passes = match self {
            Rule::Required => !value.is_empty(),
            _ if value.is_empty() => true,
            Rule::Length(min, max) => (min..=max).contains(&value.chars().count()),
            Rule::Alphanumeric => value.chars().all(|c| c.is_ascii_alphanumeric()),
            Rule::Email => EMAIL.is_match(value),
        };
        (!passes).then(|| self.reason())
    }
}

pub(crate) fn check_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    rules: &[Rule],
) {
    if let Some(reason) = rules.iter().find_map(|rule| rule.check(value)) {
        errors.insert(field, reason);
    }
}

pub const USERNAME_LENGTH: Rule = Rule::Length(3, 20);
pub const PASSWORD_LENGTH: Rule = Rule::Length(6, 24);
