//! Field-level validation for student drafts.
//!
//! [`validate`] is pure: it looks only at the trimmed values of the draft and
//! returns one message per offending field. An empty [`FieldErrors`] means the
//! draft may be persisted.
//!
//! [`filter_phone_input`] is the keystroke filter that sits in front of the
//! validator. It is not part of validation: it decides what the phone field is
//! allowed to contain while the user types.

use crate::model::StudentDraft;
use std::collections::BTreeMap;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email (must contain \"@\" and \".\").";
pub const PHONE_REQUIRED: &str = "Phone number is required.";
pub const PHONE_INVALID: &str = "Phone must be exactly 10 digits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of field to error message, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

pub fn validate(draft: &StudentDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = draft.name.trim();
    let email = draft.email.trim();
    let phone = draft.phone.trim();

    if name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !email.contains('@') || !email.contains('.') {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if phone.is_empty() {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    } else if !is_ten_digits(phone) {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    errors
}

fn is_ten_digits(s: &str) -> bool {
    s.len() == PHONE_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

/// Applies the phone keystroke policy: a proposed value with any non-digit is
/// refused and `previous` is kept; otherwise the value is cut to 10 digits.
pub fn filter_phone_input(previous: &str, proposed: &str) -> String {
    if !proposed.chars().all(|c| c.is_ascii_digit()) {
        return previous.to_string();
    }
    proposed.chars().take(PHONE_DIGITS).collect()
}
