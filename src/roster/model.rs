use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender `{}` (expected male|female)", other)),
        }
    }
}

/// A persisted student. The `id` doubles as the creation time in epoch millis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub gender: Gender,
}

impl StudentRecord {
    pub fn from_draft(id: i64, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            gender: draft.gender,
        }
    }

    /// Creation time recovered from the id. Falls back to the epoch for ids
    /// that are not plausible millisecond timestamps.
    pub fn created_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.id)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn apply(&mut self, draft: StudentDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.gender = draft.gender;
    }
}

/// Form input for creating or editing a student. Values are raw until
/// [`StudentDraft::trimmed`] is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            gender,
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            gender: self.gender,
        }
    }

    /// Overlays the fields that are set in `patch`.
    pub fn merge(mut self, patch: StudentPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        self
    }
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            gender: record.gender,
        }
    }
}

/// Partial edit input; unset fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.gender.is_none()
    }
}
