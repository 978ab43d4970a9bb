use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub favorite_color: String,
    pub joined_date: NaiveDate,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        favorite_color: impl Into<String>,
        joined_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            favorite_color: favorite_color.into(),
            joined_date,
        }
    }
}

/// What registering a user under an already-taken name does.
///
/// Users are keyed by name only. With `Alias` the newcomer is appended to the
/// roster and the shared trip list is reset to empty, so earlier trips under
/// that name are dropped. `Reject` refuses the second registration instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateUserPolicy {
    #[default]
    Alias,
    Reject,
}

impl DuplicateUserPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateUserPolicy::Alias => "alias",
            DuplicateUserPolicy::Reject => "reject",
        }
    }
}

impl std::fmt::Display for DuplicateUserPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
