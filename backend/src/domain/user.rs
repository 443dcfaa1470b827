//! User identifiers and display identities.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyEmail,
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain a local part and a domain"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
///
/// The textual form is always the canonical lower-case hyphenated UUID, so
/// equality, hashing and ordering agree regardless of how the id was spelled
/// on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self::from_uuid(parsed))
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display identity resolved for a user by the identity provider.
///
/// ## Invariants
/// - `email` is non-blank and contains an `@` separating two non-empty parts.
/// - `full_name`, when present, is trimmed and non-blank.
///
/// # Examples
/// ```
/// use streakboard::domain::UserIdentity;
///
/// let identity = UserIdentity::new(None, "ada@example.com")?;
/// assert_eq!(identity.display_name(), "ada@example.com");
/// assert_eq!(identity.avatar_initial(), 'A');
/// # Ok::<(), streakboard::domain::UserValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    full_name: Option<String>,
    email: String,
}

impl UserIdentity {
    /// Validate and construct an identity.
    pub fn new(
        full_name: Option<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into().trim().to_owned();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(UserValidationError::InvalidEmail),
        }

        let full_name = full_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());

        Ok(Self { full_name, email })
    }

    /// Optional full name.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Contact email, used as the display fallback.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Name shown on leaderboards: the full name, else the email.
    pub fn display_name(&self) -> &str {
        self.full_name().unwrap_or(self.email.as_str())
    }

    /// Upper-cased first character of the display name, used for avatars.
    pub fn avatar_initial(&self) -> char {
        avatar_initial_of(self.display_name())
    }
}

/// Upper-cased first character of `name`, or `?` for an empty string.
pub(crate) fn avatar_initial_of(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}
