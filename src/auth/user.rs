//! The signed-in identity.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The only email address accepted at log-in.
pub const DEMO_EMAIL: &str = "demo@example.com";
/// The only password accepted at log-in.
pub const DEMO_PASSWORD: &str = "password";

const DEMO_USER_ID: &str = "user1";
const DEMO_USER_NAME: &str = "Demo User";

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Every account shares the demo account's id.
    pub id: String,
    /// The display name shown in the navigation bar.
    pub name: String,
    /// The address used to log in.
    pub email: String,
    /// A generated image with the user's initials.
    pub avatar_url: Option<String>,
}

impl User {
    /// The identity every successful log-in resolves to.
    pub fn demo() -> Self {
        Self {
            id: DEMO_USER_ID.to_owned(),
            name: DEMO_USER_NAME.to_owned(),
            email: DEMO_EMAIL.to_owned(),
            avatar_url: Some(avatar_url(DEMO_USER_NAME)),
        }
    }

    /// Build the identity for a new account from the sign-up form.
    ///
    /// Only the name is checked; the email is taken as given.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::EmptyName] if `name` is blank.
    pub fn from_sign_up(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            id: DEMO_USER_ID.to_owned(),
            name: name.to_owned(),
            email: email.trim().to_owned(),
            avatar_url: Some(avatar_url(name)),
        })
    }
}

/// A generated avatar showing the initials of `name`.
pub fn avatar_url(name: &str) -> String {
    let query = serde_urlencoded::to_string([
        ("name", name),
        ("background", "0D8ABC"),
        ("color", "fff"),
    ])
    .unwrap_or_default();

    format!("https://ui-avatars.com/api/?{query}")
}
