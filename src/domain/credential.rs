//! Bearer credential sent with every analytics request.

use std::fmt;

/// Access token identifying the authenticated user.
///
/// `Debug` never prints the secret so the token can travel through traced
/// spans and error messages safely.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub const MASK_ALL_UP_TO: usize = 8;

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Loggable form of the token.
    ///
    /// Tokens of up to [`Self::MASK_ALL_UP_TO`] characters are hidden entirely;
    /// longer ones keep their first four characters.
    pub fn masked(&self) -> String {
        if self.0.chars().count() <= Self::MASK_ALL_UP_TO {
            return "***".to_string();
        }
        let prefix: String = self.0.chars().take(4).collect();
        format!("{prefix}***")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.masked()).finish()
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
