// src/domain/provision/credential.rs

use std::fmt;

const REDACTED: &str = "********";

/// A value that must never reach a log line or a terminal.
/// `Debug` and `Display` both print a fixed mask; use [`Secret::expose`]
/// at the single point where the raw value is placed on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn redacted() -> &'static str {
        REDACTED
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Per-run credentials: bearer token for every call, database password for
/// the source profile body only.
#[derive(Debug, Clone)]
pub struct Credential {
    token: Secret,
    db_password: Secret,
}

impl Credential {
    pub fn new(token: Secret, db_password: Secret) -> Self {
        Self { token, db_password }
    }

    /// Token only, for calls that never touch the source profile.
    pub fn token_only(token: Secret) -> Self {
        Self {
            token,
            db_password: Secret::new(""),
        }
    }

    /// Value of the `Authorization` header. Tokens pasted with their
    /// `Bearer ` prefix are kept as is.
    pub fn authorization_header(&self) -> String {
        let raw = self.token.expose().trim();
        if raw
            .get(..7)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("bearer "))
        {
            raw.to_string()
        } else {
            format!("Bearer {}", raw)
        }
    }

    pub fn db_password(&self) -> &Secret {
        &self.db_password
    }
}
