//! User role

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role. Every authorization decision matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Landlord,
    #[default]
    User,
}

impl Role {
    /// Persisted / wire name of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Landlord => "landlord",
            Self::User => "user",
        }
    }

    /// Roles a user may pick for themselves at registration
    pub const fn is_self_assignable(self) -> bool {
        match self {
            Self::Admin => false,
            Self::Landlord | Self::User => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "landlord" => Ok(Self::Landlord),
            "user" => Ok(Self::User),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}
