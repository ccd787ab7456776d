//! Account roles and the role-intersection rule used by route guards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Demo,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Demo];

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role names outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "demo" => Ok(Self::Demo),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// True when `granted` shares at least one role with `required`.
///
/// An empty `required` set admits nobody.
pub fn roles_intersect(granted: &[Role], required: &[Role]) -> bool {
    required.iter().any(|role| granted.contains(role))
}

/// Sort and deduplicate a role list.
pub fn normalize_roles(mut roles: Vec<Role>) -> Vec<Role> {
    roles.sort();
    roles.dedup();
    roles
}

/// Parse stored role names, rejecting anything outside the enumeration.
pub fn parse_roles<I, S>(names: I) -> Result<Vec<Role>, UnknownRole>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().parse())
        .collect::<Result<Vec<_>, _>>()
        .map(normalize_roles)
}
