//! Access-control roles.
//!
//! Roles arrive from the backend as free-form tags (`usuarios_sistema.Rol`,
//! default `"Recepcionista"`). They are parsed into a closed enum and
//! compared through an explicit equivalence class instead of inline string
//! checks.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// A role tag carried by both users and route descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Doctor,
    Recepcionista,
    /// Legacy tag still present on older accounts; access-equivalent to
    /// `Recepcionista`.
    User,
    /// Any tag the client does not know; compares literally.
    Otro(String),
}

/// Equivalence class used for access comparison.
///
/// `User` and `Recepcionista` collapse into `FrontDesk`; every other tag is
/// its own class. Some routes still list both collapsed tags in their
/// allowed set, which is redundant under this mapping — kept as-is pending
/// domain-owner review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessClass {
    Admin,
    Doctor,
    FrontDesk,
    Otro(String),
}

impl Role {
    /// Parse a raw role tag. Unknown tags are preserved verbatim.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Admin" => Self::Admin,
            "Doctor" => Self::Doctor,
            "Recepcionista" => Self::Recepcionista,
            "User" => Self::User,
            other => Self::Otro(other.to_owned()),
        }
    }

    /// The raw tag as the backend spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Doctor => "Doctor",
            Self::Recepcionista => "Recepcionista",
            Self::User => "User",
            Self::Otro(tag) => tag,
        }
    }

    /// Map this role to its access-comparison class.
    #[must_use]
    pub fn access_class(&self) -> AccessClass {
        match self {
            Self::Admin => AccessClass::Admin,
            Self::Doctor => AccessClass::Doctor,
            Self::Recepcionista | Self::User => AccessClass::FrontDesk,
            Self::Otro(tag) => AccessClass::Otro(tag.clone()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
