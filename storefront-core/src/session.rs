//! Typed session context and role gating.
//!
//! Replaces ad-hoc per-component session parsing with a single validated
//! object passed explicitly to every consumer. Role checks are expressed
//! on the [`Role`] enum rather than on account identifiers.

use thiserror::Error;

/// The account type carried on a session.
///
/// # Examples
/// ```
/// use storefront_core::Role;
///
/// assert_eq!(Role::Wholesaler.as_str(), "wholesaler");
/// assert_eq!(Role::Admin.to_string(), "admin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// Regular shopper.
    Customer,
    /// Shop owner selling at retail.
    Retailer,
    /// Bulk seller with its own dashboard.
    Wholesaler,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Return the role as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Retailer => "retailer",
            Self::Wholesaler => "wholesaler",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "retailer" => Ok(Self::Retailer),
            "wholesaler" => Ok(Self::Wholesaler),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("unknown role '{s}'")),
        }
    }
}

/// Errors returned by [`Session::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The user identifier was empty or whitespace.
    #[error("session requires a non-empty user id")]
    MissingUserId,
    /// The email address was empty or whitespace.
    #[error("session requires a non-empty email address")]
    MissingEmail,
}

/// A validated session context.
///
/// Constructed once after authentication and passed to every consumer
/// that gates on the account's role.
///
/// # Examples
/// ```
/// use storefront_core::{Role, Session};
///
/// # fn main() -> Result<(), storefront_core::SessionError> {
/// let session = Session::new("u-42", "owner@shop.test", Role::Retailer)?;
/// assert!(session.can_access_dashboard());
/// assert!(!session.can_access_wholesale_dashboard());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    user_id: String,
    email: String,
    role: Role,
}

impl Session {
    /// Validate and construct a session.
    ///
    /// # Errors
    /// Returns [`SessionError`] when the user id or email is empty or
    /// whitespace.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, SessionError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(SessionError::MissingUserId);
        }
        let email = email.into();
        if email.trim().is_empty() {
            return Err(SessionError::MissingEmail);
        }
        Ok(Self {
            user_id,
            email,
            role,
        })
    }

    /// The authenticated user's identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The authenticated user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The account's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Whether the account is a platform administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Whether the account sells on the platform in any capacity.
    #[must_use]
    pub const fn is_merchant(&self) -> bool {
        matches!(self.role, Role::Retailer | Role::Wholesaler | Role::Admin)
    }

    /// Whether the account may open the seller dashboard.
    #[must_use]
    pub const fn can_access_dashboard(&self) -> bool {
        matches!(self.role, Role::Retailer | Role::Admin)
    }

    /// Whether the account may open the wholesale dashboard.
    #[must_use]
    pub const fn can_access_wholesale_dashboard(&self) -> bool {
        matches!(self.role, Role::Wholesaler)
    }
}
