use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::commerce::{Cart, Order};
use super::ids::{AddressId, UserId};
use super::review::Review;
use crate::Error;

/// Storefront customer account as returned by the backend.
///
/// The password hash is accepted on input so that admin exports can be read
/// back, but it is never written out again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub carts: Vec<Cart>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub created_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub street: String,
    pub city: String,
    pub zipcode: String,
    pub country: String,
    pub created_at: String,
}

impl Address {
    /// Single-line postal form: "street, zipcode city, country"
    pub fn one_line(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.street, self.zipcode, self.city, self.country
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Client,
}

impl UserRole {
    /// Spring-style authority string carried in JWT role claims
    pub fn authority(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "ROLE_SUPER_ADMIN",
            UserRole::Admin => "ROLE_ADMIN",
            UserRole::Client => "ROLE_CLIENT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Administrator",
            UserRole::Admin => "Administrator",
            UserRole::Client => "Client",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Accès complet au système",
            UserRole::Admin => "Gestion des utilisateurs et produits",
            UserRole::Client => "Accès aux fonctionnalités client",
        }
    }
}

impl FromStr for UserRole {
    type Err = Error;

    /// Accepts both the bare role name and its `ROLE_` authority form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            "ADMIN" => Ok(UserRole::Admin),
            "CLIENT" => Ok(UserRole::Client),
            _ => Err(Error::UnknownVariant {
                kind: "user role",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Actif",
            UserStatus::Inactive => "Inactif",
            UserStatus::Suspended => "Suspendu",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
        }
    }
}

impl FromStr for UserStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(UserStatus::Active),
            "INACTIVE" => Ok(UserStatus::Inactive),
            "SUSPENDED" => Ok(UserStatus::Suspended),
            _ => Err(Error::UnknownVariant {
                kind: "user status",
                value: s.to_string(),
            }),
        }
    }
}
