use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        };
        write!(f, "{}", role)
    }
}

impl UserRole {
    pub fn from_str(value: &str) -> Self {
        match value {
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}
