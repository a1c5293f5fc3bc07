use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lifecycle flag shared by every stored resource. Persisted as SMALLINT.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
}

impl Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            EntityStatus::Active => "active",
            EntityStatus::Inactive => "inactive",
        };
        write!(f, "{}", status)
    }
}

impl EntityStatus {
    pub fn as_i16(&self) -> i16 {
        match self {
            EntityStatus::Active => 1,
            EntityStatus::Inactive => 0,
        }
    }

    /// The column is constrained to 0 or 1; any other value reads as active.
    pub fn from_i16(value: i16) -> Self {
        match value {
            0 => EntityStatus::Inactive,
            _ => EntityStatus::Active,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            EntityStatus::Active => EntityStatus::Inactive,
            EntityStatus::Inactive => EntityStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EntityStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_original_status() {
        for status in [EntityStatus::Active, EntityStatus::Inactive] {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn column_values_round_trip() {
        assert_eq!(EntityStatus::from_i16(EntityStatus::Active.as_i16()), EntityStatus::Active);
        assert_eq!(EntityStatus::from_i16(EntityStatus::Inactive.as_i16()), EntityStatus::Inactive);
        assert_eq!(EntityStatus::from_i16(7), EntityStatus::Active);
    }

    #[test]
    fn serializes_as_uppercase_label() {
        let json = serde_json::to_string(&EntityStatus::Inactive).unwrap();
        assert_eq!(json, "\"INACTIVE\"");
        assert_eq!(EntityStatus::default(), EntityStatus::Active);
    }
}
