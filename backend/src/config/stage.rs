use std::fmt;

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Local,
    Development,
    Production,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Stage::Local => "local",
            Stage::Development => "development",
            Stage::Production => "production",
        };
        write!(f, "{}", stage)
    }
}

impl TryFrom<&String> for Stage {
    type Error = anyhow::Error;

    fn try_from(stage: &String) -> Result<Self> {
        match stage.trim().to_lowercase().as_str() {
            "local" => Ok(Stage::Local),
            "development" | "dev" => Ok(Stage::Development),
            "production" | "prod" => Ok(Stage::Production),
            other => bail!("unknown stage: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stages_case_insensitively() {
        assert_eq!(
            Stage::try_from(&"Production".to_string()).unwrap(),
            Stage::Production
        );
        assert_eq!(
            Stage::try_from(&" dev ".to_string()).unwrap(),
            Stage::Development
        );
        assert_eq!(Stage::try_from(&"local".to_string()).unwrap(), Stage::Local);
    }

    #[test]
    fn unknown_stage_is_rejected() {
        assert!(Stage::try_from(&"staging".to_string()).is_err());
        assert_eq!(
            Stage::try_from(&String::new()).unwrap_or_default(),
            Stage::Local
        );
    }
}
