use std::fmt::Display;

use anyhow::{Result, anyhow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Local,
    Development,
    Production,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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

    fn try_from(value: &String) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Stage::Local),
            "development" | "dev" => Ok(Stage::Development),
            "production" | "prod" => Ok(Stage::Production),
            other => Err(anyhow!("unknown stage: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stages_case_insensitively() {
        assert_eq!(Stage::try_from(&"PROD".to_string()).unwrap(), Stage::Production);
        assert_eq!(Stage::try_from(&" dev ".to_string()).unwrap(), Stage::Development);
        assert_eq!(Stage::try_from(&"local".to_string()).unwrap(), Stage::Local);
    }

    #[test]
    fn unknown_stage_falls_back_to_default_at_call_site() {
        let stage = Stage::try_from(&"staging-eu".to_string()).unwrap_or_default();
        assert_eq!(stage, Stage::Local);
    }
}
