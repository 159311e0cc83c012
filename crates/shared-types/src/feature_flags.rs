use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Fetch the signed-in user from the identity provider and pre-fill
    /// the wizard's identity step.
    #[serde(default)]
    pub identity: bool,
    /// After a successful blob upload, also register the bytes as a file
    /// asset in the content database.
    #[serde(default)]
    pub asset_registry: bool,
    #[serde(default)]
    pub telemetry: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.identity);
        assert!(!flags.asset_registry);
        assert!(!flags.telemetry);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            asset_registry = true
            "#,
        )
        .unwrap();
        assert!(config.features.asset_registry);
        assert!(!config.features.identity);
        assert!(!config.features.telemetry);
    }
}
