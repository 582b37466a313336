use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RimCheckConfig {
    /// Default output format for the CLI ("text" or "json").
    pub format: Option<String>,
    pub validate: Option<ValidateCfg>,
    pub schema: Option<SchemaCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateCfg {
    /// Exit with an error when a document is invalid.
    pub strict: Option<bool>,
    /// User-known tags the unknown-tag walk should accept.
    pub extra_tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaCfg {
    pub out_dir: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Other(String),
}

/// Search order: CWD/rimcheck.toml, then $CONFIG_DIR/rimcheck/rimcheck.toml.
/// Earlier files win field by field.
pub fn load_config() -> Result<RimCheckConfig, ConfigError> {
    let mut merged = RimCheckConfig::default();
    if let Ok(p) = std::env::current_dir() {
        let path = p.join("rimcheck.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<RimCheckConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    if let Some(base) = dirs::config_dir() {
        let path = base.join("rimcheck").join("rimcheck.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<RimCheckConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    Ok(merged)
}

fn merge(mut a: RimCheckConfig, b: RimCheckConfig) -> RimCheckConfig {
    if a.format.is_none() {
        a.format = b.format;
    }
    a.validate = merge_opt(a.validate, b.validate, merge_validate);
    a.schema = merge_opt(a.schema, b.schema, merge_schema);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_validate(mut a: ValidateCfg, b: ValidateCfg) -> ValidateCfg {
    if a.strict.is_none() {
        a.strict = b.strict;
    }
    if a.extra_tags.is_none() {
        a.extra_tags = b.extra_tags;
    }
    a
}

fn merge_schema(mut a: SchemaCfg, b: SchemaCfg) -> SchemaCfg {
    if a.out_dir.is_none() {
        a.out_dir = b.out_dir;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cwd_config_wins_over_user_config() {
        let cwd: RimCheckConfig = toml::from_str(
            "format = \"json\"\n[validate]\nstrict = true\n",
        )
        .unwrap();
        let user: RimCheckConfig = toml::from_str(
            "format = \"text\"\n[validate]\nextra_tags = [\"customThing\"]\n",
        )
        .unwrap();
        let merged = merge(cwd, user);
        assert_eq!(merged.format.as_deref(), Some("json"));
        let v = merged.validate.unwrap();
        assert_eq!(v.strict, Some(true));
        assert_eq!(v.extra_tags, Some(vec!["customThing".to_string()]));
    }
}
