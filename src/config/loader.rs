//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CdaConfig;
use crate::domain::context::ResultExt;
use crate::domain::errors::CdaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "pcehr-cda.toml";

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern compiles")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CdaConfig
/// 4. Applies environment variable overrides (PCEHR_CDA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use pcehr_cda::config::loader::load_config;
///
/// let config = load_config("pcehr-cda.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CdaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CdaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CdaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents).with_context(|| format!("Invalid configuration file {}", path.display()))
}

/// Loads `path` if given, else the default file if it exists, else defaults
///
/// Environment overrides apply in every case.
pub fn load_config_or_default(path: Option<&Path>) -> Result<CdaConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            let mut config = CdaConfig::default();
            apply_env_overrides(&mut config);
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Parses configuration text as if it had been read from a file
pub fn parse_config(contents: &str) -> Result<CdaConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: CdaConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config);
    validate(&config)?;

    Ok(config)
}

fn validate(config: &CdaConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| CdaError::Configuration(format!("Configuration validation failed: {}", e)))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CdaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PCEHR_CDA_* prefix
///
/// Environment variables follow the pattern: PCEHR_CDA_<SECTION>_<KEY>,
/// for example PCEHR_CDA_GENERATOR_NARRATIVE_MODE. Unparseable numeric and
/// boolean values are ignored.
fn apply_env_overrides(config: &mut CdaConfig) {
    if let Ok(val) = std::env::var("PCEHR_CDA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("PCEHR_CDA_GENERATOR_NARRATIVE_MODE") {
        config.generator.narrative_mode = val;
    }
    if let Some(val) = parsed_env("PCEHR_CDA_GENERATOR_XML_DECLARATION") {
        config.generator.xml_declaration = val;
    }
    if let Some(val) = parsed_env("PCEHR_CDA_GENERATOR_INDENT") {
        config.generator.indent = val;
    }
    if let Some(val) = parsed_env("PCEHR_CDA_GENERATOR_FAIL_ON_VALIDATION_ERRORS") {
        config.generator.fail_on_validation_errors = val;
    }

    if let Some(val) = parsed_env("PCEHR_CDA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val;
    }
    if let Ok(val) = std::env::var("PCEHR_CDA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PCEHR_CDA_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

fn parsed_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PCEHR_CDA_TEST_LOG_DIR", "/tmp/cda-logs");
        let input = "local_path = \"${PCEHR_CDA_TEST_LOG_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "local_path = \"/tmp/cda-logs\"\n");
        std::env::remove_var("PCEHR_CDA_TEST_LOG_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("PCEHR_CDA_TEST_MISSING");
        let input = "local_path = \"${PCEHR_CDA_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("PCEHR_CDA_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("PCEHR_CDA_TEST_COMMENTED");
        let input = "# local_path = \"${PCEHR_CDA_TEST_COMMENTED}\"";
        assert_eq!(substitute_env_vars(input).unwrap(), format!("{input}\n"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(CdaError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[generator]
narrative_mode = "empty"
xml_declaration = false
indent = 4

[logging]
local_enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.generator.narrative_mode, "empty");
        assert!(!config.generator.xml_declaration);
        assert_eq!(config.generator.indent, 4);
    }

    #[test]
    fn test_parse_config_rejects_invalid_values() {
        let err = parse_config("[generator]\nindent = 12\n").unwrap_err();
        assert!(err.to_string().contains("generator.indent"));
    }

    #[test]
    fn test_parse_config_reports_toml_errors() {
        let err = parse_config("[generator\n").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
