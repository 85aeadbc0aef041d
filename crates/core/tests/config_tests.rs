// ═══════════════════════════════════════════════════════════════════
// Config Tests — defaults, TOML parsing, overrides, validation
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;
use std::io::Write;

use tempfile::NamedTempFile;

use trading_journal_core::config::{
    JournalConfig, LogFormat, ENV_API_URL, ENV_LOG_LEVEL, ENV_TIMEOUT_SECS,
};
use trading_journal_core::errors::JournalError;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ── Defaults & parsing ──────────────────────────────────────────────

mod parsing {
    use super::*;

    #[test]
    fn defaults_point_at_local_api() {
        let config = JournalConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config = JournalConfig::from_toml_str("").unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = JournalConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://journal.example.com/api/"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://journal.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = JournalConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }
}

// ── Validation ──────────────────────────────────────────────────────

mod validation {
    use super::*;

    #[test]
    fn base_url_needs_http_scheme() {
        let err =
            JournalConfig::from_toml_str("[api]\nbase_url = \"localhost:8000/api\"\n").unwrap_err();
        match err {
            JournalError::Config(msg) => assert!(msg.contains("base_url")),
            other => panic!("Expected Config, got {:?}", other),
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = JournalConfig::from_toml_str("[api]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }

    #[test]
    fn blank_log_level_is_rejected() {
        let err = JournalConfig::from_toml_str("[logging]\nlevel = \"  \"\n").unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }
}

// ── Overrides ───────────────────────────────────────────────────────

mod overrides {
    use super::*;

    #[test]
    fn lookup_values_replace_file_values() {
        let mut config = JournalConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (ENV_API_URL, "http://10.0.0.5:9000/api/"),
                (ENV_TIMEOUT_SECS, " 5 "),
                (ENV_LOG_LEVEL, "debug"),
            ]))
            .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_keys_leave_config_alone() {
        let mut config = JournalConfig::default();
        config.apply_overrides(lookup_from(&[])).unwrap();
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn non_numeric_timeout_is_a_config_error() {
        let mut config = JournalConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        match err {
            JournalError::Config(msg) => assert!(msg.contains(ENV_TIMEOUT_SECS)),
            other => panic!("Expected Config, got {:?}", other),
        }
    }

    #[test]
    fn overridden_url_is_validated() {
        let mut config = JournalConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_API_URL, "ftp://files")]))
            .unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }
}

// ── Files ───────────────────────────────────────────────────────────

mod files {
    use super::*;

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 12\n\n[logging]\nlevel = \"warn\"").unwrap();

        let config = JournalConfig::load(file.path()).unwrap();
        assert_eq!(config.api.timeout_secs, 12);
        // The level may be overridden by the environment of the test run.
        assert!(!config.logging.level.is_empty());
    }

    #[test]
    fn missing_file_is_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JournalConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, JournalError::FileIO(_)));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url =").unwrap();
        let err = JournalConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }
}
