//! Tests for gateway option merging.

use crate::gateway::GatewayError;
use crate::gateway::options::key;

use super::*;

mod flags {
    use super::*;

    #[test]
    fn dedicated_flags_become_options() {
        let cli = cli(&[
            "--to",
            "k",
            "-m",
            "x",
            "--event-type",
            "acknowledge",
            "--client",
            "nagios",
            "--client-url",
            "https://nagios.example.com",
            "--details",
            r#"{"host":"db1"}"#,
        ]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.options.get(key::EVENT_TYPE), Some("acknowledge"));
        assert_eq!(config.options.get(key::CLIENT), Some("nagios"));
        assert_eq!(
            config.options.get(key::CLIENT_URL),
            Some("https://nagios.example.com")
        );
        assert_eq!(config.options.get(key::DETAILS), Some(r#"{"host":"db1"}"#));
    }

    #[test]
    fn token_flag_is_not_an_option() {
        let cli = cli(&["--to", "k", "-m", "x", "--token", "T2"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert!(!config.options.contains(key::TOKEN));
    }

    #[test]
    fn dedicated_flag_beats_generic_option() {
        let cli = cli(&[
            "--to",
            "k",
            "-m",
            "x",
            "--option",
            "client=zabbix",
            "--client",
            "nagios",
        ]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.options.get(key::CLIENT), Some("nagios"));
    }
}

mod generic_options {
    use super::*;

    #[test]
    fn option_value_may_contain_equals() {
        let cli = cli(&["--to", "k", "-m", "x", "--option", "details=a=b"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.options.get(key::DETAILS), Some("a=b"));
    }

    #[test]
    fn option_with_empty_value_is_kept() {
        let cli = cli(&["--to", "k", "-m", "x", "--option", "token="]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.options.get(key::TOKEN), Some(""));
    }

    #[test]
    fn option_without_equals_is_rejected() {
        let cli = cli(&["--to", "k", "-m", "x", "--option", "client"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }

    #[test]
    fn option_without_key_is_rejected() {
        let cli = cli(&["--to", "k", "-m", "x", "--option", "=value"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }

    #[test]
    fn unknown_event_type_option_is_rejected() {
        let cli = cli(&["--to", "k", "-m", "x", "--option", "event_type=page"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEventType(GatewayError::InvalidEventType(ref v))) if v == "page"
        ));
    }

    #[test]
    fn event_type_error_keeps_gateway_error_as_source() {
        use std::error::Error;

        let cli = cli(&["--to", "k", "-m", "x", "--option", "event_type=page"]);
        let error = ValidatedConfig::from_raw(&cli, None).unwrap_err();

        let source = error.source().expect("gateway error as source");
        assert!(source.to_string().contains("'page'"));
        assert!(error.to_string().ends_with(&source.to_string()));
    }
}

mod toml_options {
    use super::*;

    #[test]
    fn toml_options_fill_missing_keys() {
        let cli = cli(&["--to", "k", "-m", "x", "--client", "nagios"]);
        let toml = toml(
            r#"
            [options]
            client = "zabbix"
            client_url = "https://monitor.example.com"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.options.get(key::CLIENT), Some("nagios"));
        assert_eq!(
            config.options.get(key::CLIENT_URL),
            Some("https://monitor.example.com")
        );
    }

    #[test]
    fn toml_event_type_is_validated() {
        let cli = cli(&["--to", "k", "-m", "x"]);
        let toml = toml(
            r#"
            [options]
            event_type = "snooze"
        "#,
        );

        let result = ValidatedConfig::from_raw(&cli, Some(&toml));

        assert!(matches!(result, Err(ConfigError::InvalidEventType(_))));
    }
}
