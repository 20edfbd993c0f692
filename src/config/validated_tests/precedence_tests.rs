//! Tests for CLI vs TOML precedence rules.

use crate::gateway::Event;
use crate::gateway::options::key;

use super::*;

mod cli_precedence {
    use super::*;

    #[test]
    fn cli_to_overrides_toml() {
        let cli = cli(&["--to", "cli-key", "-m", "x"]);
        let toml = toml(
            r#"
            [notification]
            to = "toml-key"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.to, "cli-key");
    }

    #[test]
    fn cli_token_overrides_toml() {
        let cli = cli(&["--to", "k", "-m", "x", "--token", "cli-token"]);
        let toml = toml(
            r#"
            [pagerduty]
            token = "toml-token"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.gateway.token.as_deref(), Some("cli-token"));
    }

    #[test]
    fn cli_token_overrides_toml_token_option() {
        let cli = cli(&["--to", "k", "-m", "x", "--token", "cli-token"]);
        let toml = toml(
            r#"
            [options]
            token = "toml-token"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
        let event = Event::from_options(
            &config.message,
            &config.options,
            config.gateway.token.as_deref(),
        )
        .unwrap();

        assert!(!config.options.contains(key::TOKEN));
        assert_eq!(event.service_key, "cli-token");
    }

    #[test]
    fn toml_token_option_used_without_cli_token() {
        let cli = cli(&["--to", "k", "-m", "x"]);
        let toml = toml(
            r#"
            [pagerduty]
            token = "section-token"

            [options]
            token = "option-token"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
        let event = Event::from_options(
            &config.message,
            &config.options,
            config.gateway.token.as_deref(),
        )
        .unwrap();

        assert_eq!(event.service_key, "option-token");
    }

    #[test]
    fn cli_endpoint_overrides_toml() {
        let cli = cli(&[
            "--to",
            "k",
            "-m",
            "x",
            "--endpoint",
            "http://cli.example.com/{version}",
        ]);
        let toml = toml(
            r#"
            [pagerduty]
            endpoint = "http://toml.example.com/{version}"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.gateway.endpoint, "http://cli.example.com/{version}");
    }

    #[test]
    fn cli_timeouts_override_toml() {
        let cli = cli(&[
            "--to",
            "k",
            "-m",
            "x",
            "--timeout",
            "10",
            "--connect-timeout",
            "2",
        ]);
        let toml = toml(
            r"
            [pagerduty]
            timeout = 50
            connect_timeout = 20
        ",
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.gateway.timeout.as_secs(), 10);
        assert_eq!(config.gateway.connect_timeout.as_secs(), 2);
    }
}

mod toml_fallback {
    use super::*;

    #[test]
    fn toml_gateway_settings_used_without_cli() {
        let cli = cli(&["--to", "k", "-m", "x"]);
        let toml = toml(
            r#"
            [pagerduty]
            token = "toml-token"
            endpoint = "http://localhost:9000/generic/{version}"
            version = "v-test"
            timeout = 50
            connect_timeout = 20
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.gateway.token.as_deref(), Some("toml-token"));
        assert_eq!(
            config.gateway.endpoint,
            "http://localhost:9000/generic/{version}"
        );
        assert_eq!(config.gateway.version, "v-test");
        assert_eq!(config.gateway.timeout.as_secs(), 50);
        assert_eq!(config.gateway.connect_timeout.as_secs(), 20);
    }
}
