use super::*;
use crate::core::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_means_chat() {
    let args = parse_args(&["carenav"]);
    assert!(args.command.is_none());
    assert!(args.model.is_none());
    assert!(args.log_file.is_none());
}

#[test]
fn global_flags_parse_after_subcommand() {
    let args = parse_args(&[
        "carenav",
        "say",
        "-m",
        "gemini-2.0-flash",
        "--base-url",
        "http://localhost:9000",
        "--log-file",
        "/tmp/carenav.log",
        "hello",
    ]);
    assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
    assert_eq!(args.base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(
        args.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/carenav.log"))
    );
    assert_eq!(
        args.command,
        Some(Commands::Say {
            prompt: vec!["hello".to_string()]
        })
    );
}

#[test]
fn say_collects_every_word() {
    let args = parse_args(&["carenav", "say", "Saya", "ingin", "janji", "temu"]);
    match args.command {
        Some(Commands::Say { prompt }) => assert_eq!(prompt.join(" "), "Saya ingin janji temu"),
        other => panic!("expected say subcommand, got {other:?}"),
    }
}

#[test]
fn set_accepts_multi_word_values_and_bare_invocation() {
    let args = parse_args(&["carenav", "set", "model", "gemini-2.5-pro"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: Some("model".to_string()),
            value: Some(vec!["gemini-2.5-pro".to_string()]),
        })
    );

    let args = parse_args(&["carenav", "set"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: None,
            value: None
        })
    );
}

#[test]
fn unset_requires_key() {
    assert!(Args::try_parse_from(["carenav", "unset"]).is_err());
    let args = parse_args(&["carenav", "unset", "temperature"]);
    assert_eq!(
        args.command,
        Some(Commands::Unset {
            key: "temperature".to_string()
        })
    );
}

#[test]
fn client_settings_fall_back_to_defaults() {
    let settings = resolve_client_settings("k".to_string(), &Config::default(), None, None);
    assert_eq!(settings.api_key, "k");
    assert_eq!(settings.model, DEFAULT_MODEL);
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
}

#[test]
fn flags_override_config_and_blank_flags_are_ignored() {
    let config = Config {
        model: Some("gemini-from-config".to_string()),
        base_url: Some("https://proxy.example/v1beta".to_string()),
        temperature: Some(0.2),
        sidebar: None,
    };

    let settings = resolve_client_settings("k".to_string(), &config, Some("cli-model"), None);
    assert_eq!(settings.model, "cli-model");
    assert_eq!(settings.base_url, "https://proxy.example/v1beta");
    assert_eq!(settings.temperature, 0.2);

    let settings = resolve_client_settings("k".to_string(), &config, Some("  "), Some(""));
    assert_eq!(settings.model, "gemini-from-config");
    assert_eq!(settings.base_url, "https://proxy.example/v1beta");
}
