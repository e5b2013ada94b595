use super::*;

fn env(vars: &[(&str, &str)]) -> Environment {
    let map: config::Map<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

#[test]
fn test_default_settings_are_empty() {
    let settings = Settings::default();

    assert!(settings.region.is_none());
    assert!(settings.profile.is_none());
    assert!(settings.endpoint_url.is_none());
}

#[test]
fn test_from_toml_str_full() {
    let toml = r#"
        region = "ap-northeast-1"
        profile = "staging"
        endpoint_url = "http://localhost:4566"
    "#;

    let settings = Settings::from_toml_str(toml).unwrap();

    assert_eq!(settings.region.as_deref(), Some("ap-northeast-1"));
    assert_eq!(settings.profile.as_deref(), Some("staging"));
    assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:4566"));
}

#[test]
fn test_from_toml_str_empty() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_from_toml_str_invalid() {
    let result = Settings::from_toml_str("region = ");
    assert!(matches!(result, Err(EcrError::Config { .. })));
}

#[test]
fn test_from_environment_reads_prefixed_vars() {
    let settings = Settings::from_environment(env(&[
        ("ECRCLI_REGION", "eu-central-1"),
        ("ECRCLI_ENDPOINT_URL", "https://ecr.example.com"),
        ("AWS_REGION", "us-west-2"),
    ]))
    .unwrap();

    assert_eq!(settings.region.as_deref(), Some("eu-central-1"));
    assert_eq!(
        settings.endpoint_url.as_deref(),
        Some("https://ecr.example.com")
    );
    assert!(settings.profile.is_none());
}

#[test]
fn test_from_environment_without_vars() {
    let settings = Settings::from_environment(env(&[])).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_merge_prefers_overrides() {
    let file = Settings {
        region: Some("us-east-1".to_string()),
        profile: Some("default".to_string()),
        endpoint_url: None,
    };
    let flags = Settings {
        region: Some("eu-west-1".to_string()),
        profile: None,
        endpoint_url: Some("http://localhost:4566".to_string()),
    };

    let merged = file.merge(flags);

    assert_eq!(merged.region.as_deref(), Some("eu-west-1"));
    assert_eq!(merged.profile.as_deref(), Some("default"));
    assert_eq!(merged.endpoint_url.as_deref(), Some("http://localhost:4566"));
}

#[test]
fn test_validate_rejects_bad_endpoint() {
    let settings = Settings {
        endpoint_url: Some("not a url".to_string()),
        ..Default::default()
    };
    assert!(settings.validate().is_err());

    let settings = Settings {
        endpoint_url: Some("ftp://example.com".to_string()),
        ..Default::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_rejects_blank_region() {
    let settings = Settings {
        region: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(matches!(settings.validate(), Err(EcrError::Config { .. })));
}

#[test]
fn test_validate_accepts_good_settings() {
    let settings = Settings {
        region: Some("us-east-1".to_string()),
        profile: Some("prod".to_string()),
        endpoint_url: Some("https://api.ecr.us-east-1.amazonaws.com".to_string()),
    };
    assert!(settings.validate().is_ok());
}

#[test]
fn test_from_toml_str_defers_validation() {
    let settings = Settings::from_toml_str("endpoint_url = \"::::\"").unwrap();
    assert_eq!(settings.endpoint_url.as_deref(), Some("::::"));
    assert!(settings.validate().is_err());
}

#[test]
fn test_from_environment_keeps_blank_region() {
    let settings = Settings::from_environment(env(&[("ECRCLI_REGION", "")])).unwrap();

    assert_eq!(settings.region.as_deref(), Some(""));
    assert!(matches!(settings.validate(), Err(EcrError::Config { .. })));
}
