use smartsdlc_core::SmartSdlcError;

#[test]
fn error_display_for_provider() {
    let err = SmartSdlcError::Provider("rate limited".to_string());
    assert_eq!(
        format!("{err}"),
        "text generation provider failed: rate limited"
    );
}

#[test]
fn error_display_for_invalid_config() {
    let err = SmartSdlcError::InvalidConfig("missing api key".to_string());
    assert_eq!(format!("{err}"), "invalid configuration: missing api key");
}

#[test]
fn error_display_for_serde() {
    let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = SmartSdlcError::Serde(parse_error);
    assert!(format!("{err}").starts_with("serialization error: "));
}
