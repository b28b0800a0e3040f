use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RfsError::invalid_base_value("x")
            .to_string()
            .contains("invalid base value:")
    );
    assert!(
        RfsError::invalid_breakpoint("x")
            .to_string()
            .contains("invalid breakpoint:")
    );
    assert!(
        RfsError::invalid_breakpoint_unit("x")
            .to_string()
            .contains("invalid breakpoint unit:")
    );
    assert!(RfsError::invalid_unit("x").to_string().contains("invalid unit:"));
    assert!(
        RfsError::invalid_value("x")
            .to_string()
            .contains("invalid value:")
    );
    assert!(
        RfsError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn config_errors_are_classified() {
    assert!(RfsError::invalid_base_value("x").is_config());
    assert!(RfsError::invalid_breakpoint("x").is_config());
    assert!(RfsError::invalid_breakpoint_unit("x").is_config());
    assert!(RfsError::invalid_unit("x").is_config());
    assert!(!RfsError::invalid_value("x").is_config());
    assert!(!RfsError::serde("x").is_config());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RfsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
