use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SeamMaskError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SeamMaskError::raster("x")
            .to_string()
            .contains("raster error:")
    );
    assert!(
        SeamMaskError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SeamMaskError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = SeamMaskError::from(e);
    assert!(matches!(err, SeamMaskError::Serde(_)));
}
