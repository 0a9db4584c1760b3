use super::*;

#[test]
fn field_name_normal_usage() {
    let name = FieldName::try_from("customer_name").unwrap();
    assert_eq!(name.as_str(), "customer_name");
}

#[test]
fn field_name_is_trimmed() {
    let name = FieldName::try_from("  sku ").unwrap();
    assert_eq!(name.as_str(), "sku");
}

#[test]
fn field_name_rejects_empty_string() {
    let result = FieldName::try_from("");
    assert_eq!(result.unwrap_err(), FieldNameError::NotEmptyViolated);
}

#[test]
fn field_name_rejects_whitespace_string() {
    let result = FieldName::try_from("   ");
    result.unwrap_err();
}

#[test]
fn field_name_rejects_too_long_string() {
    let long_string = "f".repeat(MAX_FIELD_NAME_LENGTH + 1);
    let result = FieldName::try_from(long_string.as_str());
    result.unwrap_err();
}

#[test]
fn field_name_deserializes_with_validation() {
    let name: FieldName = serde_json::from_str("\"status\"").unwrap();
    assert_eq!(name.as_str(), "status");

    let result: Result<FieldName, _> = serde_json::from_str("\"\"");
    result.unwrap_err();
}
