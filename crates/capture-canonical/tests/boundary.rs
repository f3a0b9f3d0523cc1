use capture_canonical::{
    DocHash, Metadata, PermissionSet, PrincipalId, StatusLabel, UpdateNotes, ValidationError,
};

#[test]
fn test_permission_set_capacity() {
    let five = PermissionSet::parse(["a", "b", "c", "d", "e"]).unwrap();
    assert_eq!(five.len(), 5);

    let err = PermissionSet::parse(["a", "b", "c", "d", "e", "f"]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooMany {
            field: "permissions",
            max: 5,
            len: 6
        }
    );
}

#[test]
fn test_permission_set_rejects_long_token_before_count() {
    let err = PermissionSet::parse(["update-status-and-more-things"]).unwrap_err();
    assert!(matches!(err, ValidationError::TooLong { max: 20, .. }));
}

#[test]
fn test_permission_set_lookup_is_exact() {
    let set = PermissionSet::parse(["update-status", "add-notes"]).unwrap();
    assert!(set.contains("update-status"));
    assert!(set.contains("add-notes"));
    assert!(!set.contains("add-version"));
    assert!(!set.contains("update"));
}

#[test]
fn test_permission_set_json_shape() {
    let set = PermissionSet::parse(["add-version"]).unwrap();
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!(["add-version"]));

    let too_many = serde_json::json!(["a", "b", "c", "d", "e", "f"]);
    assert!(serde_json::from_value::<PermissionSet>(too_many).is_err());
}

#[test]
fn test_doc_hash_json_is_hex() {
    let hash = DocHash::new([7u8; 32]);
    let json = serde_json::to_value(hash).unwrap();
    assert_eq!(json, serde_json::json!("07".repeat(32)));
    let back: DocHash = serde_json::from_value(json).unwrap();
    assert_eq!(back, hash);
}

#[test]
fn test_text_capacities() {
    assert!(Metadata::parse("m".repeat(1000)).is_ok());
    assert!(Metadata::parse("m".repeat(1001)).is_err());
    assert!(UpdateNotes::parse("n".repeat(200)).is_ok());
    assert!(UpdateNotes::parse("n".repeat(201)).is_err());
    assert!(StatusLabel::parse("verified").is_ok());
    assert!(StatusLabel::parse("s".repeat(21)).is_err());
}

#[test]
fn test_principal_json_validates() {
    let ok: PrincipalId = serde_json::from_str("\"org:facility-1\"").unwrap();
    assert_eq!(ok.as_str(), "org:facility-1");
    assert!(serde_json::from_str::<PrincipalId>("\"not valid\"").is_err());
}
