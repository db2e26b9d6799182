//! Tests for RoutinistError type

use super::*;

#[test]
fn test_catalog_not_found_display() {
    let error = RoutinistError::CatalogNotFound(PathBuf::from("missing/products.json"));
    let msg = error.to_string();
    assert!(msg.contains("Catalog file not found"));
    assert!(msg.contains("missing/products.json"));
    assert!(msg.contains("[catalog] path"));
}

#[test]
fn test_invalid_catalog_display() {
    let error = RoutinistError::InvalidCatalog("missing field `brand`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid catalog JSON"));
    assert!(msg.contains("missing field `brand`"));
}

#[test]
fn test_invalid_config_display() {
    let error = RoutinistError::InvalidConfig("expected `=`".to_string());
    assert_eq!(error.to_string(), "Invalid config file: expected `=`");
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test error");
    let err = RoutinistError::from(io_err);
    assert!(matches!(err, RoutinistError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_clone() {
    let error = RoutinistError::InvalidCatalog("test".to_string());
    let cloned = error.clone();
    assert_eq!(error, cloned);
}
