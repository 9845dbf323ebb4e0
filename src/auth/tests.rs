//! Tests for the auth module

use super::*;

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_token_header() {
    let auth = Authenticator::new(AuthConfig::token("my-token"));
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://readwise.io/api/v2/books/"));

    let built = req.build().unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Token my-token"
    );
}

#[test]
fn test_header_value() {
    assert_eq!(Authenticator::default().header_value(), None);
    assert_eq!(
        Authenticator::new(AuthConfig::token("abc")).header_value(),
        Some("Token abc".to_string())
    );
}
