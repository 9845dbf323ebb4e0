//! Tests for the host collaborator implementations

use super::*;
use crate::error::Error;
use crate::query::Query;
use serde_json::json;

#[tokio::test]
async fn test_static_secret_store_reads_in_order() {
    let store = StaticSecretStore::new()
        .with_secret("readwiseToken", "abc")
        .with_secret("other", "xyz");

    let values = store.read_secrets(&["other", "readwiseToken"]).await.unwrap();
    assert_eq!(values, vec!["xyz", "abc"]);
}

#[tokio::test]
async fn test_static_secret_store_missing() {
    let store = StaticSecretStore::new();
    let err = store.read_secrets(&["readwiseToken"]).await.unwrap_err();
    assert!(matches!(err, Error::Secret { ref name, .. } if name == "readwiseToken"));
}

#[test]
fn test_static_secret_store_debug_hides_values() {
    let store = StaticSecretStore::new().with_secret("readwiseToken", "super-secret");
    let debug = format!("{store:?}");
    assert!(debug.contains("readwiseToken"));
    assert!(!debug.contains("super-secret"));
}

#[tokio::test]
async fn test_env_secret_store_with_override() {
    std::env::set_var("READWISE_PROVIDER_TEST_TOKEN_A", "from-env");
    let store = EnvSecretStore::new().with_variable("readwiseToken", "READWISE_PROVIDER_TEST_TOKEN_A");

    let values = store.read_secrets(&["readwiseToken"]).await.unwrap();
    assert_eq!(values, vec!["from-env"]);
}

#[tokio::test]
async fn test_env_secret_store_missing_variable() {
    let store = EnvSecretStore::new()
        .with_variable("readwiseToken", "READWISE_PROVIDER_TEST_TOKEN_UNSET");

    let err = store.read_secrets(&["readwiseToken"]).await.unwrap_err();
    assert!(err
        .to_string()
        .contains("READWISE_PROVIDER_TEST_TOKEN_UNSET is not set"));
}

#[test]
fn test_env_secret_store_derived_name() {
    let store = EnvSecretStore::new();
    assert_eq!(store.variable_for("readwiseToken"), "READWISE_TOKEN");
}

#[tokio::test]
async fn test_literal_evaluator_tagged_nodes() {
    let eval = LiteralEvaluator;
    let ctx = HostContext::default();

    assert_eq!(eval.evaluate(&json!(["number", 5]), &ctx).await.unwrap(), json!(5));
    assert_eq!(
        eval.evaluate(&json!(["string", "10"]), &ctx).await.unwrap(),
        json!("10")
    );
    assert_eq!(
        eval.evaluate(&json!(["boolean", true]), &ctx).await.unwrap(),
        json!(true)
    );
    assert_eq!(eval.evaluate(&json!(["null"]), &ctx).await.unwrap(), json!(null));
    assert_eq!(eval.evaluate(&json!(42), &ctx).await.unwrap(), json!(42));
}

#[tokio::test]
async fn test_literal_evaluator_rejects_computed_expressions() {
    let eval = LiteralEvaluator;
    let ctx = HostContext::default();

    let err = eval
        .evaluate(&json!(["+", ["number", 1], ["number", 2]]), &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Evaluation { .. }));

    assert!(eval
        .evaluate(&json!(["number", "five"]), &ctx)
        .await
        .is_err());
}

#[tokio::test]
async fn test_passthrough_applier_keeps_order() {
    let records = vec![json!({"id": 2}), json!({"id": 1})];
    let out = PassthroughApplier
        .apply(&Query::new(), records.clone(), &HostContext::default())
        .await
        .unwrap();
    assert_eq!(out, records);
}
