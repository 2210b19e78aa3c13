//! End-to-end pipeline tests
//!
//! Full invocations against the in-process store: both calling
//! conventions, the happy path, and every abort path.

use plangen_render::PlaceholderRenderer;
use plangen_service::{GenerateError, Generator, Response, ServiceConfig};
use plangen_store::{ObjectStore, UrlPolicy};
use plangen_test_utils::{
    gateway_event, gateway_event_encoded, scenario_a_payload, seeded_store, seeded_store_with,
    typed_event, FailOn, FailingRenderer, FailingStore, BASIC_TEMPLATE, TEST_BUCKET,
    TEST_TEMPLATE_KEY,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn config() -> ServiceConfig {
    ServiceConfig::new(TEST_BUCKET, TEST_TEMPLATE_KEY)
}

fn generator(store: Arc<dyn ObjectStore>) -> Generator {
    Generator::new(&config(), store, Arc::new(PlaceholderRenderer::strict()))
}

fn url_of(typed_body: &str) -> String {
    let value: Value = serde_json::from_str(typed_body).unwrap();
    value["url"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn scenario_a_typed_invocation_returns_plan_url() {
    let store = seeded_store();
    let generator = generator(store.clone());

    let response = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap();

    let Response::Typed(body) = response else {
        panic!("typed invocation must get a typed response");
    };
    let url = url_of(&body);
    assert!(url.starts_with(&format!(
        "https://{TEST_BUCKET}.s3.amazonaws.com/plans/"
    )));
    assert!(url.contains(".docx"));
    // Template plus exactly one published plan.
    assert_eq!(store.object_count(), 2);
}

#[tokio::test]
async fn scenario_a_renders_the_grid_note_and_joined_music_list() {
    let store = seeded_store();
    let generator = generator(store.clone());

    let Response::Typed(body) = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap()
    else {
        panic!("expected typed response");
    };

    // Fish the published document back out of the store.
    let url = url_of(&body);
    let key_start = url.find("plans/").unwrap();
    let key_end = url.find(".docx").unwrap() + ".docx".len();
    let rendered = store.get(&url[key_start..key_end]).await.unwrap();
    let text = String::from_utf8(rendered).unwrap();

    assert!(text.contains("Hafta 3 (1-7 Eyl) - X Kurumu"));
    assert!(text.contains("Pazartesi/Genel: not"));
    assert!(text.contains("Müzik: a, b"));
}

#[tokio::test]
async fn gateway_invocation_with_encoded_body_gets_200_with_cors() {
    let generator = generator(seeded_store());

    let response = generator
        .handle(gateway_event_encoded(&scenario_a_payload()))
        .await
        .unwrap();

    let Response::Gateway(envelope) = response else {
        panic!("gateway invocation must get an envelope");
    };
    assert_eq!(envelope.status_code, 200);
    assert_eq!(
        envelope
            .headers
            .get("Access-Control-Allow-Origin")
            .map(String::as_str),
        Some("*")
    );
    let body: Value = serde_json::from_str(&envelope.body).unwrap();
    assert!(body["url"].as_str().unwrap().contains("/plans/"));
}

#[tokio::test]
async fn gateway_invocation_with_object_body_also_works() {
    let generator = generator(seeded_store());

    let response = generator
        .handle(gateway_event(scenario_a_payload()))
        .await
        .unwrap();
    let Response::Gateway(envelope) = response else {
        panic!("expected envelope");
    };
    assert_eq!(envelope.status_code, 200);
}

#[tokio::test]
async fn scenario_b_malformed_fields_aborts_before_any_upload() {
    let store = seeded_store();
    let generator = generator(store.clone());

    let mut payload = scenario_a_payload();
    payload["fields"] = json!("{not valid json");

    let err = generator
        .handle(typed_event(payload))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::FieldDecode(_)));
    assert!(err.caller_message().contains("fields"));
    // Nothing generated, nothing uploaded: only the seeded template remains.
    assert_eq!(store.object_count(), 1);
}

#[tokio::test]
async fn scenario_b_under_gateway_convention_is_a_500_envelope() {
    let generator = generator(seeded_store());

    let body = json!({ "fields": "{not valid json" });
    let Response::Gateway(envelope) = generator
        .handle(gateway_event(body))
        .await
        .unwrap()
    else {
        panic!("expected envelope");
    };
    assert_eq!(envelope.status_code, 500);
    let parsed: Value = serde_json::from_str(&envelope.body).unwrap();
    assert!(parsed["error"].as_str().unwrap().contains("fields"));
}

#[tokio::test]
async fn scenario_c_unresolved_placeholder_lists_the_tag_and_uploads_nothing() {
    let template = format!("{BASIC_TEMPLATE}Eksik: {{{{eksik_alan}}}}\n");
    let store = seeded_store_with(template.as_bytes());
    let generator = generator(store.clone());

    let err = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap_err();

    assert_eq!(
        err.caller_message(),
        "unresolved placeholder 'eksik_alan'"
    );
    assert_eq!(store.object_count(), 1);
}

#[tokio::test]
async fn multi_error_render_failure_joins_every_member_message() {
    let store = seeded_store();
    let generator = Generator::new(
        &config(),
        store,
        Arc::new(FailingRenderer::with_unresolved(3)),
    );

    let err = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap_err();

    assert_eq!(
        err.caller_message(),
        "unresolved placeholder 'tag_0'; unresolved placeholder 'tag_1'; unresolved placeholder 'tag_2'"
    );
}

#[tokio::test]
async fn identical_invocations_produce_distinct_locators() {
    let store = seeded_store();
    let generator = generator(store.clone());

    let Response::Typed(first) = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap()
    else {
        panic!("expected typed response");
    };
    let Response::Typed(second) = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap()
    else {
        panic!("expected typed response");
    };

    assert_ne!(url_of(&first), url_of(&second));
    assert_eq!(store.object_count(), 3);
}

#[tokio::test]
async fn typed_invocation_never_parses_a_malformed_body() {
    let generator = generator(seeded_store());

    let mut event = typed_event(scenario_a_payload());
    event["body"] = json!("{definitely not json");

    // Still succeeds: the body is ignored under the typed convention.
    assert!(generator.handle(event).await.is_ok());
}

#[tokio::test]
async fn missing_template_surfaces_as_fetch_failure() {
    let config = ServiceConfig::new(TEST_BUCKET, "templates/missing.docx");
    let generator = Generator::new(
        &config,
        seeded_store(),
        Arc::new(PlaceholderRenderer::strict()),
    );

    let err = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::TemplateFetch(_)));
}

#[tokio::test]
async fn upload_failure_becomes_a_gateway_500() {
    let store = Arc::new(FailingStore::new(seeded_store(), FailOn::Put));
    let object_count_before = store.object_count();
    let generator = generator(store.clone());

    let Response::Gateway(envelope) = generator
        .handle(gateway_event(scenario_a_payload()))
        .await
        .unwrap()
    else {
        panic!("expected envelope");
    };
    assert_eq!(envelope.status_code, 500);
    assert!(envelope.body.contains("upload failed"));
    assert_eq!(store.object_count(), object_count_before);
}

#[tokio::test]
async fn public_policy_returns_the_exact_static_url() {
    let mut config = config();
    config.url_policy = UrlPolicy::PublicStatic;
    let store = seeded_store();
    let generator = Generator::new(
        &config,
        store,
        Arc::new(PlaceholderRenderer::strict()),
    );

    let Response::Typed(body) = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap()
    else {
        panic!("expected typed response");
    };
    let url = url_of(&body);
    assert!(url.starts_with(&format!(
        "https://{TEST_BUCKET}.s3.amazonaws.com/plans/"
    )));
    assert!(url.ends_with(".docx"), "static URLs carry no query string");
}

#[tokio::test]
async fn signed_policy_url_carries_the_hour_expiry() {
    let generator = generator(seeded_store());

    let Response::Typed(body) = generator
        .handle(typed_event(scenario_a_payload()))
        .await
        .unwrap()
    else {
        panic!("expected typed response");
    };
    assert!(url_of(&body).contains("X-Amz-Expires=3600"));
}
