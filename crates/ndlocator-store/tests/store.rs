//! End-to-end store tests against a wiremock remote.

use ndlocator_core::{NewReseller, Position, ResellerPatch};
use ndlocator_store::{fallback_resellers, FetchOutcome, RecordClient, ResellerStore};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION: &str = "/rest/v1/resellers";

fn test_store(base_url: &str) -> ResellerStore {
    let client = RecordClient::new(base_url, Some("test-key"), 30, "ndlocator-test/0.1")
        .expect("client construction should not fail");
    ResellerStore::new(client)
}

fn remote_row(id: i64, name: &str, lat: f64, lng: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "address": "Av. Teste, 100 - Cidade, MG",
        "phone": "(34) 99999-0000",
        "email": "unidade@nddrones.com.br",
        "position_lat": lat,
        "position_lng": lng,
        "type": "Unidade Regional"
    })
}

#[tokio::test]
async fn fetch_all_mirrors_remote_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .and(query_param("select", "*"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            remote_row(10, "Patos de Minas", -18.5833, -46.5167),
            remote_row(11, "Uberlândia", -18.9186, -48.2772),
        ])))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let outcome = store.fetch_all().await;

    assert_eq!(outcome, FetchOutcome::Remote);
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.records()[0].id, 10);
    assert_eq!(store.records()[0].position, Position(-18.5833, -46.5167));
    assert!(!store.loading());
    assert!(store.error().is_none());
}

#[tokio::test]
async fn fetch_failure_substitutes_fallback_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let outcome = store.fetch_all().await;

    assert_eq!(outcome, FetchOutcome::Fallback);
    assert_eq!(store.records(), fallback_resellers());
    assert!(store.error().is_none());
    assert!(!store.loading());
}

#[tokio::test]
async fn fetch_replaces_previous_records_wholesale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            remote_row(1, "Only Unit", -20.0, -45.0),
        ])))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    // First load degrades to the six fallback units, second load must not merge.
    store.fetch_all().await;
    store.fetch_all().await;
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].name, "Only Unit");
}

#[tokio::test]
async fn create_appends_server_assigned_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(serde_json::json!([{
            "name": "X",
            "position_lat": 1.0,
            "position_lng": 2.0
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([
            remote_row(77, "X", 1.0, 2.0),
        ])))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let new = NewReseller {
        name: "X".to_string(),
        address: "Av. Teste, 100 - Cidade, MG".to_string(),
        phone: "(34) 99999-0000".to_string(),
        email: "unidade@nddrones.com.br".to_string(),
        position: Position(1.0, 2.0),
        unit_type: "Unidade Regional".to_string(),
        website: None,
        description: None,
        photo: None,
        coverage_radius: None,
        show_coverage: None,
        covered_cities: None,
    };
    let before = store.records().len();
    let created = store.create(&new).await.expect("create should succeed");

    assert_eq!(created.id, 77);
    assert_eq!(created.position, Position(1.0, 2.0));
    assert_eq!(store.records().len(), before + 1);
    assert_eq!(store.records().last().map(|r| r.id), Some(77));
}

#[tokio::test]
async fn create_failure_sets_error_and_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let new = NewReseller {
        name: "X".to_string(),
        address: "Y".to_string(),
        phone: "Z".to_string(),
        email: "x@y.z".to_string(),
        position: Position(1.0, 2.0),
        unit_type: "Unidade Regional".to_string(),
        website: None,
        description: None,
        photo: None,
        coverage_radius: None,
        show_coverage: None,
        covered_cities: None,
    };

    let result = store.create(&new).await;
    assert!(result.is_err());
    assert!(store.error().is_some());
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn update_replaces_only_the_matching_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            remote_row(1, "Alpha", -20.0, -45.0),
            remote_row(2, "Beta", -21.0, -44.0),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(COLLECTION))
        .and(query_param("id", "eq.2"))
        .and(body_partial_json(serde_json::json!({
            "position_lat": 9.0,
            "position_lng": 9.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            remote_row(2, "Beta", 9.0, 9.0),
        ])))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    store.fetch_all().await;
    let untouched = store.records()[0].clone();

    let patch = ResellerPatch {
        position: Some(Position(9.0, 9.0)),
        ..ResellerPatch::default()
    };
    let updated = store.update(2, &patch).await.expect("update should succeed");

    assert_eq!(updated.position, Position(9.0, 9.0));
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.records()[0], untouched);
    assert_eq!(store.records()[1].position, Position(9.0, 9.0));
}

#[tokio::test]
async fn update_failure_sets_error_and_leaves_records() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let patch = ResellerPatch {
        name: Some("Renamed".to_string()),
        ..ResellerPatch::default()
    };
    let result = store.update(5, &patch).await;

    assert!(result.is_err());
    assert!(store.error().is_some());
}

#[tokio::test]
async fn delete_removes_the_local_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            remote_row(1, "Alpha", -20.0, -45.0),
            remote_row(2, "Beta", -21.0, -44.0),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(COLLECTION))
        .and(query_param("id", "eq.1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    store.fetch_all().await;
    store.delete(1).await.expect("delete should succeed");

    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].id, 2);
}

#[tokio::test]
async fn delete_of_nonexistent_id_is_a_local_noop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            remote_row(1, "Alpha", -20.0, -45.0),
        ])))
        .mount(&server)
        .await;
    // The remote reports success even when the id filter matched nothing.
    Mock::given(method("DELETE"))
        .and(path(COLLECTION))
        .and(query_param("id", "eq.999"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    store.fetch_all().await;
    let result = store.delete(999).await;

    assert!(result.is_ok());
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn delete_failure_propagates_remote_report() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let result = store.delete(999).await;

    assert!(result.is_err());
    assert!(store.error().is_some());
}

#[tokio::test]
async fn update_of_nonexistent_id_reports_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(COLLECTION))
        .and(query_param("id", "eq.404"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let mut store = test_store(&server.uri());
    let patch = ResellerPatch {
        name: Some("Ghost".to_string()),
        ..ResellerPatch::default()
    };
    let result = store.update(404, &patch).await;

    assert!(result.is_err());
    assert!(store.error().is_some());
}
