use crate::tests::create_test_client;
use crate::{AdGuardError, RewriteRecord};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_rewrites_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/control/rewrite/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"domain": "example.org", "answer": "1.2.3.4"},
            {"domain": "*.lab.example", "answer": "10.0.0.2"}
        ])))
        .mount(&mock_server)
        .await;

    let records = client.rewrites().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], RewriteRecord::new("example.org", "1.2.3.4"));
    assert_eq!(records[1], RewriteRecord::new("*.lab.example", "10.0.0.2"));
}

#[tokio::test]
async fn test_rewrites_list_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/control/rewrite/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let records = client.rewrites().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_add_and_delete_send_identical_body_to_distinct_paths() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server).await;

    let expected_body = serde_json::json!({"domain": "example.org", "answer": "1.2.3.4"});

    Mock::given(method("POST"))
        .and(path("/control/rewrite/add"))
        .and(body_json(expected_body.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/control/rewrite/delete"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = RewriteRecord::new("example.org", "1.2.3.4");
    client.add_rewrite(&record).await.unwrap();
    client.delete_rewrite(&record).await.unwrap();
}

#[tokio::test]
async fn test_add_rewrite_unexpected_status() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/control/rewrite/add"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let record = RewriteRecord::new("example.org", "1.2.3.4");
    let result = client.add_rewrite(&record).await;
    assert!(matches!(
        result,
        Err(AdGuardError::UnexpectedStatus { status: 400 })
    ));
}
