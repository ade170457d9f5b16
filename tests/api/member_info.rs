use std::time;

use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::TestApp;

const APPLICATION_JSON_UTF8: &str = "application/json;charset=UTF-8";

#[tokio::test]
async fn member_info_returns_200_with_the_upstream_member() {
    let test_app = TestApp::spawn_app().await;

    for member_id in ["1111", "2222", "3333"] {
        let _mock_guard = Mock::given(method("GET"))
            .and(path("/api/v1/member-info"))
            .and(header("Content-Type", APPLICATION_JSON_UTF8))
            .and(header("X-EXTRA-ID", member_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "memberId": member_id.parse::<i64>().unwrap()
            })))
            .expect(1)
            .mount_as_scoped(&test_app.member_server)
            .await;

        let response = test_app.get_member_info(member_id).await;

        assert_eq!(200, response.status().as_u16());
        let content_type = response
            .headers()
            .get("Content-Type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(
            content_type.starts_with("application/json"),
            "Unexpected content type {}",
            content_type
        );

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["memberId"].to_string(), member_id);
    }
}

#[tokio::test]
async fn member_info_passes_the_whole_member_through() {
    let test_app = TestApp::spawn_app().await;
    let upstream_member = serde_json::json!({
        "id": "b7c2",
        "memberId": 2222,
        "statusType": "ACTIVATED",
        "givenName": "Frank",
        "familyName": "Parejo",
        "dateOfBirth": "1990-02-28",
        "address": { "city": "Malaga", "country": "ES", "postalCode": "29001" },
        "products": [
            { "type": "GIFT", "code": "G1", "name": "Welcome pack" },
            { "type": "DISCOUNT", "code": "D1", "name": "10% off" }
        ],
        "creationMillis": 1690000000000_i64
    });

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_member.clone()))
        .expect(1)
        .mount(&test_app.member_server)
        .await;

    let response = test_app.get_member_info("2222").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, upstream_member);
}

#[tokio::test]
async fn member_info_drops_unknown_fields_and_zero_values() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "memberId": 3333,
            "creationMillis": 0,
            "address": { "city": "Cadiz", "floor": 2 },
            "products": [{ "type": "DISCOUNT", "code": "D1", "percentage": 15 }],
            "tier": "gold"
        })))
        .expect(1)
        .mount(&test_app.member_server)
        .await;

    let response = test_app.get_member_info("3333").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "memberId": 3333,
            "address": { "city": "Cadiz" },
            "products": [{ "type": "DISCOUNT", "code": "D1" }]
        })
    );
}

#[tokio::test]
async fn member_info_fails_when_upstream_returns_500() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.member_server)
        .await;

    let response = test_app.get_member_info("1111").await;

    assert_ne!(200, response.status().as_u16());
    assert!(response.status().is_server_error());
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn member_info_fails_with_timeout_when_upstream_is_slow() {
    let test_app = TestApp::spawn_app_with(|config| {
        config.service.http.connection_timeout = 500;
        config.service.http.read_timeout = 1;
        config.service.http.write_timeout = 0;
    })
    .await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "memberId": 1111 }))
                .set_delay(time::Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&test_app.member_server)
        .await;

    let response = test_app.get_member_info("1111").await;

    assert_eq!(504, response.status().as_u16());
}

#[tokio::test]
async fn member_info_fails_when_upstream_body_does_not_fit() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "memberId": 1111,
            "products": [{ "code": "D1" }]
        })))
        .expect(1)
        .mount(&test_app.member_server)
        .await;

    let response = test_app.get_member_info("1111").await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn member_info_returns_400_for_non_positive_ids() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.member_server)
        .await;

    // This is a common practice and it is called table-driven tests.
    let test_cases = vec![("0", "zero id"), ("-1111", "negative id")];

    for (member_id, error_message) in test_cases {
        let response = test_app.get_member_info(member_id).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when the id was a {}",
            error_message
        );
    }
}
