mod support;

use influmatch_core::{Locale, RecoveryResult};
use match_client::{MatchApiClient, MatchClient};
use support::{capture_logs, closed_base_url, StubRoute, StubServer};

const NIKE_MATCHES: &str = r#"{
    "matches": [
        {
            "influencer": "@fitlife_th",
            "total_score": 49.3,
            "details": {
                "type_of_product": 9.47,
                "target_group": 10.0,
                "positioning": 9.83,
                "brand_personality": 10.0,
                "vision": 10.0
            },
            "category": "Fitness & Lifestyle"
        },
        {
            "influencer": "@sporty_bangkok",
            "total_score": 46.2,
            "details": {
                "type_of_product": 9.2,
                "target_group": 9.8,
                "positioning": 9.1,
                "brand_personality": 9.5,
                "vision": 8.6
            }
        },
        {
            "influencer": "@aunnyc",
            "total_score": 47.89,
            "details": {
                "type_of_product": 10.0,
                "target_group": 9.64,
                "positioning": 10.0,
                "brand_personality": 8.97,
                "vision": 9.27
            }
        }
    ]
}"#;

fn client_for(base_url: &str) -> MatchClient {
    let api = MatchApiClient::new(base_url, "influmatch-tests/1.0").unwrap();
    MatchClient::new(api, Locale::En)
}

#[tokio::test]
async fn test_list_brands_keeps_server_order() {
    let server = StubServer::start(vec![StubRoute::new(
        "GET",
        "/api/v1/brands",
        200,
        r#"[{"name":"Sephora Thailand"},{"_id":"2","name":"Nike Thailand"}]"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.list_brands().await;
    assert!(result.is_recovered());
    let names: Vec<String> = result
        .value()
        .unwrap()
        .iter()
        .map(|b| b.name.clone())
        .collect();
    assert_eq!(names, vec!["Sephora Thailand", "Nike Thailand"]);
}

#[tokio::test]
async fn test_brands_server_error_degrades_to_empty_and_logs() {
    let server =
        StubServer::start(vec![StubRoute::new("GET", "/api/v1/brands", 500, r#"{"detail":"boom"}"#)])
            .await;
    let client = client_for(&server.base_url);
    let (_guard, logs) = capture_logs();

    let result = client.list_brands().await;

    match &result {
        RecoveryResult::Degraded { value, notice } => {
            assert!(value.is_empty());
            assert_eq!(notice.code, "MATCH_API_HTTP_STATUS");
            assert!(notice.message.contains("500"));
        }
        other => panic!("expected degraded result, got {other:?}"),
    }

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("/api/v1/brands"));

    let metrics = client.api().get_metrics().await;
    assert_eq!(metrics.total_requests, 1);
    assert_eq!(metrics.failed_requests, 1);
}

#[tokio::test]
async fn test_match_influencers_posts_brand_and_keeps_order() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/match-influencers",
        200,
        NIKE_MATCHES,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.match_influencers("Nike Thailand").await;
    let matches = result.value().unwrap();

    // Server order, even though the scores are not sorted
    let order: Vec<&str> = matches.iter().map(|m| m.influencer.as_str()).collect();
    assert_eq!(order, vec!["@fitlife_th", "@sporty_bangkok", "@aunnyc"]);

    let top = &matches[0];
    assert_eq!(top.display_score(), "49.3");
    let fills: Vec<f64> = top.details.axes().iter().map(|a| a.fill_percent()).collect();
    let expected = [94.7, 100.0, 98.3, 100.0, 100.0];
    assert_eq!(fills.len(), expected.len());
    for (fill, want) in fills.iter().zip(expected) {
        assert!((fill - want).abs() < 1e-9, "{fill} != {want}");
    }

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].json(), serde_json::json!({ "brand_name": "Nike Thailand" }));
    assert!(requests[0]
        .header("content-type")
        .unwrap()
        .starts_with("application/json"));
}

#[tokio::test]
async fn test_zero_matches_is_empty_not_error() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/match-influencers",
        200,
        r#"{"matches": []}"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.match_influencers("Unknown Brand").await;
    assert_eq!(result, RecoveryResult::Recovered(Vec::new()));
}

#[tokio::test]
async fn test_partial_details_keep_every_match() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/match-influencers",
        200,
        r#"{
            "matches": [
                {
                    "influencer": "@fitlife_th",
                    "total_score": 49.3,
                    "details": {
                        "type_of_product": 9.47,
                        "target_group": 10.0,
                        "positioning": 9.83,
                        "brand_personality": 10.0,
                        "vision": 10.0
                    }
                },
                {
                    "influencer": "@sporty_bangkok",
                    "total_score": 28.1,
                    "details": {
                        "type_of_product": 9.2,
                        "positioning": 9.1,
                        "vision": 9.8
                    }
                }
            ]
        }"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.match_influencers("Nike Thailand").await;
    assert!(result.is_recovered(), "got {result:?}");
    let matches = result.value().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[1].influencer, "@sporty_bangkok");
    assert_eq!(matches[1].details.target_group, 0.0);
    assert_eq!(matches[1].details.positioning, 9.1);
}

#[tokio::test]
async fn test_missing_matches_key_is_empty() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/match-influencers",
        200,
        r#"{"status": "ok"}"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.match_influencers("Nike Thailand").await;
    assert_eq!(result, RecoveryResult::Recovered(Vec::new()));
}

#[test]
fn test_analyze_match_with_empty_input_sends_nothing() {
    let client = client_for("http://127.0.0.1:9");

    let no_influencer = tokio_test::block_on(client.analyze_match("", "Nike Thailand"));
    assert!(no_influencer.is_skipped());
    assert_eq!(no_influencer.notice().unwrap().code, "INVALID_INPUT");

    let no_brand = tokio_test::block_on(client.analyze_match("@fitlife_th", "   "));
    assert!(no_brand.is_skipped());

    let metrics = tokio_test::block_on(client.api().get_metrics());
    assert_eq!(metrics.total_requests, 0);
}

#[tokio::test]
async fn test_analyze_match_returns_analysis() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/analyze-match",
        200,
        r#"{
            "influencer_strengths": "Strong fitness audience",
            "content_style": "Short workout clips",
            "brand_compatibility": "High",
            "campaign_suitability": "Product launches",
            "strategic_recommendations": "Run a 30-day challenge"
        }"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.analyze_match("@fitlife_th", "Nike Thailand").await;
    let analysis = result.value().unwrap();
    assert_eq!(analysis.brand_compatibility, "High");
    assert!(analysis.extra.is_empty());

    let body = server.requests()[0].json();
    assert_eq!(
        body,
        serde_json::json!({ "influencer_name": "@fitlife_th", "brand_name": "Nike Thailand" })
    );
}

#[tokio::test]
async fn test_malformed_analysis_fails_with_notice() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/analyze-match",
        200,
        r#"{"influencer_strengths": "only one field"}"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.analyze_match("@fitlife_th", "Nike Thailand").await;
    assert!(result.is_failed());
    assert_eq!(result.notice().unwrap().code, "MATCH_API_INVALID_RESPONSE");
}

#[tokio::test]
async fn test_influencer_analysis_fills_placeholders() {
    let server = StubServer::start(vec![StubRoute::new(
        "GET",
        "/api/v1/influencer-analysis/@fitlife_th",
        200,
        r#"{"Type_of_content": "Health videos", "personality": ""}"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.fetch_influencer_analysis("@fitlife_th").await;
    let profile = result.value().unwrap();
    assert_eq!(profile.type_of_content, "Health videos");
    assert_eq!(profile.target_audience, "Audience not specified");
    assert_eq!(profile.personality, "Personality not specified");

    assert_eq!(server.requests()[0].path, "/api/v1/influencer-analysis/@fitlife_th");
}

#[tokio::test]
async fn test_unreachable_service_degrades_profile() {
    let client = client_for(&closed_base_url().await);

    let result = client.fetch_influencer_analysis("@fitlife_th").await;
    match result {
        RecoveryResult::Degraded { value, notice } => {
            assert_eq!(value.type_of_content, "Content not available");
            assert_eq!(value.vision, "Vision not specified");
            assert_eq!(notice.code, "NETWORK");
        }
        other => panic!("expected degraded profile, got {other:?}"),
    }
}

#[tokio::test]
async fn test_analyze_brand_ignores_response_body() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/analyze-brand",
        200,
        "not json at all",
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.analyze_brand("Sephora Thailand").await;
    assert_eq!(result, RecoveryResult::Recovered(()));
    assert_eq!(
        server.requests()[0].json(),
        serde_json::json!({ "brand_name": "Sephora Thailand" })
    );
}

#[tokio::test]
async fn test_analyze_influencer_failure_is_reported() {
    let server = StubServer::start(vec![StubRoute::new(
        "POST",
        "/api/v1/analyze-influencer",
        500,
        r#"{"detail":"agent crashed"}"#,
    )])
    .await;
    let client = client_for(&server.base_url);

    let result = client.analyze_influencer("@new_creator").await;
    assert!(result.is_failed());
    assert_eq!(
        server.requests()[0].json(),
        serde_json::json!({ "influencer_name": "@new_creator" })
    );
}
