//! Integration tests for the API client against a mock backend

use fairway_client::ApiClient;
use fairway_core::types::{ContactRequest, ReviewSubmission, SubscribeRequest};
use fairway_core::{Error, Partner, PartnerType};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri())).expect("client should build")
}

#[tokio::test]
async fn test_list_partners_hits_typed_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/golf-courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "alcaidesa-links",
                "name": "Alcaidesa Links",
                "location": "La Alcaidesa",
                "holes": 18,
                "par": 72
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let partners = client
        .list_partners(PartnerType::Golf)
        .await
        .expect("listing should succeed");

    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].id, "alcaidesa-links");
    assert_eq!(partners[0].attribute("holes"), Some(&json!(18)));
}

#[tokio::test]
async fn test_create_partner_posts_to_collection() {
    let server = MockServer::start().await;

    let mut partner = Partner {
        id: "la-sala".to_string(),
        name: "La Sala".to_string(),
        location: "Puerto Banus".to_string(),
        ..Partner::default()
    };
    partner.set_attribute("cuisine_type", json!("Mediterranean"));

    Mock::given(method("POST"))
        .and(path("/api/restaurants"))
        .and(body_json(&partner))
        .respond_with(ResponseTemplate::new(201).set_body_json(&partner))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .create_partner(PartnerType::Restaurants, &partner)
        .await
        .expect("creation should succeed");
}

#[tokio::test]
async fn test_update_partner_puts_by_id() {
    let server = MockServer::start().await;

    let partner = Partner {
        id: "ocean-club".to_string(),
        name: "Ocean Club".to_string(),
        ..Partner::default()
    };

    Mock::given(method("PUT"))
        .and(path("/api/beach-clubs/ocean-club"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&partner))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .update_partner(PartnerType::BeachClubs, &partner)
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn test_delete_partner_maps_backend_detail() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/hotels/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Hotel not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .delete_partner(PartnerType::Hotels, "gone")
        .await
        .expect_err("delete should fail");

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Hotel not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_detail_gets_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cafe-bars"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list_partners(PartnerType::CafeBars)
        .await
        .expect_err("listing should fail");

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("500"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_partner_offers_filter_is_query_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/partner-offers"))
        .and(query_param("type", "beach club"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let offers = client
        .partner_offers(Some("beach club"))
        .await
        .expect("filtered listing should succeed");
    assert!(offers.is_empty());
}

#[tokio::test]
async fn test_submit_contact_and_subscribe() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/newsletter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    client
        .submit_contact(&ContactRequest {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
            country: "Sweden".to_string(),
            inquiry_type: Some("golf".to_string()),
            message: "Tee times in October?".to_string(),
        })
        .await
        .expect("contact submission should succeed");

    client
        .subscribe(&SubscribeRequest {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            country: Some("Sweden".to_string()),
        })
        .await
        .expect("subscription should succeed");
}

#[tokio::test]
async fn test_submit_review_uses_submission_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reviews/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "pending" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .submit_review(&ReviewSubmission {
            user_name: "Lars".to_string(),
            country: Some("Denmark".to_string()),
            rating: 5,
            title: Some("Perfect week".to_string()),
            text: "Everything just worked.".to_string(),
            course_played: Some("Valderrama".to_string()),
        })
        .await
        .expect("review submission should succeed");
}

#[tokio::test]
async fn test_review_moderation_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "r1", "user_name": "Lars", "rating": 5, "text": "Great" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/reviews/r1/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/reviews/r2/reject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let pending = client.pending_reviews().await.expect("pending list");
    assert_eq!(pending.len(), 1);
    assert!(!pending[0].approved);

    client.approve_review("r1").await.expect("approve");
    client.reject_review("r2").await.expect("reject");
}

#[tokio::test]
async fn test_review_stats_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "average_rating": 4.6,
            "total_reviews": 12,
            "rating_distribution": { "4": 3, "5": 9 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let stats = client.review_stats().await.expect("stats");
    assert_eq!(stats.total_reviews, 12);
    assert_eq!(stats.average_rating, 4.6);
    assert_eq!(stats.rating_distribution.get(&5), Some(&9));
    assert_eq!(stats.rating_distribution.get(&1), None);
}

#[tokio::test]
async fn test_current_user_anonymous_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not signed in" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client.current_user().await.expect("anonymous is not an error");
    assert_eq!(user, None);
}

#[tokio::test]
async fn test_current_user_returns_identity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Admin",
            "email": "admin@example.com",
            "picture": "https://example.com/a.png"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client
        .current_user()
        .await
        .expect("identity lookup")
        .expect("a session exists");
    assert_eq!(user.email, "admin@example.com");
}

#[tokio::test]
async fn test_blog_post_404_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/blog/missing-post"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found" })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .blog_post("missing-post")
        .await
        .expect_err("missing post should fail");
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_transport_error_when_backend_unreachable() {
    // Port 1 is never listening.
    let client = ApiClient::new("http://127.0.0.1:1/api").expect("client should build");
    let err = client
        .list_reviews()
        .await
        .expect_err("unreachable backend should fail");
    assert!(matches!(err, Error::Transport(_)));
}
