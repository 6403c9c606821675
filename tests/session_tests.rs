use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use novelquest::client::{ApiClient, Session, SessionPhase, GENERIC_ERROR};
use novelquest::models::{BookPreferences, RecommendationRequest};

fn base_search() -> RecommendationRequest {
    RecommendationRequest::Personalized(BookPreferences {
        favorite_books: "Dune".to_string(),
        least_favorite_books: String::new(),
        preferred_genres: "Sci-Fi".to_string(),
        favorite_authors: "Frank Herbert".to_string(),
        excluded_titles: vec![],
    })
}

fn recommendations(titles: &[&str]) -> Value {
    titles
        .iter()
        .map(|title| {
            json!({
                "title": title,
                "author": "Someone",
                "genre": "Sci-Fi",
                "description": "A book."
            })
        })
        .collect()
}

#[tokio::test]
async fn test_submit_records_shown_titles() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(recommendations(&["Hyperion", "Foundation"])),
        )
        .mount(&api)
        .await;

    let mut session = Session::new(ApiClient::new(api.uri()));
    session.submit(base_search()).await;

    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.error().is_none());
    assert_eq!(session.recommendations().len(), 2);
    assert_eq!(session.excluded_titles(), ["Hyperion", "Foundation"]);
}

#[tokio::test]
async fn test_refresh_accumulates_the_union_of_shown_titles() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(recommendations(&["Hyperion", "Foundation"])),
        )
        .up_to_n_times(1)
        .mount(&api)
        .await;
    // Second call returns one repeat and one new title.
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(recommendations(&["Foundation", "Ringworld"])),
        )
        .mount(&api)
        .await;

    let mut session = Session::new(ApiClient::new(api.uri()));
    session.submit(base_search()).await;
    session.refresh().await.unwrap();

    assert_eq!(
        session.excluded_titles(),
        ["Hyperion", "Foundation", "Ringworld"]
    );

    // The refresh request carried the titles shown so far.
    let requests = api.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let refresh_body: Value = requests[1].body_json().unwrap();
    assert_eq!(refresh_body["excludedTitles"], json!(["Hyperion", "Foundation"]));
}

#[tokio::test]
async fn test_new_search_resets_exclusions_before_sending() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recommendations(&["Hyperion"])))
        .mount(&api)
        .await;

    let mut session = Session::new(ApiClient::new(api.uri()));
    session.submit(base_search()).await;
    session.refresh().await.unwrap();
    session.submit(base_search()).await;

    // The new base search went out with no exclusions at all.
    let requests = api.received_requests().await.unwrap();
    let third_body: Value = requests[2].body_json().unwrap();
    assert!(third_body.get("excludedTitles").is_none());
    assert_eq!(session.excluded_titles(), ["Hyperion"]);
}

#[tokio::test]
async fn test_refresh_reuses_last_submitted_preferences() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_partial_json(json!({ "favoriteBooks": "Dune" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(recommendations(&["Hyperion"])))
        .expect(2)
        .mount(&api)
        .await;

    let mut session = Session::new(ApiClient::new(api.uri()));
    session.submit(base_search()).await;
    session.refresh().await.unwrap();
}

#[tokio::test]
async fn test_refresh_without_a_search_is_an_error() {
    let mut session = Session::new(ApiClient::new("http://unused.local"));
    assert!(session.refresh().await.is_err());
}

#[tokio::test]
async fn test_any_failure_collapses_to_one_error_string() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Invalid AI response format" })),
        )
        .mount(&api)
        .await;

    let mut session = Session::new(ApiClient::new(api.uri()));
    session.submit(base_search()).await;

    assert_eq!(session.error(), Some(GENERIC_ERROR));
    assert!(session.recommendations().is_empty());
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn test_reset_clears_the_whole_session() {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recommendations(&["Hyperion"])))
        .mount(&api)
        .await;

    let mut session = Session::new(ApiClient::new(api.uri()));
    session.submit(base_search()).await;
    session.reset();

    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.recommendations().is_empty());
    assert!(session.excluded_titles().is_empty());
    assert!(session.error().is_none());
    assert!(session.refresh().await.is_err());
}
