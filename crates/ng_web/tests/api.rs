use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ng_core::{ArticleStorage, Error, Result};
use ng_inference::DummyModel;
use ng_scrapers::{ArticleGenerator, DuckDuckGoSearch, MainTextScraper, SearchEngine};
use ng_storage::InMemoryStorage;
use ng_web::{create_app, AppState};

struct BrokenSearch;

#[async_trait]
impl SearchEngine for BrokenSearch {
    fn name(&self) -> &str {
        "broken"
    }

    async fn search(&self, _query: &str) -> Result<Vec<String>> {
        Err(Error::Search("search page unavailable".to_string()))
    }
}

fn app_with(search: Arc<dyn SearchEngine>, storage: Arc<InMemoryStorage>) -> Router {
    let generator = ArticleGenerator::new(
        search,
        Arc::new(MainTextScraper::new().unwrap()),
        Arc::new(DummyModel::new()),
        storage,
    );
    create_app(AppState::new(generator))
}

fn offline_app(storage: Arc<InMemoryStorage>) -> Router {
    app_with(Arc::new(BrokenSearch), storage)
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn long_page(label: &str) -> String {
    format!(
        "<html><body><nav>skip me</nav><article><h1>{}</h1>\n<p>{}</p></article></body></html>",
        label,
        "The committee reviewed the proposal in detail. ".repeat(10)
    )
}

fn results_page(targets: &[String]) -> String {
    let anchors: String = targets
        .iter()
        .map(|t| {
            format!(
                r#"<a class="result__a" href="//duckduckgo.com/l/?uddg={}&amp;rut=x">r</a>"#,
                urlencoding::encode(t)
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", anchors)
}

#[tokio::test]
async fn generate_rejects_missing_fields() {
    let storage = Arc::new(InMemoryStorage::new());

    let cases = [
        json!({}),
        json!({"topic": "Rust", "keywords": "async", "wordCount": 200}),
        json!({"topic": "", "keywords": "async", "wordCount": 200, "author": "a@example.com"}),
        json!({"topic": "Rust", "keywords": "async", "wordCount": 0, "author": "a@example.com"}),
        json!({"topic": "Rust", "keywords": "async", "wordCount": "lots", "author": "a@example.com"}),
    ];
    for body in cases {
        let (status, value) = send(offline_app(storage.clone()), "POST", "/api/generate", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value, json!({"error": "Missing required fields"}));
    }

    let (status, _) = send(offline_app(storage.clone()), "POST", "/api/generate", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(storage.list_articles(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn generate_failure_is_generic_500() {
    let storage = Arc::new(InMemoryStorage::new());
    let body = json!({"topic": "Rust", "keywords": "async", "wordCount": 200, "author": "a@example.com"});

    let (status, value) = send(offline_app(storage.clone()), "POST", "/api/generate", Some(body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value, json!({"error": "Failed to generate article"}));
    assert!(storage.list_articles(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn generate_end_to_end_against_mock_web() {
    let server = MockServer::start().await;
    let targets = vec![
        format!("{}/news/one", server.uri()),
        format!("{}/news/short", server.uri()),
        format!("{}/news/two", server.uri()),
        format!("{}/news/three", server.uri()),
    ];

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&targets)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news/one"))
        .respond_with(ResponseTemplate::new(200).set_body_string(long_page("One")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news/short"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<article>Too short.</article>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news/two"))
        .respond_with(ResponseTemplate::new(200).set_body_string(long_page("Two")))
        .expect(1)
        .mount(&server)
        .await;
    // Only the top three results are visited
    Mock::given(method("GET"))
        .and(path("/news/three"))
        .respond_with(ResponseTemplate::new(200).set_body_string(long_page("Three")))
        .expect(0)
        .mount(&server)
        .await;

    let storage = Arc::new(InMemoryStorage::new());
    let search = DuckDuckGoSearch::new().unwrap().with_base_url(server.uri());
    let app = app_with(Arc::new(search), storage.clone());

    let body = json!({"topic": "Budget vote", "keywords": "parliament,finance", "wordCount": 9, "author": "editor@example.com"});
    let (status, value) = send(app.clone(), "POST", "/api/generate", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "success");
    assert_eq!(value["message"], "Article generated successfully");
    let id = value["articleId"].as_str().unwrap().to_string();

    let (status, article) = send(app, "GET", &format!("/api/articles/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(article["title"], "Budget vote - Latest Insights");
    assert_eq!(article["author"], "editor@example.com");
    assert_eq!(article["source"], "AI Generated");
    assert_eq!(article["category"], "Technology");
    assert_eq!(article["sentiment"], "neutral");
    // 9 words over 3 sources: the dummy model keeps 3 words per page
    assert_eq!(article["content"], "One The committee\n\nTwo The committee");
}

#[tokio::test]
async fn create_and_read_articles() {
    let storage = Arc::new(InMemoryStorage::new());
    let content = "Local teams ".repeat(20);

    let form = json!({
        "title": "Derby day",
        "content": content,
        "category": "Sports",
        "source": "Sports Central",
        "sentiment": "positive",
        "author": "fan@example.com",
        "imageUrl": "https://img.example.com/derby.jpg"
    });
    let (status, created) = send(offline_app(storage.clone()), "POST", "/api/articles", Some(form)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["sentiment_explanation"], "User-generated content");
    assert_eq!(created["image_url"], "https://img.example.com/derby.jpg");
    let summary = created["summary"].as_str().unwrap();
    assert_eq!(summary.chars().count(), 153);
    assert!(summary.ends_with("..."));

    let other = json!({
        "title": "Rate decision",
        "content": "Rates held.",
        "category": "Finance",
        "source": "Finance Weekly",
        "sentiment": "neutral"
    });
    let (status, second) = send(offline_app(storage.clone()), "POST", "/api/articles", Some(other)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["author"], "Anonymous");

    let (status, list) = send(offline_app(storage.clone()), "GET", "/api/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = list.as_array().unwrap().iter().map(|a| a["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Rate decision", "Derby day"]);

    let (status, list) = send(offline_app(storage.clone()), "GET", "/api/articles?category=Sports", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["title"], "Derby day");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(offline_app(storage), "GET", &format!("/api/articles/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Derby day");
}

#[tokio::test]
async fn create_rejects_incomplete_form() {
    let storage = Arc::new(InMemoryStorage::new());
    let form = json!({"title": "No body", "category": "Science", "source": "EduTech", "sentiment": "neutral"});

    let (status, value) = send(offline_app(storage.clone()), "POST", "/api/articles", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({"error": "Please fill in all fields"}));

    let form = json!({"title": "t", "content": "c", "category": "Science", "source": "EduTech", "sentiment": "furious"});
    let (status, _) = send(offline_app(storage.clone()), "POST", "/api/articles", Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(storage.list_articles(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_article_is_404() {
    let (status, value) = send(offline_app(Arc::new(InMemoryStorage::new())), "GET", "/api/articles/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value, json!({"error": "Article not found"}));
}
