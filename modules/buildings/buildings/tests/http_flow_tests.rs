#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Browser-style walk through the HTML routes backed by a SQLite file.

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use buildings::BuildingsModule;
use buildings::config::DatabaseConfig;
use tempfile::TempDir;
use tower::ServiceExt as _;

/// Minimal client that carries the flash cookie between requests.
struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    async fn request(&mut self, method: &str, uri: &str, form: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie);
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_owned())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set) = response.headers().get(SET_COOKIE) {
            let pair = set.to_str().unwrap().split(';').next().unwrap().to_owned();
            self.cookie = if pair.ends_with('=') { None } else { Some(pair) };
        }
        response
    }

    /// Issue a request, follow a redirect if one comes back, return the page.
    async fn visit(&mut self, method: &str, uri: &str, form: Option<&str>) -> (StatusCode, String) {
        let mut response = self.request(method, uri, form).await;
        if response.status() == StatusCode::SEE_OTHER {
            let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
            response = self.request("GET", &location, None).await;
        }
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

async fn start() -> (TempDir, Browser) {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("buildings.db"),
        create_dirs: true,
    };
    let module = BuildingsModule::init(&config).await.unwrap();
    let app = module.register_rest(Router::new());
    (dir, Browser { app, cookie: None })
}

const TOWER_A: &str =
    "name=Tower+A&address=1+Main+St&floors=10&year_built=1990&building_code=TWA-1";

#[tokio::test]
async fn test_full_lifecycle() {
    let (_dir, mut browser) = start().await;

    let (status, page) = browser.visit("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("No buildings found."));

    let (status, page) = browser.visit("POST", "/create", Some(TOWER_A)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Building created successfully"));
    assert!(page.contains("Tower A"));
    assert!(page.contains("href=\"/view/1\""));

    // The notice is shown exactly once.
    let (_, page) = browser.visit("GET", "/", None).await;
    assert!(!page.contains("Building created successfully"));

    let (_, page) = browser
        .visit(
            "POST",
            "/create",
            Some("name=Tower+B&address=2+Main+St&floors=5&year_built=2001&building_code=TWA-1"),
        )
        .await;
    assert!(page.contains("Building code already exists"));

    let (_, page) = browser
        .visit(
            "POST",
            "/update/1",
            Some("name=Tower+A&address=1+Main+St&floors=12&year_built=1990&building_code=TWA-1"),
        )
        .await;
    assert!(page.contains("Building updated successfully"));

    let (_, page) = browser.visit("GET", "/view/1", None).await;
    assert!(page.contains("<dd>12</dd>"));

    let (_, page) = browser.visit("GET", "/delete/1", None).await;
    assert!(page.contains("Building deleted successfully!"));
    assert!(page.contains("No buildings found."));

    let (_, page) = browser.visit("GET", "/view/1", None).await;
    assert!(page.contains("Building not found!"));
}

#[tokio::test]
async fn test_failed_update_keeps_stored_values() {
    let (_dir, mut browser) = start().await;
    browser.visit("POST", "/create", Some(TOWER_A)).await;

    let (status, page) = browser
        .visit(
            "POST",
            "/update/1",
            Some("name=Renamed&address=1+Main+St&floors=ten&year_built=1990&building_code=TWA-1"),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Floors and Year Built must be valid numbers"));
    assert!(page.contains("name=\"name\" value=\"Tower A\""));

    let (_, page) = browser.visit("GET", "/view/1", None).await;
    assert!(page.contains("<dd>Tower A</dd>"));
    assert!(page.contains("<dd>10</dd>"));
}

#[tokio::test]
async fn test_missing_field_on_create_stores_nothing() {
    let (_dir, mut browser) = start().await;

    let (status, page) = browser
        .visit(
            "POST",
            "/create",
            Some("name=&address=1+Main+St&floors=10&year_built=1990&building_code=TWA-1"),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("All fields are required"));
    let (_, page) = browser.visit("GET", "/", None).await;
    assert!(page.contains("No buildings found."));
}

#[tokio::test]
async fn test_markup_in_values_is_escaped() {
    let (_dir, mut browser) = start().await;

    browser
        .visit(
            "POST",
            "/create",
            Some("name=%3Cscript%3E&address=x&floors=1&year_built=2000&building_code=S-1"),
        )
        .await;
    let (_, page) = browser.visit("GET", "/", None).await;

    assert!(page.contains("&lt;script&gt;"));
    assert!(!page.contains("<script>"));
}

#[tokio::test]
async fn test_notices_queue_until_a_page_is_rendered() {
    let (_dir, mut browser) = start().await;

    // Neither redirect is followed, so nothing is shown in between.
    let response = browser.request("POST", "/create", Some(TOWER_A)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let response = browser.request("GET", "/delete/1", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, page) = browser.visit("GET", "/", None).await;
    let created = page.find("Building created successfully").unwrap();
    let deleted = page.find("Building deleted successfully!").unwrap();
    assert!(created < deleted);

    let (_, page) = browser.visit("GET", "/", None).await;
    assert!(!page.contains("successfully"));
}
