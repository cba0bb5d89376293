//! Test app backed by a throwaway SQLite file, driven one request at a time.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fyyur::{app, db, AppState};
use sqlx::SqlitePool;
use tempfile::TempDir;
use time::{macros::format_description, Duration};
use tower::util::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

pub struct TestApp {
    pub app: Router,
    pub db_pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let db_pool = db::connect(&db_url).await.expect("Failed to open test database");

        Self {
            app: app(AppState { db_pool: db_pool.clone() }, false),
            db_pool,
            _temp_dir: temp_dir,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, cookie: Option<&str>, form: Option<&[(&str, &str)]>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let body = match form {
            Some(pairs) => {
                request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form_body(pairs))
            }
            None => Body::empty(),
        };

        let response = self.app.clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let location = response.headers().get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_owned());
        let cookie = response.headers().get(header::SET_COOKIE)
            .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_owned());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            location,
            cookie,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        self.send(Method::POST, uri, None, Some(form)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None, None).await
    }

    pub async fn create_venue(&self, name: &str, city: &str, state: &str) -> i64 {
        let response = self.post("/venues/create", &[("name", name), ("city", city), ("state", state)]).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        last_id(&self.db_pool, "venues").await
    }

    pub async fn create_artist(&self, name: &str) -> i64 {
        let response = self.post(
            "/artists/create",
            &[("name", name), ("city", "Oakland"), ("state", "CA"), ("image_link", "https://img.example/artist.png")],
        ).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        last_id(&self.db_pool, "artists").await
    }

    pub async fn create_show(&self, artist_id: i64, venue_id: i64, start_time: &str) {
        let (artist_id, venue_id) = (artist_id.to_string(), venue_id.to_string());
        let response = self.post(
            "/shows/create",
            &[("artist_id", artist_id.as_str()), ("venue_id", venue_id.as_str()), ("start_time", start_time)],
        ).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    }
}

async fn last_id(db_pool: &SqlitePool, table: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as(&format!("SELECT MAX(id) FROM {table}"))
        .fetch_one(db_pool)
        .await
        .unwrap();
    id
}

/// A start time `offset` away from now, the way the show form takes it.
pub fn start_time(offset: Duration) -> String {
    (db::now() + offset)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .unwrap()
}

fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs.iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(text: &str) -> String {
    let mut encoded = String::new();
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(byte as char),
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
