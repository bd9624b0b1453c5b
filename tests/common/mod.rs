use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use vetflow::config::Config;
use vetflow::db;
use vetflow::models::{CourtSearch, Report, ReportStatus};

pub const SESSION_COOKIE: &str = "vetflow_session";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/recruiters/signup"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("signup request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Login and return the raw response (redirects are not followed).
    pub async fn login_raw(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/recruiters/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed")
    }

    /// Login and return the session token from the Set-Cookie header.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let resp = self.login_raw(email, password).await;
        assert!(
            resp.status().is_redirection(),
            "login did not redirect: {}",
            resp.status()
        );
        assert_eq!(resp.headers()["location"], "/candidates");
        session_token(&resp).expect("login did not set a session cookie")
    }

    /// Signup + login, returning (recruiter_id, session token).
    pub async fn signup_and_login(&self, name: &str, email: &str, password: &str) -> (Uuid, String) {
        let (body, status) = self.signup(name, email, password).await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
        let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
        let token = self.login(email, password).await;
        (id, token)
    }

    /// Make a session-authenticated GET request.
    pub async fn get_auth(&self, path: &str, session: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .header("cookie", format!("{SESSION_COOKIE}={session}"))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make a session-authenticated POST request with a JSON body.
    pub async fn post_auth(&self, path: &str, session: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .header("cookie", format!("{SESSION_COOKIE}={session}"))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Like `post_auth` but returns the raw response, for redirects.
    pub async fn post_auth_raw(&self, path: &str, session: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("cookie", format!("{SESSION_COOKIE}={session}"))
            .json(body)
            .send()
            .await
            .expect("post request failed")
    }

    /// Seed a candidate document for a recruiter directly through the store.
    pub async fn seed_candidate(
        &self,
        recruiter_id: Uuid,
        name: &str,
        report: Option<Report>,
        searches: Vec<CourtSearch>,
    ) -> Uuid {
        let candidate = db::candidates::create(
            &self.pool,
            recruiter_id,
            name,
            &format!("{}@candidates.test", name.to_lowercase().replace(' ', ".")),
            report,
            searches,
        )
        .await
        .expect("failed to seed candidate");
        candidate.id
    }
}

/// Extract the session token from a response's Set-Cookie headers.
pub fn session_token(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| {
            let value = cookie.strip_prefix(&format!("{SESSION_COOKIE}="))?;
            let token = value.split(';').next()?.to_string();
            if token.is_empty() { None } else { Some(token) }
        })
}

pub fn sample_report() -> Report {
    Report {
        status: ReportStatus::Clear,
        adjudication: None,
        package: Some("Employee Pro".to_string()),
        created_at: Some(chrono::Utc::now()),
        completed_at: Some(chrono::Utc::now()),
        turn_around_time: Some("1 day".to_string()),
    }
}

pub fn sample_searches(names: &[&str]) -> Vec<CourtSearch> {
    names
        .iter()
        .map(|name| CourtSearch {
            search: name.to_string(),
            status: "clear".to_string(),
            date: Some(chrono::Utc::now()),
            candidate_id: None,
        })
        .collect()
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("vetflow_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        session_ttl_hours: 24,
        log_level: "warn".to_string(),
    };

    let app = vetflow::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
