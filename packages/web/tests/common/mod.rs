//! In-process test client for the Warbler router.

#![allow(dead_code)]

use api::User;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use serde::Serialize;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

const MAX_REDIRECTS: usize = 5;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub location: Option<String>,
    pub body: String,
}

/// The router over a fresh database, plus a cookie jar holding the session id.
pub struct TestApp {
    _dir: TempDir,
    pub pool: SqlitePool,
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!("sqlite://{}", dir.path().join("warbler.db").display());
        let pool = api::db::connect(&url, 2).await.expect("connect test database");
        let store = warbler::session_store(&pool).await.expect("session store");
        let router = warbler::app(pool.clone(), store, &warbler::settings::Session::default());

        Self {
            _dir: dir,
            pool,
            router,
            cookie: None,
        }
    }

    /// Sign up a user directly through the model layer.
    pub async fn user(&self, username: &str, email: &str, password: &str) -> User {
        User::signup(&self.pool, username, email, password, None)
            .await
            .expect("signup")
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let mut request = request;
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().expect("cookie header"));
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            let value = value.to_str().expect("ascii set-cookie");
            self.store_cookie(value);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().expect("ascii location").to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        TestResponse {
            status,
            headers,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn store_cookie(&mut self, set_cookie: &str) {
        let pair = set_cookie.split(';').next().unwrap_or_default().trim();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let expired = set_cookie.to_ascii_lowercase().contains("max-age=0");
        if value.is_empty() || expired {
            self.cookie = None;
        } else {
            self.cookie = Some(format!("{name}={value}"));
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }

    pub async fn post_form<T: Serialize + ?Sized>(&mut self, uri: &str, form: &T) -> TestResponse {
        let body = serde_urlencoded::to_string(form).expect("encode form");
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request");
        self.send(request).await
    }

    pub async fn post(&mut self, uri: &str) -> TestResponse {
        self.post_form(uri, &[] as &[(&str, &str)]).await
    }

    /// Follow `Location` headers with GETs until a non-redirect response.
    pub async fn follow(&mut self, mut response: TestResponse) -> TestResponse {
        for _ in 0..MAX_REDIRECTS {
            if !response.status.is_redirection() {
                return response;
            }
            let location = response.location.clone().expect("redirect without location");
            response = self.get(&location).await;
        }
        panic!("too many redirects");
    }

    pub async fn get_followed(&mut self, uri: &str) -> TestResponse {
        let response = self.get(uri).await;
        self.follow(response).await
    }

    pub async fn post_followed(&mut self, uri: &str) -> TestResponse {
        let response = self.post(uri).await;
        self.follow(response).await
    }

    pub async fn post_form_followed<T: Serialize + ?Sized>(&mut self, uri: &str, form: &T) -> TestResponse {
        let response = self.post_form(uri, form).await;
        self.follow(response).await
    }

    pub async fn login_as(&mut self, username: &str, password: &str) {
        let response = self
            .post_form("/login", &[("username", username), ("password", password)])
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "login should redirect");
        assert!(self.cookie.is_some(), "login should set the session cookie");
    }
}

/// Text of each `<li class="stat">` item, markup stripped.
pub fn stat_values(body: &str) -> Vec<String> {
    body.split(r#"<li class="stat">"#)
        .skip(1)
        .map(|segment| {
            let item = segment.split("</li>").next().unwrap_or_default();
            let count = item.split("<h4>").nth(1).unwrap_or_default();
            strip_tags(count).trim().to_string()
        })
        .collect()
}

fn strip_tags(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
