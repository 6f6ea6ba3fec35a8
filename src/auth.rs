use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{FromRef, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    routing::post,
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::AppState;

pub const SESSION_COOKIE: &str = "session";

/// The single username/password pair accepted for login and Basic auth.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// In-memory set of live session tokens minted by form login.
/// Basic auth never touches it; logout revokes a token.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub async fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.write().await.insert(token.clone());
        token
    }

    pub async fn contains(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }

    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }
}

#[derive(Clone)]
pub struct AuthState {
    pub credentials: Credentials,
    pub sessions: SessionStore,
}

impl AuthState {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            sessions: SessionStore::default(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        username == self.credentials.username && password == self.credentials.password
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

/// Login and logout are always reachable, no credential required.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

async fn login(
    State(auth): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, StatusCode), AppError> {
    if !auth.matches(&form.username, &form.password) {
        return Err(AppError::Unauthorized("invalid username or password".to_string()));
    }

    let token = auth.sessions.create().await;
    tracing::info!("{} Session established for user: {}", API_NAME, form.username);

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();
    Ok((jar.add(cookie), StatusCode::NO_CONTENT))
}

async fn logout(State(auth): State<AuthState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        auth.sessions.revoke(cookie.value()).await;
        tracing::info!("{} Session revoked", API_NAME);
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

/// Gate for the car and maintenance resource prefixes. A live session cookie
/// or a valid `Authorization: Basic` header establishes the principal.
pub async fn require_auth(
    State(auth): State<AuthState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if auth.sessions.contains(cookie.value()).await {
            return Ok(next.run(request).await);
        }
    }

    if let Some(value) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some((username, password)) = decode_basic(value) {
            if auth.matches(&username, &password) {
                return Ok(next.run(request).await);
            }
        }
    }

    Err(AppError::Unauthorized("authentication required".to_string()))
}

fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_should_extract_username_and_password() {
        // base64("admin:password")
        let decoded = decode_basic("Basic YWRtaW46cGFzc3dvcmQ=").unwrap();
        assert_eq!(decoded, ("admin".to_string(), "password".to_string()));
    }

    #[test]
    fn test_decode_basic_should_keep_colons_in_password() {
        // base64("admin:pa:ss")
        let decoded = decode_basic("Basic YWRtaW46cGE6c3M=").unwrap();
        assert_eq!(decoded, ("admin".to_string(), "pa:ss".to_string()));
    }

    #[test]
    fn test_decode_basic_should_reject_other_schemes() {
        assert!(decode_basic("Bearer abc123").is_none());
    }

    #[test]
    fn test_decode_basic_should_reject_invalid_base64() {
        assert!(decode_basic("Basic !!!not-base64!!!").is_none());
    }

    #[tokio::test]
    async fn test_session_store_should_round_trip_tokens() {
        let store = SessionStore::default();
        let token = store.create().await;
        assert!(store.contains(&token).await);

        store.revoke(&token).await;
        assert!(!store.contains(&token).await);
    }

    #[tokio::test]
    async fn test_session_store_should_reject_unknown_tokens() {
        let store = SessionStore::default();
        assert!(!store.contains("no-such-token").await);
    }
}
