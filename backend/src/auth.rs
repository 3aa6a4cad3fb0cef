//! Admin authentication.
//!
//! A single shared password unlocks the admin panel. A successful login
//! issues an opaque bearer token that is held in memory until it expires or
//! the admin logs out.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Clone)]
pub struct AdminSessions {
    tokens: Arc<RwLock<HashMap<Uuid, DateTime<Utc>>>>,
    ttl: Duration,
}

impl AdminSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Start a session and return its token. Expired sessions are pruned here.
    pub async fn issue(&self) -> Uuid {
        let now = Utc::now();
        let token = Uuid::new_v4();

        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.insert(token, now + self.ttl);

        token
    }

    pub async fn is_valid(&self, token: &Uuid) -> bool {
        self.tokens
            .read()
            .await
            .get(token)
            .is_some_and(|expires_at| *expires_at > Utc::now())
    }

    pub async fn revoke(&self, token: &Uuid) {
        self.tokens.write().await.remove(token);
    }
}

/// Compare without short-circuiting on the first differing byte.
pub fn password_matches(candidate: &str, expected: &str) -> bool {
    let (a, b) = (candidate.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn extract_token_from_header(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim()
        .parse()
        .ok()
}

/// Extractor guarding admin routes. Holds the token so logout can revoke it.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub token: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_header(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Missing authentication"))?;

        if !state.sessions.is_valid(&token).await {
            return Err(ApiError::unauthorized("Invalid or expired session"));
        }

        Ok(AdminSession { token })
    }
}
