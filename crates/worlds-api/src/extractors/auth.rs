//! `AuthUser` extractor — reads the requester identifier from the
//! Authorization header and injects a request context.
//!
//! The bearer token *is* the caller's user id. It is trusted as-is: this
//! deployment sits behind a gateway that owns real authentication, so the
//! header is an identity channel, not a security boundary. Services only
//! ever see the resulting opaque [`RequestContext`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use worlds_core::error::AppError;
use worlds_service::context::RequestContext;

use crate::error::ApiError;

/// Extracted requester context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let user_id = Uuid::parse_str(token)
            .map_err(|_| AppError::authentication("Invalid requester identifier"))?;

        Ok(AuthUser(RequestContext::new(user_id)))
    }
}
