use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::http::server::ApiError;
pub mod entities;

/// Validates HS256 bearer tokens minted by the identity service.
#[derive(Clone)]
pub struct JwtValidator {
    decoding_key: Arc<DecodingKey>,
    validation: Validation,
}

/// The claims this service reads. `sub` carries the user id.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

impl JwtValidator {
    pub fn new(secret_key: &str) -> Self {
        let validation = Validation::new(Algorithm::HS256);
        Self {
            decoding_key: Arc::new(DecodingKey::from_secret(secret_key.as_bytes())),
            validation,
        }
    }

    fn identify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

pub struct AuthMiddleware;

impl FromRequestParts<JwtValidator> for AuthMiddleware {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &JwtValidator,
    ) -> Result<Self, Self::Rejection> {
        tracing::debug!(
            "Authentication middleware: checking request to {}",
            parts.uri
        );

        // Extract the Authorization header
        let auth_header = parts.headers.get(axum::http::header::AUTHORIZATION);

        if auth_header.is_none() {
            tracing::warn!("Authentication failed: Authorization header missing");
            return Err(ApiError::Unauthorized);
        }

        // Ensure the header exists and starts with "Bearer "
        let auth_value = auth_header.unwrap().to_str().map_err(|e| {
            tracing::warn!(
                "Authentication failed: Authorization header is not valid UTF-8: {}",
                e
            );
            ApiError::Unauthorized
        })?;

        let token = auth_value.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!(
                "Authentication failed: Authorization header doesn't start with 'Bearer '"
            );
            ApiError::Unauthorized
        })?;

        // Validate the token signature and expiry
        let claims = state.identify(token).map_err(|e| {
            tracing::warn!("Authentication failed: token validation failed: {:?}", e);
            ApiError::Unauthorized
        })?;

        let user_id = Uuid::try_parse(&claims.sub).map_err(|e| {
            tracing::error!(
                "Authentication failed: Invalid UUID in subject claim '{}': {}",
                claims.sub,
                e
            );
            ApiError::Unauthorized
        })?;

        let user_identity = entities::UserIdentity { user_id };

        tracing::debug!("Authentication successful for user: {}", user_id);

        // Add auth state to request
        parts.extensions.insert(user_identity);
        Ok(Self)
    }
}
