//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the token service, and injects the verified identity into
//! request extensions. Status codes follow the gate contract: a missing
//! header is 401, a presented-but-rejected token is 403, with
//! `TOKEN_EXPIRED` distinguished so clients know to refresh instead of
//! re-login.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::{ErrorUnauthorized, InternalError};
use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use dh_core::domain::entities::token::Claims;
use dh_core::errors::TokenError;
use dh_core::services::TokenService;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Verified identity injected into requests behind the gate
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: i64,
    /// Display name
    pub name: String,
    /// Normalized email
    pub email: String,
    /// Role reference, if assigned
    pub role: Option<i64>,
}

impl AuthContext {
    /// Creates an authentication context from verified JWT claims.
    pub fn from_claims(claims: Claims) -> Result<Self, TokenError> {
        let user_id = claims.user_id().map_err(|_| TokenError::TokenMalformed)?;
        Ok(Self {
            user_id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates the middleware around the process-wide token service.
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let body = ErrorResponse::new("MISSING_TOKEN", "Missing token")
                        .to_response(StatusCode::UNAUTHORIZED);
                    return Err(InternalError::from_response("missing token", body).into());
                }
            };

            let claims = match token_service.verify_access_token(&token) {
                Ok(claims) => claims,
                Err(TokenError::TokenExpired) => {
                    let body = ErrorResponse::new("TOKEN_EXPIRED", "Token expired")
                        .to_response(StatusCode::FORBIDDEN);
                    return Err(InternalError::from_response("token expired", body).into());
                }
                Err(_) => {
                    let body = ErrorResponse::new("INVALID_TOKEN", "Invalid token")
                        .to_response(StatusCode::FORBIDDEN);
                    return Err(InternalError::from_response("invalid token", body).into());
                }
            };

            let context = match AuthContext::from_claims(claims) {
                Ok(context) => context,
                Err(_) => {
                    let body = ErrorResponse::new("INVALID_TOKEN", "Invalid token")
                        .to_response(StatusCode::FORBIDDEN);
                    return Err(InternalError::from_response("invalid claims", body).into());
                }
            };

            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for handlers behind the gate
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
