//! Bearer-token extraction from the Authorization header.
//!
//! Extraction only lifts the raw token out of the request; whether it is
//! valid and sufficient is decided by an explicit `authorize` call at the
//! start of each protected handler.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;

/// Raw token taken from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for BearerToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(header_value) = req.headers().get(header::AUTHORIZATION) else {
            return ready(Err(AppError::Unauthorized));
        };

        let Ok(header_str) = header_value.to_str() else {
            return ready(Err(AppError::Unauthorized));
        };

        match header_str.strip_prefix("Bearer ") {
            Some(token) if !token.is_empty() => ready(Ok(BearerToken(token.to_string()))),
            _ => ready(Err(AppError::Unauthorized)),
        }
    }
}
