use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::ApiKeyCtx;

/// API key middleware が検証済みの ApiKeyCtx を handler に渡す
///
/// middleware を通っていない route で使われた場合は、middleware の 401 と同じ形
/// (JSON body + WWW-Authenticate) で拒否する
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl FromRequestParts<AppState> for ApiKeyCtxExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<ApiKeyCtx>()
            .ok_or(AppError::Unauthorized)?;

        Ok(Self(ctx.clone()))
    }
}
