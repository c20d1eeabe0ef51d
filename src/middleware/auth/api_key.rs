//! `Authorization: ApiKey <key>` 検証 → ApiKeyCtx を extensions に入れる
//!
//! - ヘッダの解析は `services::auth::get_api_key` に任せる (ここでは解析しない)
//! - 取り出した key を allow-list (ApiKeyStore) と照合する
//! - 失敗理由 (missing / malformed / unknown) はログにだけ残し、レスポンスは一律 401

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// API key が必要な Router に middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::api_key::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = %err, "api key extraction failed");
            return Err(err.into());
        }
    };

    // key 本体はログに出さない
    let Some(key_id) = state.keys.verify(key) else {
        tracing::warn!("unknown api key");
        return Err(AppError::Unauthorized);
    };

    tracing::debug!(%key_id, "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ApiKeyCtx::new(key_id));

    Ok(next.run(req).await)
}
