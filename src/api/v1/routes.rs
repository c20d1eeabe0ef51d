/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は認証なし、/me は API key 必須 (route 単位で middleware を掛ける)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, me::me};
use crate::middleware::auth::api_key;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = api_key::apply(Router::new().route("/me", get(me)), state);

    Router::new()
        .route("/health", get(health))
        .merge(protected)
}
