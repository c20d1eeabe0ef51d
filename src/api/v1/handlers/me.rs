/*
 * Responsibility
 * - GET /me (認証済みの API key が誰なのかを返す)
 * - 認証は middleware 済み。handler は ApiKeyCtxExtractor を受け取るだけ
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::ApiKeyCtxExtractor};

pub async fn me(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        key_id: ctx.key_id.as_str().to_owned(),
    })
}
