/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 */
use crate::services::auth::KeyId;

/// API key 認証済みのリクエストに付与されるコンテキスト
///
/// - `key_id` は key の digest 由来の識別子。平文の key は持たない
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub key_id: KeyId,
}

impl ApiKeyCtx {
    pub fn new(key_id: KeyId) -> Self {
        Self { key_id }
    }
}
