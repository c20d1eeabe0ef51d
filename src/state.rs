/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: keys: ApiKeyStore
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::ApiKeyStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub keys: Arc<ApiKeyStore>,
}

impl AppState {
    pub fn new(keys: Arc<ApiKeyStore>) -> Self {
        Self { keys }
    }
}
