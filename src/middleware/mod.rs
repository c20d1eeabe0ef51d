/*
 * Responsibility
 * - middlware の公開インターフェース (re-export)
 * - pub fn apply(...) を各モジュールに持たせる
 */
pub mod auth;
pub mod http;
