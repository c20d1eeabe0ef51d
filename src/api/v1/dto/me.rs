/*
 * Responsibility
 * - GET /me の response DTO
 * - key 本体は返さない (KeyId のみ)
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub key_id: String,
}
