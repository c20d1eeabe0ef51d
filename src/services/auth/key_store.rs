/*
 * Responsibility
 * - 許可された API key の一覧 (allow-list) を保持し、照合する
 * - 平文は保持しない。SHA-256 digest だけを持つ
 * - ログ/レスポンスに出してよい識別子 (KeyId) を digest から作る
 */
use std::collections::HashMap;
use std::fmt;

use sha2::{Digest, Sha256};

/// KeyId として使う digest の hex 文字数
const KEY_ID_LEN: usize = 16;

type KeyDigest = [u8; 32];

/// API key の識別子 (SHA-256 の先頭 16 hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyId(String);

impl KeyId {
    fn from_digest(digest: &KeyDigest) -> Self {
        let mut id = hex::encode(digest);
        id.truncate(KEY_ID_LEN);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiKeyStore {
    keys: HashMap<KeyDigest, KeyId>,
}

impl ApiKeyStore {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keys
            .into_iter()
            .map(|k| {
                let digest = digest(k.as_ref());
                let id = KeyId::from_digest(&digest);
                (digest, id)
            })
            .collect();

        Self { keys }
    }

    /// 登録済みの key なら KeyId を返す
    pub fn verify(&self, key: &str) -> Option<KeyId> {
        self.keys.get(&digest(key)).cloned()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

fn digest(key: &str) -> KeyDigest {
    Sha256::digest(key.as_bytes()).into()
}
