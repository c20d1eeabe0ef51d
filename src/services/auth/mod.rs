pub mod api_key;
pub mod key_store;

pub use api_key::{ApiKeyError, get_api_key};
pub use key_store::{ApiKeyStore, KeyId};
