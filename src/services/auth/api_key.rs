/*
 * Responsibility
 * - `Authorization: ApiKey <key>` ヘッダから API key を取り出す
 * - 取り出すだけ。key の照合 (store) やログ出力は呼び出し側 (middleware) の責務
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// `Authorization` ヘッダの最初の値を `ApiKey <key>` として解釈し、`<key>` を返す。
///
/// - 同名ヘッダが複数ある場合も、最初の値しか見ない
/// - scheme は大文字小文字を区別する (`apikey` は不可)
/// - key 部分は trim しない。scheme 直後の 1 文字の空白以降をそのまま返す
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?;

    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    // to_str() は visible ASCII しか通さないので、UTF-8 として読む
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, key) = value
        .split_once(' ')
        .ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME || key.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    fn headers_with(values: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &v in values {
            headers.append(header::AUTHORIZATION, HeaderValue::from_static(v));
        }
        headers
    }

    #[test]
    fn missing_header_is_no_auth_header() {
        assert_eq!(get_api_key(&HeaderMap::new()), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn empty_value_is_no_auth_header() {
        assert_eq!(get_api_key(&headers_with(&[""])), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn other_headers_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("ApiKey abc"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn scheme_without_key_is_malformed() {
        assert_eq!(
            get_api_key(&headers_with(&["ApiKey"])),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn trailing_space_without_key_is_malformed() {
        assert_eq!(
            get_api_key(&headers_with(&["ApiKey "])),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert_eq!(
            get_api_key(&headers_with(&["Bearer sometoken"])),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert_eq!(
            get_api_key(&headers_with(&["apikey super-secret-key"])),
            Err(ApiKeyError::MalformedHeader)
        );
        assert_eq!(
            get_api_key(&headers_with(&["APIKEY super-secret-key"])),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn leading_space_gives_empty_scheme() {
        assert_eq!(
            get_api_key(&headers_with(&[" ApiKey abc"])),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn valid_header_returns_key() {
        assert_eq!(
            get_api_key(&headers_with(&["ApiKey super-secret-key"])),
            Ok("super-secret-key")
        );
    }

    #[test]
    fn key_is_returned_verbatim_after_first_space() {
        // 2 個目以降の空白は key の一部として残る
        assert_eq!(
            get_api_key(&headers_with(&["ApiKey abc def "])),
            Ok("abc def ")
        );
        assert_eq!(get_api_key(&headers_with(&["ApiKey  abc"])), Ok(" abc"));
        assert_eq!(get_api_key(&headers_with(&["ApiKey AbC=="])), Ok("AbC=="));
    }

    #[test]
    fn header_name_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"AUTHORIZATION").unwrap(),
            HeaderValue::from_static("ApiKey k1"),
        );
        assert_eq!(get_api_key(&headers), Ok("k1"));
    }

    #[test]
    fn only_first_value_is_consulted() {
        assert_eq!(
            get_api_key(&headers_with(&["ApiKey first", "ApiKey second"])),
            Ok("first")
        );
        assert_eq!(
            get_api_key(&headers_with(&["Bearer token", "ApiKey valid"])),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn utf8_key_is_returned_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xe3\x81\x82").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Ok("あ"));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str("ApiKey ключ").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Ok("ключ"));
    }

    #[test]
    fn non_utf8_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xff\xfe").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn repeated_calls_give_same_result() {
        let headers = headers_with(&["ApiKey super-secret-key"]);
        assert_eq!(get_api_key(&headers), get_api_key(&headers));

        let headers = headers_with(&["Bearer x"]);
        assert_eq!(get_api_key(&headers), get_api_key(&headers));
    }
}
