//! `Authorization: ApiKey <token>` から API key を取り出す。
//!
//! Responsibility:
//! - header map を読むだけ（変更しない）
//! - 失敗は `ApiKeyError` の 2 種類に分類する
//! - key が正しいかどうか（登録済みか・失効していないか）は見ない

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authorization header で使う scheme 名（大文字小文字を区別する）
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract the API key from the `Authorization` header.
///
/// - header が無い / 値が空 → `MissingHeader`
/// - scheme が `ApiKey` でない、または token が空 → `MalformedHeader`
///
/// The returned key is never empty.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(ApiKeyError::MissingHeader)?;

    // visible ASCII 以外を含む値は scheme を判定できない
    let value = value.to_str().map_err(|_| ApiKeyError::MalformedHeader)?;

    let (scheme, rest) = value
        .split_once(char::is_whitespace)
        .unwrap_or((value, ""));

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedHeader);
    }

    let key = rest.trim_start();
    if key.is_empty() {
        return Err(ApiKeyError::MalformedHeader);
    }

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    fn headers_with(name: &'static str, value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
        headers
    }

    #[test]
    fn authorization_header_cases() {
        struct Case {
            name: &'static str,
            header_value: Option<&'static str>,
            expected: Result<&'static str, ApiKeyError>,
        }

        let cases = [
            Case {
                name: "valid api key",
                header_value: Some("ApiKey xyz123"),
                expected: Ok("xyz123"),
            },
            Case {
                name: "invalid prefix",
                header_value: Some("Bearer abc456"),
                expected: Err(ApiKeyError::MalformedHeader),
            },
            Case {
                name: "missing authorization header",
                header_value: None,
                expected: Err(ApiKeyError::MissingHeader),
            },
            Case {
                name: "missing ApiKey prefix",
                header_value: Some("xyz123"),
                expected: Err(ApiKeyError::MalformedHeader),
            },
            Case {
                name: "ApiKey with empty token",
                header_value: Some("ApiKey "),
                expected: Err(ApiKeyError::MalformedHeader),
            },
            Case {
                name: "bare scheme",
                header_value: Some("ApiKey"),
                expected: Err(ApiKeyError::MalformedHeader),
            },
            Case {
                name: "empty header value",
                header_value: Some(""),
                expected: Err(ApiKeyError::MissingHeader),
            },
            Case {
                name: "scheme is case sensitive",
                header_value: Some("apikey xyz123"),
                expected: Err(ApiKeyError::MalformedHeader),
            },
        ];

        for case in cases {
            let headers = match case.header_value {
                Some(value) => headers_with("authorization", value),
                None => HeaderMap::new(),
            };

            let got = get_api_key(&headers);
            let expected = case.expected.map(str::to_string);
            assert_eq!(got, expected, "case: {}", case.name);
        }
    }

    #[test]
    fn other_header_is_ignored() {
        let headers = headers_with("x-api-key", "test-key");

        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MissingHeader));
    }

    #[test]
    fn separating_whitespace_is_not_part_of_the_key() {
        let headers = headers_with("authorization", "ApiKey \tsk_live_42");

        assert_eq!(get_api_key(&headers).as_deref(), Ok("sk_live_42"));
    }

    #[test]
    fn remainder_after_first_separator_is_kept_whole() {
        let headers = headers_with("authorization", "ApiKey abc def");

        assert_eq!(get_api_key(&headers).as_deref(), Ok("abc def"));
    }

    #[test]
    fn non_ascii_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey caf\xc3\xa9").unwrap(),
        );

        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn first_authorization_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));

        assert_eq!(get_api_key(&headers).as_deref(), Ok("first"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiKeyError::MissingHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }
}
