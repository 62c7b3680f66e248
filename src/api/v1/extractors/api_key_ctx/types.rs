/*
 * Responsibility
 * - Handler から見える「API key 認証済みコンテキスト」の型
 * - middleware が header を解析して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key が登録済みかどうかの検証はここでは行わない
 */

const HINT_MIN_KEY_CHARS: usize = 8;

/// API key 付きリクエストに付与されるコンテキスト
#[derive(Clone)]
pub struct ApiKeyCtx {
    key: String,
}

impl ApiKeyCtx {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// ログ・レスポンス用に末尾 4 文字だけ残した表記 (`***1234`)
    ///
    /// 8 文字以下の key は末尾も出さない
    pub fn key_hint(&self) -> String {
        let count = self.key.chars().count();
        if count <= HINT_MIN_KEY_CHARS {
            return "***".to_string();
        }
        let tail: String = self.key.chars().skip(count - 4).collect();
        format!("***{tail}")
    }
}

// key 本体を Debug 出力に載せない
impl std::fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("key", &self.key_hint())
            .finish()
    }
}
