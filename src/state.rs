/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - API key の検証ストアを持たないので今は空
 * - Clone 前提で持つ
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
