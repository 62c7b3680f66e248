/*
 * Responsibility
 * - handler / middleware から呼ばれる純粋な処理 (header 解析など)
 * - axum の Request/Response には触れない
 */
pub mod auth;
