/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http (request id / limit / timeout / trace), cors, auth (API key)
 */
pub mod auth;
pub mod cors;
pub mod http;
