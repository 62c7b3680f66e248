/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/me は API key 必須 (route_layer で middleware を掛ける)
 */
use axum::{Router, routing::get};

use crate::middleware::auth::api_key;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::me};

pub fn routes() -> Router<AppState> {
    let protected = api_key::apply(Router::new().route("/me", get(me)));

    Router::new().route("/health", get(health)).merge(protected)
}
