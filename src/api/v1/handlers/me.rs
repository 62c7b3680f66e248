/*
 * Responsibility
 * - GET /me (API key 必須)
 * - middleware が取り出した key を伏せ字で返す
 */
use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::services::auth::API_KEY_SCHEME;

pub async fn me(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        authenticated: true,
        scheme: API_KEY_SCHEME,
        key_hint: ctx.key_hint(),
    })
}
