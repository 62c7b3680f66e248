//! `Authorization: ApiKey <token>` を解析 → ApiKeyCtx を extensions に入れる
//!
//! - header が無い → 401 (`WWW-Authenticate: ApiKey`)
//! - 形式が不正 → 400
//! - key 自体の照合 (登録済みか・失効済みか) はしない

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// API key を必須にする middleware を適用する。
///
/// `route_layer` なので、マッチしなかったパスは 404 のまま返る。
///
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                error = ?err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(key_hint = %ctx.key_hint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
