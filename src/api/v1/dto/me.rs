use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    pub scheme: &'static str,
    pub key_hint: String,
}
