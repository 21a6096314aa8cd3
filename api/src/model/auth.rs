use kernel::model::auth::AccessToken;
use serde::{Deserialize, Serialize};

// OAuth2 のパスワードグラント形式。username にはメールアドレスを入れる
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl From<AccessToken> for AccessTokenResponse {
    fn from(value: AccessToken) -> Self {
        Self {
            access_token: value.0,
            token_type: "bearer",
        }
    }
}
