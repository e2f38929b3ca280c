//! JWT 签发与校验
//!
//! access token 走 Authorization 头，refresh token 走 HttpOnly Cookie。
//! 两类 token 共用同一密钥，靠 claims 里的 token_type 区分，
//! 刷新接口只接受 refresh 类型。

use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const REFRESH_COOKIE: &str = "refresh_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn label(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// 配置里的默认有效期（秒）
    fn default_lifetime(self) -> chrono::Duration {
        let jwt = &AppConfig::get().jwt;
        let secs = match self {
            TokenKind::Access => jwt.access_token_expiry,
            TokenKind::Refresh => jwt.refresh_token_expiry,
        };
        chrono::Duration::seconds(secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID（字符串形式）
    pub sub: String,
    pub role: String,
    /// "access" 或 "refresh"
    pub token_type: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn issue(
        user_id: i64,
        role: &str,
        kind: TokenKind,
        lifetime: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: kind.label().to_string(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let key = EncodingKey::from_secret(AppConfig::get().jwt.secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    fn decode_claims(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let key = DecodingKey::from_secret(AppConfig::get().jwt.secret.as_ref());
        decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
    }

    fn verify_kind(token: &str, kind: TokenKind) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::decode_claims(token)?;
        if claims.token_type != kind.label() {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    pub fn generate_access_token(
        user_id: i64,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::issue(
            user_id,
            role,
            TokenKind::Access,
            TokenKind::Access.default_lifetime(),
        )
    }

    /// 生成 refresh token，`lifetime` 为 None 时用配置默认值
    pub fn generate_refresh_token(
        user_id: i64,
        role: &str,
        lifetime: Option<chrono::Duration>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::issue(
            user_id,
            role,
            TokenKind::Refresh,
            lifetime.unwrap_or_else(|| TokenKind::Refresh.default_lifetime()),
        )
    }

    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_lifetime: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::generate_refresh_token(user_id, role, refresh_lifetime)?,
        })
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_kind(token, TokenKind::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_kind(token, TokenKind::Refresh)
    }

    /// 用 refresh token 换发新的 access token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidToken)?;
        Self::generate_access_token(user_id, &claims.role)
    }

    fn refresh_cookie(value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE, value)
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(max_age_secs))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        Self::refresh_cookie(
            refresh_token.to_string(),
            AppConfig::get().jwt.refresh_token_expiry,
        )
    }

    /// 置空 Cookie，登出时让浏览器立即丢弃
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Self::refresh_cookie(String::new(), 0)
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }
}
