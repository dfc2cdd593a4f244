//! 会话 Cookie 签发
//!
//! 令牌由上游签名，这里只读取 `exp`，不校验签名。

use std::sync::Arc;

use application::{ApplicationError, ApplicationResult, Clock, SessionCookieService};
use chrono::{DateTime, Utc};
use config::SessionConfig;
use domain::{
    AuthTokens, Cookie, CookieAttributes, SameSite, SessionCookies, TokenPayload,
    ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, USER_COOKIE,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::debug;

pub struct JwtSessionCookieService {
    clock: Arc<dyn Clock>,
    path: String,
    secure: bool,
    domain: Option<String>,
}

impl JwtSessionCookieService {
    pub fn new(config: &SessionConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            path: config.cookie_path.clone(),
            secure: config.secure_cookies,
            domain: config.cookie_domain.clone(),
        }
    }

    /// 读取令牌声明（不校验签名与过期）
    pub fn decode_payload(token: &str) -> ApplicationResult<TokenPayload> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<TokenPayload>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|e| ApplicationError::session(format!("invalid token: {}", e)))
    }

    fn attributes(&self, max_age: Option<i64>, expires: Option<DateTime<Utc>>) -> CookieAttributes {
        CookieAttributes {
            http_only: true,
            path: self.path.clone(),
            max_age,
            expires,
            same_site: SameSite::Lax,
            secure: self.secure,
            domain: self.domain.clone(),
        }
    }

    fn token_cookie(&self, name: &str, token: &str, payload: &TokenPayload, now: DateTime<Utc>) -> Cookie {
        let max_age = payload.time_until_expiry(now).num_seconds();
        Cookie::new(name, token, self.attributes(Some(max_age), payload.expires_at()))
    }
}

impl SessionCookieService for JwtSessionCookieService {
    fn create_session_cookies(&self, tokens: &AuthTokens) -> ApplicationResult<SessionCookies> {
        let now = self.clock.now();
        let access = Self::decode_payload(&tokens.access_token)?;
        let refresh = Self::decode_payload(&tokens.refresh_token)?;
        debug!(
            user_id = tokens.user.id,
            access_exp = access.exp,
            refresh_exp = refresh.exp,
            "issuing session cookies"
        );

        let user_value = tokens.user.to_cookie_value()?;

        Ok(SessionCookies {
            access_token: self.token_cookie(ACCESS_TOKEN_COOKIE, &tokens.access_token, &access, now),
            refresh_token: self.token_cookie(REFRESH_TOKEN_COOKIE, &tokens.refresh_token, &refresh, now),
            user: self.token_cookie(USER_COOKIE, &user_value, &refresh, now),
        })
    }

    fn expired_session_cookies(&self) -> Vec<Cookie> {
        [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, USER_COOKIE]
            .into_iter()
            .map(|name| Cookie::new(name, "", self.attributes(Some(0), Some(DateTime::UNIX_EPOCH))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::FixedClock;
    use domain::User;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn token(exp: i64, kind: &str) -> String {
        encode(
            &Header::default(),
            &json!({ "exp": exp, "type": kind, "user_id": 5, "jti": "abc" }),
            &EncodingKey::from_secret(b"upstream-only-secret"),
        )
        .unwrap()
    }

    fn service(secure: bool) -> JwtSessionCookieService {
        let config = SessionConfig {
            secure_cookies: secure,
            cookie_path: "/".to_string(),
            cookie_domain: None,
        };
        let now = DateTime::from_timestamp(NOW, 0).unwrap();
        JwtSessionCookieService::new(&config, Arc::new(FixedClock(now)))
    }

    fn tokens() -> AuthTokens {
        AuthTokens {
            access_token: token(NOW + 900, "access"),
            refresh_token: token(NOW + 86_400, "refresh"),
            token_type: "Bearer".to_string(),
            user: User {
                id: 5,
                email: "ada@example.com".to_string(),
                active: true,
                is_admin: false,
                created_by: None,
                updated_by: None,
                created_at: None,
                updated_at: None,
            },
        }
    }

    #[test]
    fn payload_is_read_without_the_signing_key() {
        let payload = JwtSessionCookieService::decode_payload(&token(NOW + 60, "access")).unwrap();

        assert_eq!(payload.exp, NOW + 60);
        assert_eq!(payload.user_id, Some(5));
        assert_eq!(payload.jti.as_deref(), Some("abc"));
    }

    #[test]
    fn cookies_expire_with_their_tokens() {
        let tokens = tokens();
        let cookies = service(true).create_session_cookies(&tokens).unwrap();

        assert_eq!(cookies.access_token.name, "accessToken");
        assert_eq!(cookies.access_token.value, tokens.access_token);
        assert_eq!(cookies.access_token.attributes.max_age, Some(900));
        assert_eq!(
            cookies.access_token.attributes.expires,
            DateTime::from_timestamp(NOW + 900, 0)
        );
        assert_eq!(cookies.refresh_token.attributes.max_age, Some(86_400));

        let attrs = &cookies.refresh_token.attributes;
        assert!(attrs.http_only);
        assert!(attrs.secure);
        assert_eq!(attrs.path, "/");
        assert_eq!(attrs.same_site, SameSite::Lax);
    }

    #[test]
    fn user_cookie_carries_the_profile() {
        let tokens = tokens();
        let cookies = service(false).create_session_cookies(&tokens).unwrap();

        assert_eq!(cookies.user.name, "user");
        assert_eq!(User::from_cookie_value(&cookies.user.value).unwrap(), tokens.user);
        assert_eq!(cookies.user.attributes.max_age, Some(86_400));
        assert!(!cookies.user.attributes.secure);
    }

    #[test]
    fn expired_tokens_get_zero_max_age() {
        let mut tokens = tokens();
        tokens.access_token = token(NOW - 10, "access");

        let cookies = service(true).create_session_cookies(&tokens).unwrap();

        assert_eq!(cookies.access_token.attributes.max_age, Some(0));
    }

    #[test]
    fn malformed_token_is_a_session_error() {
        let mut tokens = tokens();
        tokens.access_token = "not-a-jwt".to_string();

        assert!(matches!(
            service(true).create_session_cookies(&tokens),
            Err(ApplicationError::Session(_))
        ));
    }

    #[test]
    fn clearing_cookies_expires_all_three() {
        let cookies = service(true).expired_session_cookies();

        let names: Vec<_> = cookies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["accessToken", "refreshToken", "user"]);
        assert!(cookies
            .iter()
            .all(|c| c.value.is_empty() && c.attributes.max_age == Some(0)));
    }
}
