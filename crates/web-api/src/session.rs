//! 会话 Cookie 的读取、写入与自动刷新

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use domain::{Session, User, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, USER_COOKIE};
use time::OffsetDateTime;
use tracing::{debug, warn};

use application::SessionGrant;

use crate::state::AppState;

/// 刷新中间件在本次请求内签发的新会话
#[derive(Debug, Clone)]
struct RefreshedSession {
    user: User,
    access_token: String,
    refresh_token: String,
}

impl From<&SessionGrant> for RefreshedSession {
    fn from(grant: &SessionGrant) -> Self {
        Self {
            user: grant.user.clone(),
            access_token: grant.cookies.access_token.value.clone(),
            refresh_token: grant.cookies.refresh_token.value.clone(),
        }
    }
}

/// 从 Cookie 还原的当前会话，缺失或损坏的 Cookie 视为未登录
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Session);

impl CurrentSession {
    pub fn access_token(&self) -> Option<String> {
        self.0.access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.0.refresh_token.clone()
    }

    pub fn into_inner(self) -> Session {
        self.0
    }

    fn from_jar(jar: &CookieJar) -> Self {
        let value = |name: &str| {
            jar.get(name)
                .map(|cookie| cookie.value().to_string())
                .filter(|value| !value.is_empty())
        };
        let user = value(USER_COOKIE).and_then(|raw| match User::from_cookie_value(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                debug!(error = %err, "ignoring unreadable user cookie");
                None
            }
        });

        Self(Session {
            user,
            access_token: value(ACCESS_TOKEN_COOKIE),
            refresh_token: value(REFRESH_TOKEN_COOKIE),
        })
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(refreshed) = parts.extensions.get::<RefreshedSession>() {
            return Ok(Self(Session {
                user: Some(refreshed.user.clone()),
                access_token: Some(refreshed.access_token.clone()),
                refresh_token: Some(refreshed.refresh_token.clone()),
            }));
        }
        Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

/// 访问令牌过期而刷新令牌仍在时，先刷新会话再处理请求
pub async fn refresh_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session = CurrentSession::from_jar(&jar);
    if session.access_token().is_some() {
        return next.run(request).await;
    }
    let Some(refresh_token) = session.refresh_token() else {
        return next.run(request).await;
    };

    match state.container.refresh_token.handle(Some(refresh_token)).await {
        Ok(grant) => {
            debug!(user_id = grant.user.id, "session refreshed");
            request.extensions_mut().insert(RefreshedSession::from(&grant));
            let response = next.run(request).await;
            (cookie_jar(grant.cookies), response).into_response()
        }
        Err(err) => {
            warn!(error = %err, "session refresh failed, clearing cookies");
            let cleared = cookie_jar(state.container.cookie_service.expired_session_cookies());
            (cleared, next.run(request).await).into_response()
        }
    }
}

/// 把会话 Cookie 写进响应用的 `CookieJar`
pub fn cookie_jar(cookies: impl IntoIterator<Item = domain::Cookie>) -> CookieJar {
    cookies
        .into_iter()
        .fold(CookieJar::new(), |jar, cookie| jar.add(to_http_cookie(cookie)))
}

pub fn to_http_cookie(cookie: domain::Cookie) -> Cookie<'static> {
    let domain::Cookie {
        name,
        value,
        attributes,
    } = cookie;

    let same_site = match attributes.same_site {
        domain::SameSite::Strict => SameSite::Strict,
        domain::SameSite::Lax => SameSite::Lax,
        domain::SameSite::None => SameSite::None,
    };
    let mut builder = Cookie::build((name, value))
        .http_only(attributes.http_only)
        .path(attributes.path)
        .secure(attributes.secure)
        .same_site(same_site);

    if let Some(max_age) = attributes.max_age {
        builder = builder.max_age(time::Duration::seconds(max_age));
    }
    if let Some(expires) = attributes
        .expires
        .and_then(|at| OffsetDateTime::from_unix_timestamp(at.timestamp()).ok())
    {
        builder = builder.expires(expires);
    }
    if let Some(domain) = attributes.domain {
        builder = builder.domain(domain);
    }
    builder.build()
}
