//! 认证用例

use std::sync::Arc;

use async_trait::async_trait;
use domain::{AuthRepository, AuthTokens, Credentials, MessageResponse, OtpCredentials, OtpRequest, OtpRequested, User};
use tracing::info;

use crate::error::ApplicationResult;
use crate::session::{SessionCookieService, SessionGrant};
use crate::use_case::{Authorized, UseCase};

/// 注销请求，需要同时提供两个令牌
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOutRequest {
    pub access_token: String,
    pub refresh_token: String,
}

fn grant(cookie_service: &dyn SessionCookieService, tokens: AuthTokens) -> ApplicationResult<SessionGrant> {
    let cookies = cookie_service.create_session_cookies(&tokens)?;
    Ok(SessionGrant {
        user: tokens.user,
        cookies,
    })
}

pub struct SignUpUseCase {
    auth_repository: Arc<dyn AuthRepository>,
}

impl SignUpUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>) -> Self {
        Self { auth_repository }
    }
}

#[async_trait]
impl UseCase for SignUpUseCase {
    type Input = Credentials;
    type Output = User;

    async fn execute(&self, input: Credentials) -> ApplicationResult<User> {
        Ok(self.auth_repository.sign_up(input).await?)
    }
}

pub struct SignInUseCase {
    auth_repository: Arc<dyn AuthRepository>,
    cookie_service: Arc<dyn SessionCookieService>,
}

impl SignInUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>, cookie_service: Arc<dyn SessionCookieService>) -> Self {
        Self {
            auth_repository,
            cookie_service,
        }
    }
}

#[async_trait]
impl UseCase for SignInUseCase {
    type Input = Credentials;
    type Output = SessionGrant;

    async fn execute(&self, input: Credentials) -> ApplicationResult<SessionGrant> {
        let tokens = self.auth_repository.sign_in(input).await?;
        info!(user_id = tokens.user.id, "user signed in");
        grant(self.cookie_service.as_ref(), tokens)
    }
}

pub struct RequestOtpUseCase {
    auth_repository: Arc<dyn AuthRepository>,
}

impl RequestOtpUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>) -> Self {
        Self { auth_repository }
    }
}

#[async_trait]
impl UseCase for RequestOtpUseCase {
    type Input = OtpRequest;
    type Output = OtpRequested;

    async fn execute(&self, input: OtpRequest) -> ApplicationResult<OtpRequested> {
        Ok(self.auth_repository.request_otp(input.email).await?)
    }
}

pub struct SignInOtpUseCase {
    auth_repository: Arc<dyn AuthRepository>,
    cookie_service: Arc<dyn SessionCookieService>,
}

impl SignInOtpUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>, cookie_service: Arc<dyn SessionCookieService>) -> Self {
        Self {
            auth_repository,
            cookie_service,
        }
    }
}

#[async_trait]
impl UseCase for SignInOtpUseCase {
    type Input = OtpCredentials;
    type Output = SessionGrant;

    async fn execute(&self, input: OtpCredentials) -> ApplicationResult<SessionGrant> {
        let tokens = self.auth_repository.sign_in_otp(input).await?;
        info!(user_id = tokens.user.id, "user signed in with otp");
        grant(self.cookie_service.as_ref(), tokens)
    }
}

pub struct RefreshTokenUseCase {
    auth_repository: Arc<dyn AuthRepository>,
    cookie_service: Arc<dyn SessionCookieService>,
}

impl RefreshTokenUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>, cookie_service: Arc<dyn SessionCookieService>) -> Self {
        Self {
            auth_repository,
            cookie_service,
        }
    }
}

#[async_trait]
impl UseCase for RefreshTokenUseCase {
    type Input = String;
    type Output = SessionGrant;

    async fn execute(&self, refresh_token: String) -> ApplicationResult<SessionGrant> {
        let tokens = self.auth_repository.refresh(refresh_token).await?;
        grant(self.cookie_service.as_ref(), tokens)
    }
}

pub struct SignOutUseCase {
    auth_repository: Arc<dyn AuthRepository>,
}

impl SignOutUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>) -> Self {
        Self { auth_repository }
    }
}

#[async_trait]
impl UseCase for SignOutUseCase {
    type Input = SignOutRequest;
    type Output = MessageResponse;

    async fn execute(&self, input: SignOutRequest) -> ApplicationResult<MessageResponse> {
        Ok(self
            .auth_repository
            .sign_out(input.access_token, input.refresh_token)
            .await?)
    }
}

pub struct GetCurrentUserUseCase {
    auth_repository: Arc<dyn AuthRepository>,
}

impl GetCurrentUserUseCase {
    pub fn new(auth_repository: Arc<dyn AuthRepository>) -> Self {
        Self { auth_repository }
    }
}

#[async_trait]
impl UseCase for GetCurrentUserUseCase {
    type Input = Authorized<()>;
    type Output = User;

    async fn execute(&self, input: Authorized<()>) -> ApplicationResult<User> {
        Ok(self.auth_repository.me(input.token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use domain::{Cookie, CookieAttributes, DomainError, MockAuthRepository, SessionCookies};
    use mockall::predicate::eq;

    struct PlainCookieService;

    impl SessionCookieService for PlainCookieService {
        fn create_session_cookies(&self, tokens: &AuthTokens) -> ApplicationResult<SessionCookies> {
            let cookie = |name: &str, value: &str| Cookie::new(name, value, CookieAttributes::default());
            Ok(SessionCookies {
                access_token: cookie("accessToken", &tokens.access_token),
                refresh_token: cookie("refreshToken", &tokens.refresh_token),
                user: cookie("user", &tokens.user.email),
            })
        }

        fn expired_session_cookies(&self) -> Vec<Cookie> {
            Vec::new()
        }
    }

    fn user() -> User {
        User {
            id: 1,
            email: "ada@example.com".to_string(),
            active: true,
            is_admin: false,
            created_by: None,
            updated_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    fn tokens() -> AuthTokens {
        AuthTokens {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "Bearer".to_string(),
            user: user(),
        }
    }

    #[tokio::test]
    async fn sign_up_returns_repository_user() {
        let mut repo = MockAuthRepository::new();
        repo.expect_sign_up()
            .with(eq(credentials()))
            .times(1)
            .returning(|_| Ok(user()));

        let result = SignUpUseCase::new(Arc::new(repo)).execute(credentials()).await.unwrap();

        assert_eq!(result, user());
    }

    #[tokio::test]
    async fn sign_in_issues_session_cookies() {
        let mut repo = MockAuthRepository::new();
        repo.expect_sign_in()
            .with(eq(credentials()))
            .times(1)
            .returning(|_| Ok(tokens()));

        let use_case = SignInUseCase::new(Arc::new(repo), Arc::new(PlainCookieService));
        let grant = use_case.execute(credentials()).await.unwrap();

        assert_eq!(grant.user, user());
        assert_eq!(grant.access_token(), "access");
        assert_eq!(grant.cookies.refresh_token.value, "refresh");
    }

    #[tokio::test]
    async fn sign_in_propagates_rejection() {
        let mut repo = MockAuthRepository::new();
        repo.expect_sign_in()
            .returning(|_| Err(DomainError::from_status(401, "bad credentials", vec![])));

        let use_case = SignInUseCase::new(Arc::new(repo), Arc::new(PlainCookieService));
        let err = use_case.execute(credentials()).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Unauthorized { .. })
        ));
    }

    #[tokio::test]
    async fn request_otp_forwards_email() {
        let mut repo = MockAuthRepository::new();
        repo.expect_request_otp()
            .with(eq("ada@example.com".to_string()))
            .times(1)
            .returning(|_| {
                Ok(OtpRequested {
                    message: "sent".to_string(),
                    expires_in_minutes: 5,
                })
            });

        let result = RequestOtpUseCase::new(Arc::new(repo))
            .execute(OtpRequest {
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.expires_in_minutes, 5);
    }

    #[tokio::test]
    async fn otp_sign_in_and_refresh_issue_cookies() {
        let mut repo = MockAuthRepository::new();
        repo.expect_sign_in_otp().times(1).returning(|_| Ok(tokens()));
        repo.expect_refresh()
            .with(eq("refresh".to_string()))
            .times(1)
            .returning(|_| Ok(tokens()));
        let repo: Arc<dyn AuthRepository> = Arc::new(repo);

        let otp = SignInOtpUseCase::new(repo.clone(), Arc::new(PlainCookieService))
            .execute(OtpCredentials {
                email: "ada@example.com".to_string(),
                otp: "123456".to_string(),
            })
            .await
            .unwrap();
        let refreshed = RefreshTokenUseCase::new(repo, Arc::new(PlainCookieService))
            .execute("refresh".to_string())
            .await
            .unwrap();

        assert_eq!(otp, refreshed);
    }

    #[tokio::test]
    async fn sign_out_and_me_forward_tokens() {
        let mut repo = MockAuthRepository::new();
        repo.expect_sign_out()
            .with(eq("access".to_string()), eq("refresh".to_string()))
            .times(1)
            .returning(|_, _| {
                Ok(MessageResponse {
                    message: "bye".to_string(),
                })
            });
        repo.expect_me()
            .with(eq("access".to_string()))
            .times(1)
            .returning(|_| Ok(user()));
        let repo: Arc<dyn AuthRepository> = Arc::new(repo);

        let message = SignOutUseCase::new(repo.clone())
            .execute(SignOutRequest {
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            })
            .await
            .unwrap();
        let me = GetCurrentUserUseCase::new(repo)
            .execute(Authorized::new("access", ()))
            .await
            .unwrap();

        assert_eq!(message.message, "bye");
        assert_eq!(me, user());
    }
}
