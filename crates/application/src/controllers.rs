//! 控制器
//!
//! 每个控制器只包装一个用例，用例的结果和错误都原样返回，错误到 HTTP 的映射由 web 层负责。

use domain::DomainError;

use crate::error::ApplicationResult;
use crate::use_case::{Authorized, UseCase};
use crate::use_cases::{RefreshTokenUseCase, SignOutRequest, SignOutUseCase};

pub const MUST_BE_LOGGED_IN: &str = "Must be logged in";

fn require_token(token: Option<String>) -> ApplicationResult<String> {
    match token {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(DomainError::unauthenticated(MUST_BE_LOGGED_IN).into()),
    }
}

/// 无需登录的控制器
pub struct Controller<U> {
    use_case: U,
}

impl<U: UseCase> Controller<U> {
    pub fn new(use_case: U) -> Self {
        Self { use_case }
    }

    pub async fn handle(&self, input: U::Input) -> ApplicationResult<U::Output> {
        self.use_case.execute(input).await
    }
}

/// 需要访问令牌的控制器
pub struct SecuredController<U> {
    use_case: U,
}

impl<U, P> SecuredController<U>
where
    U: UseCase<Input = Authorized<P>>,
    P: Send,
{
    pub fn new(use_case: U) -> Self {
        Self { use_case }
    }

    /// 令牌缺失或为空时返回 `Unauthenticated`，不会调用用例
    pub async fn handle(&self, token: Option<String>, payload: P) -> ApplicationResult<U::Output> {
        let token = require_token(token)?;
        self.use_case.execute(Authorized::new(token, payload)).await
    }
}

pub struct RefreshTokenController {
    use_case: RefreshTokenUseCase,
}

impl RefreshTokenController {
    pub fn new(use_case: RefreshTokenUseCase) -> Self {
        Self { use_case }
    }

    pub async fn handle(
        &self,
        refresh_token: Option<String>,
    ) -> ApplicationResult<<RefreshTokenUseCase as UseCase>::Output> {
        let refresh_token = require_token(refresh_token)?;
        self.use_case.execute(refresh_token).await
    }
}

pub struct SignOutController {
    use_case: SignOutUseCase,
}

impl SignOutController {
    pub fn new(use_case: SignOutUseCase) -> Self {
        Self { use_case }
    }

    pub async fn handle(
        &self,
        access_token: Option<String>,
        refresh_token: Option<String>,
    ) -> ApplicationResult<<SignOutUseCase as UseCase>::Output> {
        let request = SignOutRequest {
            access_token: require_token(access_token)?,
            refresh_token: require_token(refresh_token)?,
        };
        self.use_case.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use async_trait::async_trait;
    use domain::{MessageResponse, MockAuthRepository};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// 记录调用次数和输入的用例
    struct EchoUseCase<I> {
        calls: AtomicUsize,
        seen: Mutex<Vec<I>>,
    }

    impl<I> EchoUseCase<I> {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl<I> UseCase for EchoUseCase<I>
    where
        I: Clone + Send + Sync + 'static,
    {
        type Input = I;
        type Output = I;

        async fn execute(&self, input: I) -> ApplicationResult<I> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(input.clone());
            Ok(input)
        }
    }

    #[tokio::test]
    async fn controller_invokes_use_case_once() {
        let controller = Controller::new(EchoUseCase::<String>::new());

        let output = controller.handle("input".to_string()).await.unwrap();

        assert_eq!(output, "input");
        assert_eq!(controller.use_case.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*controller.use_case.seen.lock().unwrap(), vec!["input"]);
    }

    #[tokio::test]
    async fn secured_controller_wraps_payload_with_token() {
        let controller = SecuredController::new(EchoUseCase::<Authorized<i64>>::new());

        let output = controller.handle(Some("token".to_string()), 7).await.unwrap();

        assert_eq!(output, Authorized::new("token", 7));
        assert_eq!(controller.use_case.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn secured_controller_rejects_missing_token() {
        let controller = SecuredController::new(EchoUseCase::<Authorized<i64>>::new());

        for token in [None, Some(String::new()), Some("   ".to_string())] {
            let err = controller.handle(token, 7).await.unwrap_err();
            match err {
                ApplicationError::Domain(DomainError::Unauthenticated { message }) => {
                    assert_eq!(message, MUST_BE_LOGGED_IN)
                }
                other => panic!("expected unauthenticated, got {other:?}"),
            }
        }
        assert_eq!(controller.use_case.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sign_out_requires_both_tokens() {
        let mut repo = MockAuthRepository::new();
        repo.expect_sign_out().times(1).returning(|_, _| {
            Ok(MessageResponse {
                message: "signed out".to_string(),
            })
        });
        let controller = SignOutController::new(SignOutUseCase::new(Arc::new(repo)));

        assert!(controller
            .handle(Some("access".to_string()), None)
            .await
            .is_err());
        let message = controller
            .handle(Some("access".to_string()), Some("refresh".to_string()))
            .await
            .unwrap();

        assert_eq!(message.message, "signed out");
    }
}
