//! 用户查询用例

use std::sync::Arc;

use async_trait::async_trait;
use domain::{User, UsersRepository};

use crate::error::ApplicationResult;
use crate::use_case::{Authorized, UseCase};

pub struct GetUserByEmailUseCase {
    users_repository: Arc<dyn UsersRepository>,
}

impl GetUserByEmailUseCase {
    pub fn new(users_repository: Arc<dyn UsersRepository>) -> Self {
        Self { users_repository }
    }
}

#[async_trait]
impl UseCase for GetUserByEmailUseCase {
    type Input = Authorized<String>;
    type Output = User;

    async fn execute(&self, input: Authorized<String>) -> ApplicationResult<User> {
        Ok(self
            .users_repository
            .get_user_by_email(input.token, input.payload)
            .await?)
    }
}

pub struct GetUserByIdUseCase {
    users_repository: Arc<dyn UsersRepository>,
}

impl GetUserByIdUseCase {
    pub fn new(users_repository: Arc<dyn UsersRepository>) -> Self {
        Self { users_repository }
    }
}

#[async_trait]
impl UseCase for GetUserByIdUseCase {
    type Input = Authorized<i64>;
    type Output = User;

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<User> {
        Ok(self
            .users_repository
            .get_user_by_id(input.token, input.payload)
            .await?)
    }
}
