//! 层级用例

use std::sync::Arc;

use async_trait::async_trait;
use domain::{Level, LevelInput, LevelUpdate, LevelsRepository, PaginatedResult, PaginationParams};

use crate::error::ApplicationResult;
use crate::use_case::{Authorized, UseCase};

pub struct GetLevelsUseCase {
    levels_repository: Arc<dyn LevelsRepository>,
}

impl GetLevelsUseCase {
    pub fn new(levels_repository: Arc<dyn LevelsRepository>) -> Self {
        Self { levels_repository }
    }
}

#[async_trait]
impl UseCase for GetLevelsUseCase {
    type Input = Authorized<PaginationParams>;
    type Output = PaginatedResult<Level>;

    async fn execute(&self, input: Authorized<PaginationParams>) -> ApplicationResult<PaginatedResult<Level>> {
        Ok(self
            .levels_repository
            .get_levels(input.token, input.payload)
            .await?)
    }
}

pub struct GetLevelUseCase {
    levels_repository: Arc<dyn LevelsRepository>,
}

impl GetLevelUseCase {
    pub fn new(levels_repository: Arc<dyn LevelsRepository>) -> Self {
        Self { levels_repository }
    }
}

#[async_trait]
impl UseCase for GetLevelUseCase {
    type Input = Authorized<i64>;
    type Output = Level;

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<Level> {
        // TODO: 权限模型确定后，检查调用方能否读取该层级
        Ok(self
            .levels_repository
            .get_level(input.token, input.payload)
            .await?)
    }
}

pub struct CreateLevelUseCase {
    levels_repository: Arc<dyn LevelsRepository>,
}

impl CreateLevelUseCase {
    pub fn new(levels_repository: Arc<dyn LevelsRepository>) -> Self {
        Self { levels_repository }
    }
}

#[async_trait]
impl UseCase for CreateLevelUseCase {
    type Input = Authorized<LevelInput>;
    type Output = Level;

    async fn execute(&self, input: Authorized<LevelInput>) -> ApplicationResult<Level> {
        Ok(self
            .levels_repository
            .create_level(input.token, input.payload)
            .await?)
    }
}

pub struct UpdateLevelUseCase {
    levels_repository: Arc<dyn LevelsRepository>,
}

impl UpdateLevelUseCase {
    pub fn new(levels_repository: Arc<dyn LevelsRepository>) -> Self {
        Self { levels_repository }
    }
}

#[async_trait]
impl UseCase for UpdateLevelUseCase {
    type Input = Authorized<(i64, LevelUpdate)>;
    type Output = Level;

    async fn execute(&self, input: Authorized<(i64, LevelUpdate)>) -> ApplicationResult<Level> {
        let (id, update) = input.payload;
        Ok(self
            .levels_repository
            .update_level(input.token, id, update)
            .await?)
    }
}

pub struct DeleteLevelUseCase {
    levels_repository: Arc<dyn LevelsRepository>,
}

impl DeleteLevelUseCase {
    pub fn new(levels_repository: Arc<dyn LevelsRepository>) -> Self {
        Self { levels_repository }
    }
}

#[async_trait]
impl UseCase for DeleteLevelUseCase {
    type Input = Authorized<i64>;
    type Output = ();

    async fn execute(&self, input: Authorized<i64>) -> ApplicationResult<()> {
        Ok(self
            .levels_repository
            .delete_level(input.token, input.payload)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use domain::{AuditInfo, DomainError, MockLevelsRepository};
    use mockall::predicate::eq;

    fn level(id: i64, name: &str) -> Level {
        Level {
            id,
            name: name.to_string(),
            acronym: None,
            description: None,
            audit: AuditInfo::default(),
        }
    }

    #[tokio::test]
    async fn get_levels_returns_page_unchanged() {
        let params = PaginationParams::new(2, 5);
        let mut page = PaginatedResult::empty(params);
        page.items = vec![level(1, "Licence"), level(2, "Master")];
        page.total_items = 2;

        let mut repo = MockLevelsRepository::new();
        let expected = page.clone();
        repo.expect_get_levels()
            .with(eq("token".to_string()), eq(params))
            .times(1)
            .returning(move |_, _| Ok(expected.clone()));

        let result = GetLevelsUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", params))
            .await
            .unwrap();

        assert_eq!(result, page);
    }

    #[tokio::test]
    async fn get_level_passes_not_found_through() {
        let mut repo = MockLevelsRepository::new();
        repo.expect_get_level()
            .with(eq("token".to_string()), eq(99))
            .times(1)
            .returning(|_, _| Err(DomainError::not_found("level 99")));

        let err = GetLevelUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", 99))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn create_level_forwards_input() {
        let input = LevelInput {
            name: "Doctorat".to_string(),
            acronym: Some("D".to_string()),
        };
        let mut repo = MockLevelsRepository::new();
        repo.expect_create_level()
            .with(eq("token".to_string()), eq(input.clone()))
            .times(1)
            .returning(|_, input| Ok(level(3, &input.name)));

        let created = CreateLevelUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", input))
            .await
            .unwrap();

        assert_eq!(created, level(3, "Doctorat"));
    }

    #[tokio::test]
    async fn update_level_splits_id_and_changes() {
        let update = LevelUpdate {
            name: Some("Master 2".to_string()),
            ..LevelUpdate::default()
        };
        let mut repo = MockLevelsRepository::new();
        repo.expect_update_level()
            .with(eq("token".to_string()), eq(2), eq(update.clone()))
            .times(1)
            .returning(|_, id, _| Ok(level(id, "Master 2")));

        let updated = UpdateLevelUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", (2, update)))
            .await
            .unwrap();

        assert_eq!(updated.name, "Master 2");
    }

    #[tokio::test]
    async fn delete_level_passes_forbidden_through() {
        let mut repo = MockLevelsRepository::new();
        repo.expect_delete_level()
            .with(eq("token".to_string()), eq(2))
            .times(1)
            .returning(|_, _| {
                Err(DomainError::from_status(403, "Admins only", vec![]))
            });

        let err = DeleteLevelUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", 2))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Forbidden { .. })
        ));
    }
}
