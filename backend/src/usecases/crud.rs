use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use crates::domain::{
    entities::Lifecycle,
    mappers::{EntityMapper, MappingError, ResourceLabels, UniqueKey},
    repositories::crud::CrudRepository,
    value_objects::{
        enums::entity_statuses::EntityStatus,
        store_errors::{ForeignKeyViolation, UniqueViolation},
    },
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum CrudError {
    #[error("{0}")]
    NotFound(String),
    #[error("{message}")]
    Conflict {
        field: Option<String>,
        message: String,
    },
    #[error("{0}")]
    Invalid(String),
    /// `message` is safe to show to clients, `source` only goes to the logs.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl CrudError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CrudError::NotFound(_) => StatusCode::NOT_FOUND,
            CrudError::Conflict { .. } => StatusCode::CONFLICT,
            CrudError::Invalid(_) => StatusCode::BAD_REQUEST,
            CrudError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CrudResult<T> = std::result::Result<T, CrudError>;

/// Operations every resource exposes over HTTP.
#[async_trait]
pub trait CrudService: Send + Sync {
    type Id: Send + 'static;
    type Request: Send + 'static;
    type Response: Send + 'static;

    fn labels(&self) -> &'static ResourceLabels;

    /// Active entities only.
    async fn get_all(&self) -> CrudResult<Vec<Self::Response>>;

    /// Any entity with this id, whatever its status.
    async fn read(&self, id: Self::Id) -> CrudResult<Self::Response>;

    async fn create(&self, input: Self::Request) -> CrudResult<Self::Response>;

    async fn update(&self, input: Self::Request, id: Self::Id) -> CrudResult<Self::Response>;

    /// Soft delete: the entity stays stored with status `INACTIVE`.
    async fn delete(&self, id: Self::Id) -> CrudResult<Self::Response>;

    async fn toggle_status(&self, id: Self::Id) -> CrudResult<Self::Response>;
}

pub struct CrudUseCase<R, M>
where
    R: CrudRepository<Entity = M::Entity> + 'static,
    M: EntityMapper,
{
    repository: Arc<R>,
    mapper: PhantomData<fn() -> M>,
}

impl<R, M> CrudUseCase<R, M>
where
    R: CrudRepository<Entity = M::Entity> + 'static,
    M: EntityMapper,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            mapper: PhantomData,
        }
    }

    async fn find_existing(&self, id: i64, action: &str) -> CrudResult<M::Entity> {
        let labels = M::labels();
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| store_failure(labels, action, err))?
            .ok_or_else(|| {
                warn!(resource = labels.resource, id, "crud: entity not found");
                CrudError::NotFound(format!("No se encontró {}", labels.singular))
            })
    }

    /// Rejects a natural key already held by a different entity.
    async fn ensure_unique(
        &self,
        key: Option<UniqueKey>,
        current_id: Option<i64>,
        action: &str,
    ) -> CrudResult<()> {
        let Some(key) = key else {
            return Ok(());
        };
        let labels = M::labels();

        let holder = self
            .repository
            .find_by_unique_key(&key.value)
            .await
            .map_err(|err| store_failure(labels, action, err))?;

        match holder {
            Some(other) if other.id() != current_id => {
                warn!(
                    resource = labels.resource,
                    field = key.field,
                    holder_id = ?other.id(),
                    "crud: duplicate natural key"
                );
                Err(conflict(labels, Some(key.field.to_string())))
            }
            _ => Ok(()),
        }
    }

    async fn persist(&self, entity: M::Entity, action: &str) -> CrudResult<M::Entity> {
        self.repository
            .save(entity)
            .await
            .map_err(|err| store_failure(M::labels(), action, err))
    }
}

#[async_trait]
impl<R, M> CrudService for CrudUseCase<R, M>
where
    R: CrudRepository<Entity = M::Entity> + 'static,
    M: EntityMapper,
{
    type Id = i64;
    type Request = M::Request;
    type Response = M::Response;

    fn labels(&self) -> &'static ResourceLabels {
        M::labels()
    }

    async fn get_all(&self) -> CrudResult<Vec<M::Response>> {
        let labels = M::labels();
        let entities = self
            .repository
            .find_by_status(EntityStatus::Active)
            .await
            .map_err(|err| store_failure(labels, "consultar", err))?;

        debug!(
            resource = labels.resource,
            count = entities.len(),
            "crud: listed active entities"
        );
        Ok(entities.iter().map(M::to_response).collect())
    }

    async fn read(&self, id: i64) -> CrudResult<M::Response> {
        let entity = self.find_existing(id, "consultar").await?;
        Ok(M::to_response(&entity))
    }

    async fn create(&self, input: M::Request) -> CrudResult<M::Response> {
        let labels = M::labels();
        let key = M::unique_key(&input);
        let mut entity =
            M::to_entity(input).map_err(|err| mapping_failure(labels, "crear", err))?;

        self.ensure_unique(key, None, "crear").await?;

        entity.set_status(EntityStatus::Active);
        let saved = self.persist(entity, "crear").await?;

        info!(resource = labels.resource, id = ?saved.id(), "crud: entity created");
        Ok(M::to_response(&saved))
    }

    async fn update(&self, input: M::Request, id: i64) -> CrudResult<M::Response> {
        let labels = M::labels();
        let mut entity = self.find_existing(id, "actualizar").await?;

        self.ensure_unique(M::unique_key(&input), Some(id), "actualizar")
            .await?;

        M::partial_update(input, &mut entity)
            .map_err(|err| mapping_failure(labels, "actualizar", err))?;
        let saved = self.persist(entity, "actualizar").await?;

        info!(resource = labels.resource, id, "crud: entity updated");
        Ok(M::to_response(&saved))
    }

    async fn delete(&self, id: i64) -> CrudResult<M::Response> {
        let labels = M::labels();
        let mut entity = self
            .repository
            .find_by_id_and_status(id, EntityStatus::Active)
            .await
            .map_err(|err| store_failure(labels, "eliminar", err))?
            .ok_or_else(|| {
                warn!(resource = labels.resource, id, "crud: no active entity to delete");
                CrudError::NotFound(format!("No se encontró {} a eliminar", labels.singular))
            })?;

        entity.set_status(EntityStatus::Inactive);
        let saved = self.persist(entity, "eliminar").await?;

        info!(resource = labels.resource, id, "crud: entity deactivated");
        Ok(M::to_response(&saved))
    }

    async fn toggle_status(&self, id: i64) -> CrudResult<M::Response> {
        let labels = M::labels();
        let mut entity = self.find_existing(id, "cambiar el estado de").await?;

        let next = entity.status().toggled();
        entity.set_status(next);
        let saved = self.persist(entity, "cambiar el estado de").await?;

        info!(
            resource = labels.resource,
            id,
            status = %next,
            "crud: entity status toggled"
        );
        Ok(M::to_response(&saved))
    }
}

fn conflict(labels: &ResourceLabels, field: Option<String>) -> CrudError {
    let message = match &field {
        Some(field) => format!("Ya existe {} con el mismo {}", labels.singular, field),
        None => format!("Ya existe {} con los mismos datos", labels.singular),
    };
    CrudError::Conflict { field, message }
}

/// Classifies a store failure; anything unrecognized becomes `Internal`.
fn store_failure(labels: &ResourceLabels, action: &str, err: anyhow::Error) -> CrudError {
    if let Some(violation) = err.downcast_ref::<UniqueViolation>() {
        warn!(
            resource = labels.resource,
            constraint = ?violation.constraint,
            "crud: store rejected duplicate"
        );
        return conflict(labels, violation.field.clone());
    }

    if let Some(violation) = err.downcast_ref::<ForeignKeyViolation>() {
        warn!(
            resource = labels.resource,
            constraint = ?violation.constraint,
            "crud: store rejected missing reference"
        );
        return CrudError::Invalid(format!(
            "Los datos de {} hacen referencia a un registro inexistente",
            labels.singular
        ));
    }

    error!(
        resource = labels.resource,
        action,
        db_error = ?err,
        "crud: store operation failed"
    );
    CrudError::Internal {
        message: format!("Error al {} {}", action, labels.singular),
        source: err,
    }
}

fn mapping_failure(labels: &ResourceLabels, action: &str, err: MappingError) -> CrudError {
    match err {
        MappingError::Invalid(message) => {
            debug!(resource = labels.resource, %message, "crud: invalid input");
            CrudError::Invalid(message)
        }
        MappingError::Internal(source) => {
            error!(
                resource = labels.resource,
                action,
                error = ?source,
                "crud: mapping failed"
            );
            CrudError::Internal {
                message: format!("Error al {} {}", action, labels.singular),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{self, InMemoryStore};
    use anyhow::anyhow;
    use crates::domain::{
        entities::{categories::CategoryEntity, tourist_plans::TouristPlanEntity},
        mappers::{
            categories::CategoryMapper, tourist_plans::TouristPlanMapper, users::UserMapper,
        },
        value_objects::{
            categories::UpsertCategoryModel, tourist_plans::UpsertTouristPlanModel,
            users::UpsertUserModel,
        },
    };
    use mockall::{mock, predicate::eq};

    mock! {
        CategoryStore {}

        #[async_trait]
        impl CrudRepository for CategoryStore {
            type Entity = CategoryEntity;

            async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<CategoryEntity>>;
            async fn find_by_status(&self, status: EntityStatus) -> anyhow::Result<Vec<CategoryEntity>>;
            async fn find_by_id_and_status(
                &self,
                id: i64,
                status: EntityStatus,
            ) -> anyhow::Result<Option<CategoryEntity>>;
            async fn find_by_unique_key(&self, key: &str) -> anyhow::Result<Option<CategoryEntity>>;
            async fn save(&self, entity: CategoryEntity) -> anyhow::Result<CategoryEntity>;
        }
    }

    type Categories<R> = CrudUseCase<R, CategoryMapper>;
    type TouristPlans = CrudUseCase<InMemoryStore<TouristPlanEntity>, TouristPlanMapper>;

    fn category_request(name: &str) -> UpsertCategoryModel {
        UpsertCategoryModel {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn stored_category(id: i64, status: EntityStatus) -> CategoryEntity {
        CategoryEntity {
            id: Some(id),
            name: "Adventure".to_string(),
            description: None,
            image_id: None,
            status,
            created_at: None,
            updated_at: None,
        }
    }

    fn plan_request(title: &str, price: f64) -> UpsertTouristPlanModel {
        UpsertTouristPlanModel {
            title: Some(title.to_string()),
            description: Some("Recorrido por la costa".to_string()),
            price: Some(price),
            city_id: Some(1),
            category_id: Some(1),
            ..Default::default()
        }
    }

    fn categories() -> Categories<InMemoryStore<CategoryEntity>> {
        CrudUseCase::new(Arc::new(test_support::categories()))
    }

    fn tourist_plans() -> TouristPlans {
        CrudUseCase::new(Arc::new(test_support::tourist_plans()))
    }

    #[tokio::test]
    async fn adventure_category_lifecycle() {
        let usecase = categories();

        let created = usecase.create(category_request("Adventure")).await.unwrap();
        let id = created.id.unwrap();
        assert_eq!(created.status, EntityStatus::Active);

        let listed = usecase.get_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Adventure");

        let deleted = usecase.delete(id).await.unwrap();
        assert_eq!(deleted.status, EntityStatus::Inactive);
        assert!(usecase.get_all().await.unwrap().is_empty());

        let reactivated = usecase.toggle_status(id).await.unwrap();
        assert_eq!(reactivated.status, EntityStatus::Active);
        assert_eq!(usecase.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn created_entity_reads_back_active_with_identity() {
        let usecase = categories();

        let created = usecase.create(category_request("Cultura")).await.unwrap();
        let read = usecase.read(created.id.unwrap()).await.unwrap();

        assert_eq!(read.name, "Cultura");
        assert_eq!(read.status, EntityStatus::Active);
        assert!(read.created_at.is_some());
    }

    #[tokio::test]
    async fn second_delete_reports_not_found_and_keeps_entity_inactive() {
        let usecase = categories();
        let id = usecase
            .create(category_request("Playa"))
            .await
            .unwrap()
            .id
            .unwrap();

        usecase.delete(id).await.unwrap();
        let err = usecase.delete(id).await.unwrap_err();

        assert!(matches!(err, CrudError::NotFound(ref message) if message == "No se encontró la categoría a eliminar"));
        assert_eq!(
            usecase.read(id).await.unwrap().status,
            EntityStatus::Inactive
        );
    }

    #[tokio::test]
    async fn toggling_twice_restores_the_original_status() {
        let usecase = categories();
        let id = usecase
            .create(category_request("Montaña"))
            .await
            .unwrap()
            .id
            .unwrap();

        assert_eq!(
            usecase.toggle_status(id).await.unwrap().status,
            EntityStatus::Inactive
        );
        assert_eq!(
            usecase.toggle_status(id).await.unwrap().status,
            EntityStatus::Active
        );
    }

    #[tokio::test]
    async fn read_returns_inactive_entities() {
        let usecase = categories();
        let id = usecase
            .create(category_request("Gastronomía"))
            .await
            .unwrap()
            .id
            .unwrap();
        usecase.delete(id).await.unwrap();

        let read = usecase.read(id).await.unwrap();

        assert_eq!(read.status, EntityStatus::Inactive);
    }

    #[tokio::test]
    async fn get_all_lists_only_active_entities() {
        let usecase = categories();
        let keep = usecase.create(category_request("Aventura")).await.unwrap();
        let removed = usecase.create(category_request("Relax")).await.unwrap();
        usecase.delete(removed.id.unwrap()).await.unwrap();

        let listed = usecase.get_all().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
        assert!(listed.iter().all(|c| c.status == EntityStatus::Active));
    }

    #[tokio::test]
    async fn duplicate_title_is_a_conflict_and_leaves_the_first_plan_alone() {
        let usecase = tourist_plans();
        let first = usecase
            .create(plan_request("Beach Tour", 120.0))
            .await
            .unwrap();

        let err = usecase
            .create(plan_request("Beach Tour", 80.0))
            .await
            .unwrap_err();

        match err {
            CrudError::Conflict { field, message } => {
                assert_eq!(field.as_deref(), Some("title"));
                assert_eq!(message, "Ya existe el plan turístico con el mismo title");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        let stored = usecase.read(first.id.unwrap()).await.unwrap();
        assert_eq!(stored.price, Some(120.0));
        assert_eq!(usecase.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_update_changes_title_and_keeps_price() {
        let usecase = tourist_plans();
        let id = usecase
            .create(plan_request("Beach Tour", 120.0))
            .await
            .unwrap()
            .id
            .unwrap();

        let updated = usecase
            .update(
                UpsertTouristPlanModel {
                    title: Some("Sunset Beach Tour".to_string()),
                    ..Default::default()
                },
                id,
            )
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "Sunset Beach Tour");
        assert_eq!(updated.price, Some(120.0));
    }

    #[tokio::test]
    async fn update_does_not_reactivate_an_inactive_entity() {
        let usecase = categories();
        let id = usecase
            .create(category_request("Nieve"))
            .await
            .unwrap()
            .id
            .unwrap();
        usecase.delete(id).await.unwrap();

        let updated = usecase
            .update(
                UpsertCategoryModel {
                    description: Some("Deportes de invierno".to_string()),
                    ..Default::default()
                },
                id,
            )
            .await
            .unwrap();

        assert_eq!(updated.status, EntityStatus::Inactive);
        assert_eq!(updated.description.as_deref(), Some("Deportes de invierno"));
    }

    #[tokio::test]
    async fn update_may_keep_its_own_name_but_not_take_another() {
        let usecase = categories();
        let first = usecase.create(category_request("Aventura")).await.unwrap();
        let second = usecase.create(category_request("Relax")).await.unwrap();

        let same = usecase
            .update(category_request("Aventura"), first.id.unwrap())
            .await;
        assert!(same.is_ok());

        let err = usecase
            .update(category_request("Aventura"), second.id.unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::Conflict { .. }));
        assert_eq!(
            usecase.read(second.id.unwrap()).await.unwrap().name,
            "Relax"
        );
    }

    fn user_request(email: &str) -> UpsertUserModel {
        UpsertUserModel {
            name: Some("Ana".to_string()),
            last_name: Some("Gómez".to_string()),
            email: Some(email.to_string()),
            password: Some("a-long-password".to_string()),
            role: None,
        }
    }

    #[tokio::test]
    async fn email_taken_in_other_case_is_a_conflict_on_update() {
        let usecase = CrudUseCase::<_, UserMapper>::new(Arc::new(test_support::users()));
        usecase.create(user_request("ana@example.com")).await.unwrap();
        let other = usecase
            .create(user_request("luis@example.com"))
            .await
            .unwrap();

        let err = usecase
            .update(
                UpsertUserModel {
                    email: Some("ANA@Example.COM".to_string()),
                    ..Default::default()
                },
                other.id.unwrap(),
            )
            .await
            .unwrap_err();

        match err {
            CrudError::Conflict { field, message } => {
                assert_eq!(field.as_deref(), Some("email"));
                assert_eq!(message, "Ya existe el usuario con el mismo email");
            }
            unexpected => panic!("expected conflict, got {unexpected:?}"),
        }
        assert_eq!(
            usecase.read(other.id.unwrap()).await.unwrap().email,
            "luis@example.com"
        );
    }

    #[tokio::test]
    async fn operations_on_unknown_ids_are_not_found() {
        let usecase = categories();

        let read = usecase.read(99).await.unwrap_err();
        let update = usecase
            .update(category_request("Nada"), 99)
            .await
            .unwrap_err();
        let toggle = usecase.toggle_status(99).await.unwrap_err();

        for err in [read, update, toggle] {
            assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
            assert_eq!(err.to_string(), "No se encontró la categoría");
        }
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_touching_the_store() {
        let mut store = MockCategoryStore::new();
        store.expect_find_by_unique_key().never();
        store.expect_save().never();
        let usecase: Categories<_> = CrudUseCase::new(Arc::new(store));

        let err = usecase
            .create(UpsertCategoryModel::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CrudError::Invalid(_)));
    }

    #[tokio::test]
    async fn store_unique_violation_becomes_conflict() {
        let mut store = MockCategoryStore::new();
        store
            .expect_find_by_unique_key()
            .returning(|_| Ok(None));
        store.expect_save().returning(|_| {
            Err(UniqueViolation {
                constraint: Some("categories_name_key".to_string()),
                field: Some("name".to_string()),
            }
            .into())
        });
        let usecase: Categories<_> = CrudUseCase::new(Arc::new(store));

        let err = usecase
            .create(category_request("Adventure"))
            .await
            .unwrap_err();

        match err {
            CrudError::Conflict { field, message } => {
                assert_eq!(field.as_deref(), Some("name"));
                assert_eq!(message, "Ya existe la categoría con el mismo name");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unexpected_store_failure_is_internal_with_generic_message() {
        let mut store = MockCategoryStore::new();
        store
            .expect_find_by_unique_key()
            .returning(|_| Ok(None));
        store
            .expect_save()
            .returning(|_| Err(anyhow!("connection reset by peer")));
        let usecase: Categories<_> = CrudUseCase::new(Arc::new(store));

        let err = usecase
            .create(category_request("Adventure"))
            .await
            .unwrap_err();

        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(err.to_string(), "Error al crear la categoría");
        match err {
            CrudError::Internal { source, .. } => {
                assert!(source.to_string().contains("connection reset"))
            }
            other => panic!("expected internal error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_reference_on_update_is_invalid() {
        let mut store = MockCategoryStore::new();
        store
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(stored_category(id, EntityStatus::Active))));
        store.expect_save().returning(|_| {
            Err(ForeignKeyViolation {
                constraint: Some("categories_image_id_fkey".to_string()),
            }
            .into())
        });
        let usecase: Categories<_> = CrudUseCase::new(Arc::new(store));

        let err = usecase
            .update(
                UpsertCategoryModel {
                    image_id: Some(404),
                    ..Default::default()
                },
                3,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CrudError::Invalid(_)));
    }

    #[tokio::test]
    async fn delete_only_looks_for_active_entities() {
        let mut store = MockCategoryStore::new();
        store
            .expect_find_by_id_and_status()
            .with(eq(7), eq(EntityStatus::Active))
            .returning(|_, _| Ok(None));
        store.expect_save().never();
        let usecase: Categories<_> = CrudUseCase::new(Arc::new(store));

        let err = usecase.delete(7).await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn toggle_saves_the_flipped_status() {
        let mut store = MockCategoryStore::new();
        store
            .expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(stored_category(id, EntityStatus::Inactive))));
        store
            .expect_save()
            .withf(|entity| entity.status == EntityStatus::Active && entity.id == Some(5))
            .times(1)
            .returning(Ok);
        let usecase: Categories<_> = CrudUseCase::new(Arc::new(store));

        let toggled = usecase.toggle_status(5).await.unwrap();

        assert_eq!(toggled.status, EntityStatus::Active);
    }
}
