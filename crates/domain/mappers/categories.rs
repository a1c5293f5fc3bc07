use crate::domain::{
    entities::categories::CategoryEntity,
    mappers::{
        EntityMapper, MappingError, ResourceLabels, UniqueKey, non_blank, required_text,
        trimmed_key,
    },
    value_objects::{
        categories::{CategoryModel, UpsertCategoryModel},
        enums::entity_statuses::EntityStatus,
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "categories",
    singular: "la categoría",
    plural: "categorías",
};

const EMPTY_NAME: &str = "El nombre de la categoría no puede estar vacío";

pub struct CategoryMapper;

impl EntityMapper for CategoryMapper {
    type Entity = CategoryEntity;
    type Request = UpsertCategoryModel;
    type Response = CategoryModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertCategoryModel) -> Result<CategoryEntity, MappingError> {
        Ok(CategoryEntity {
            id: None,
            name: required_text(request.name, EMPTY_NAME)?,
            description: request.description,
            image_id: request.image_id,
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        })
    }

    fn to_response(entity: &CategoryEntity) -> CategoryModel {
        CategoryModel {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
            image_id: entity.image_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(
        request: UpsertCategoryModel,
        entity: &mut CategoryEntity,
    ) -> Result<(), MappingError> {
        if let Some(name) = request.name {
            entity.name = non_blank(name, EMPTY_NAME)?;
        }
        if let Some(description) = request.description {
            entity.description = Some(description);
        }
        if let Some(image_id) = request.image_id {
            entity.image_id = Some(image_id);
        }
        Ok(())
    }

    fn unique_key(request: &UpsertCategoryModel) -> Option<UniqueKey> {
        trimmed_key("name", request.name.as_ref())
    }
}
