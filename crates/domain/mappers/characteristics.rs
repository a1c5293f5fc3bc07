use crate::domain::{
    entities::characteristics::CharacteristicEntity,
    mappers::{
        EntityMapper, MappingError, ResourceLabels, UniqueKey, non_blank, required_text,
        trimmed_key,
    },
    value_objects::{
        characteristics::{CharacteristicModel, UpsertCharacteristicModel},
        enums::entity_statuses::EntityStatus,
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "characteristics",
    singular: "la característica",
    plural: "características",
};

const EMPTY_NAME: &str = "El nombre de la característica no puede estar vacío";

pub struct CharacteristicMapper;

impl EntityMapper for CharacteristicMapper {
    type Entity = CharacteristicEntity;
    type Request = UpsertCharacteristicModel;
    type Response = CharacteristicModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertCharacteristicModel) -> Result<CharacteristicEntity, MappingError> {
        Ok(CharacteristicEntity {
            id: None,
            name: required_text(request.name, EMPTY_NAME)?,
            image_id: request.image_id,
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        })
    }

    fn to_response(entity: &CharacteristicEntity) -> CharacteristicModel {
        CharacteristicModel {
            id: entity.id,
            name: entity.name.clone(),
            image_id: entity.image_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(
        request: UpsertCharacteristicModel,
        entity: &mut CharacteristicEntity,
    ) -> Result<(), MappingError> {
        if let Some(name) = request.name {
            entity.name = non_blank(name, EMPTY_NAME)?;
        }
        if let Some(image_id) = request.image_id {
            entity.image_id = Some(image_id);
        }
        Ok(())
    }

    fn unique_key(request: &UpsertCharacteristicModel) -> Option<UniqueKey> {
        trimmed_key("name", request.name.as_ref())
    }
}
