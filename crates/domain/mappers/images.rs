use url::Url;

use crate::domain::{
    entities::images::ImageEntity,
    mappers::{EntityMapper, MappingError, ResourceLabels, required_text},
    value_objects::{
        enums::entity_statuses::EntityStatus,
        images::{ImageModel, UpsertImageModel},
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "images",
    singular: "la imagen",
    plural: "imágenes",
};

const EMPTY_URL: &str = "La URL de la imagen no puede estar vacía";
const INVALID_URL: &str = "La URL de la imagen debe ser una dirección http o https válida";

pub struct ImageMapper;

fn valid_url(raw: Option<String>) -> Result<String, MappingError> {
    let raw = required_text(raw, EMPTY_URL)?;
    match Url::parse(&raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(raw),
        _ => Err(MappingError::Invalid(INVALID_URL.to_string())),
    }
}

impl EntityMapper for ImageMapper {
    type Entity = ImageEntity;
    type Request = UpsertImageModel;
    type Response = ImageModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertImageModel) -> Result<ImageEntity, MappingError> {
        Ok(ImageEntity {
            id: None,
            url: valid_url(request.url)?,
            tourist_plan_id: request.tourist_plan_id,
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        })
    }

    fn to_response(entity: &ImageEntity) -> ImageModel {
        ImageModel {
            id: entity.id,
            url: entity.url.clone(),
            tourist_plan_id: entity.tourist_plan_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(request: UpsertImageModel, entity: &mut ImageEntity) -> Result<(), MappingError> {
        if request.url.is_some() {
            entity.url = valid_url(request.url)?;
        }
        if let Some(tourist_plan_id) = request.tourist_plan_id {
            entity.tourist_plan_id = Some(tourist_plan_id);
        }
        Ok(())
    }
}
