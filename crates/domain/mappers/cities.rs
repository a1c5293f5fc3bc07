use crate::domain::{
    entities::cities::CityEntity,
    mappers::{
        EntityMapper, MappingError, ResourceLabels, UniqueKey, non_blank, required_text,
        trimmed_key,
    },
    value_objects::{
        cities::{CityModel, UpsertCityModel},
        enums::entity_statuses::EntityStatus,
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "cities",
    singular: "la ciudad",
    plural: "ciudades",
};

const EMPTY_NAME: &str = "El nombre de la ciudad no puede estar vacío";

pub struct CityMapper;

impl EntityMapper for CityMapper {
    type Entity = CityEntity;
    type Request = UpsertCityModel;
    type Response = CityModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertCityModel) -> Result<CityEntity, MappingError> {
        Ok(CityEntity {
            id: None,
            name: required_text(request.name, EMPTY_NAME)?,
            country: request.country,
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        })
    }

    fn to_response(entity: &CityEntity) -> CityModel {
        CityModel {
            id: entity.id,
            name: entity.name.clone(),
            country: entity.country.clone(),
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(request: UpsertCityModel, entity: &mut CityEntity) -> Result<(), MappingError> {
        if let Some(name) = request.name {
            entity.name = non_blank(name, EMPTY_NAME)?;
        }
        if let Some(country) = request.country {
            entity.country = Some(country);
        }
        Ok(())
    }

    fn unique_key(request: &UpsertCityModel) -> Option<UniqueKey> {
        trimmed_key("name", request.name.as_ref())
    }
}
