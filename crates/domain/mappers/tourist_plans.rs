use crate::domain::{
    entities::tourist_plans::TouristPlanEntity,
    mappers::{EntityMapper, MappingError, ResourceLabels, UniqueKey, required, required_text, trimmed_key},
    value_objects::{
        enums::entity_statuses::EntityStatus,
        tourist_plans::{TouristPlanModel, UpsertTouristPlanModel},
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "tourist_plans",
    singular: "el plan turístico",
    plural: "planes turísticos",
};

const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 3..=100;
const MAX_DESCRIPTION_LENGTH: usize = 500;

pub struct TouristPlanMapper;

fn invalid(message: &str) -> MappingError {
    MappingError::Invalid(message.to_string())
}

fn normalized_ids(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn validate(entity: &TouristPlanEntity) -> Result<(), MappingError> {
    if !TITLE_LENGTH.contains(&entity.title.chars().count()) {
        return Err(invalid("El título debe tener entre 3 y 100 caracteres"));
    }
    if entity.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(invalid("La descripción no puede superar los 500 caracteres"));
    }
    if entity.price.is_some_and(|price| price.is_nan() || price < 0.0) {
        return Err(invalid("El precio no puede ser negativo"));
    }
    if entity.capacity.is_some_and(|capacity| capacity <= 0) {
        return Err(invalid("La capacidad debe ser mayor a cero"));
    }
    if let (Some(start), Some(end)) = (
        entity.availability_start_date,
        entity.availability_end_date,
    ) {
        if end < start {
            return Err(invalid(
                "La fecha de fin de disponibilidad no puede ser anterior a la de inicio",
            ));
        }
    }
    Ok(())
}

impl EntityMapper for TouristPlanMapper {
    type Entity = TouristPlanEntity;
    type Request = UpsertTouristPlanModel;
    type Response = TouristPlanModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertTouristPlanModel) -> Result<TouristPlanEntity, MappingError> {
        let entity = TouristPlanEntity {
            id: None,
            title: required_text(request.title, "El título es obligatorio")?,
            description: required_text(request.description, "La descripción es obligatoria")?,
            price: request.price,
            seller: request.seller,
            city_id: required(request.city_id, "La ciudad es obligatoria")?,
            category_id: required(request.category_id, "La categoría es obligatoria")?,
            availability_start_date: request.availability_start_date,
            availability_end_date: request.availability_end_date,
            capacity: request.capacity,
            duration: request.duration,
            food_included: request.food_included.unwrap_or(false),
            wifi_included: request.wifi_included.unwrap_or(false),
            pets_friendly: request.pets_friendly.unwrap_or(false),
            disability_access: request.disability_access.unwrap_or(false),
            characteristic_ids: normalized_ids(request.characteristic_ids.unwrap_or_default()),
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        };
        validate(&entity)?;
        Ok(entity)
    }

    fn to_response(entity: &TouristPlanEntity) -> TouristPlanModel {
        TouristPlanModel {
            id: entity.id,
            title: entity.title.clone(),
            description: entity.description.clone(),
            price: entity.price,
            seller: entity.seller.clone(),
            city_id: entity.city_id,
            category_id: entity.category_id,
            characteristic_ids: entity.characteristic_ids.clone(),
            availability_start_date: entity.availability_start_date,
            availability_end_date: entity.availability_end_date,
            capacity: entity.capacity,
            duration: entity.duration.clone(),
            food_included: entity.food_included,
            wifi_included: entity.wifi_included,
            pets_friendly: entity.pets_friendly,
            disability_access: entity.disability_access,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(
        request: UpsertTouristPlanModel,
        entity: &mut TouristPlanEntity,
    ) -> Result<(), MappingError> {
        let mut merged = entity.clone();

        if request.title.is_some() {
            merged.title = required_text(request.title, "El título es obligatorio")?;
        }
        if request.description.is_some() {
            merged.description =
                required_text(request.description, "La descripción es obligatoria")?;
        }
        if let Some(price) = request.price {
            merged.price = Some(price);
        }
        if let Some(seller) = request.seller {
            merged.seller = Some(seller);
        }
        if let Some(city_id) = request.city_id {
            merged.city_id = city_id;
        }
        if let Some(category_id) = request.category_id {
            merged.category_id = category_id;
        }
        if let Some(characteristic_ids) = request.characteristic_ids {
            merged.characteristic_ids = normalized_ids(characteristic_ids);
        }
        if let Some(start) = request.availability_start_date {
            merged.availability_start_date = Some(start);
        }
        if let Some(end) = request.availability_end_date {
            merged.availability_end_date = Some(end);
        }
        if let Some(capacity) = request.capacity {
            merged.capacity = Some(capacity);
        }
        if let Some(duration) = request.duration {
            merged.duration = Some(duration);
        }
        if let Some(food_included) = request.food_included {
            merged.food_included = food_included;
        }
        if let Some(wifi_included) = request.wifi_included {
            merged.wifi_included = wifi_included;
        }
        if let Some(pets_friendly) = request.pets_friendly {
            merged.pets_friendly = pets_friendly;
        }
        if let Some(disability_access) = request.disability_access {
            merged.disability_access = disability_access;
        }

        validate(&merged)?;
        *entity = merged;
        Ok(())
    }

    fn unique_key(request: &UpsertTouristPlanModel) -> Option<UniqueKey> {
        trimmed_key("title", request.title.as_ref())
    }
}
