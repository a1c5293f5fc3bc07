use crate::domain::{
    entities::reservations::ReservationEntity,
    mappers::{EntityMapper, MappingError, ResourceLabels, required},
    value_objects::{
        enums::entity_statuses::EntityStatus,
        reservations::{ReservationModel, UpsertReservationModel},
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "reservations",
    singular: "la reserva",
    plural: "reservas",
};

pub struct ReservationMapper;

fn validate(entity: &ReservationEntity) -> Result<(), MappingError> {
    if entity.end_date < entity.start_date {
        return Err(MappingError::Invalid(
            "La fecha de fin no puede ser anterior a la fecha de inicio".to_string(),
        ));
    }
    if entity.people_count <= 0 {
        return Err(MappingError::Invalid(
            "La cantidad de personas debe ser mayor a cero".to_string(),
        ));
    }
    Ok(())
}

impl EntityMapper for ReservationMapper {
    type Entity = ReservationEntity;
    type Request = UpsertReservationModel;
    type Response = ReservationModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertReservationModel) -> Result<ReservationEntity, MappingError> {
        let entity = ReservationEntity {
            id: None,
            tourist_plan_id: required(request.tourist_plan_id, "El plan turístico es obligatorio")?,
            user_id: required(request.user_id, "El usuario es obligatorio")?,
            start_date: required(request.start_date, "La fecha de inicio es obligatoria")?,
            end_date: required(request.end_date, "La fecha de fin es obligatoria")?,
            people_count: request.people_count.unwrap_or(1),
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        };
        validate(&entity)?;
        Ok(entity)
    }

    fn to_response(entity: &ReservationEntity) -> ReservationModel {
        ReservationModel {
            id: entity.id,
            tourist_plan_id: entity.tourist_plan_id,
            user_id: entity.user_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            people_count: entity.people_count,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(
        request: UpsertReservationModel,
        entity: &mut ReservationEntity,
    ) -> Result<(), MappingError> {
        let mut merged = entity.clone();

        if let Some(tourist_plan_id) = request.tourist_plan_id {
            merged.tourist_plan_id = tourist_plan_id;
        }
        if let Some(user_id) = request.user_id {
            merged.user_id = user_id;
        }
        if let Some(start_date) = request.start_date {
            merged.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            merged.end_date = end_date;
        }
        if let Some(people_count) = request.people_count {
            merged.people_count = people_count;
        }

        validate(&merged)?;
        *entity = merged;
        Ok(())
    }
}
