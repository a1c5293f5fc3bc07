use crate::domain::{
    entities::users::UserEntity,
    mappers::{
        EntityMapper, MappingError, ResourceLabels, UniqueKey, non_blank, required_text,
        trimmed_key,
    },
    value_objects::{
        enums::entity_statuses::EntityStatus,
        iam::{MIN_PASSWORD_LENGTH, hash_password},
        users::{UpsertUserModel, UserModel},
    },
};

const LABELS: ResourceLabels = ResourceLabels {
    resource: "users",
    singular: "el usuario",
    plural: "usuarios",
};

pub struct UserMapper;

fn valid_email(raw: String) -> Result<String, MappingError> {
    let email = non_blank(raw, "El correo electrónico es obligatorio")?.to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(MappingError::Invalid(
            "El correo electrónico no es válido".to_string(),
        )),
    }
}

fn hashed(password: String) -> Result<String, MappingError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(MappingError::Invalid(format!(
            "La contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(hash_password(&password)?)
}

impl EntityMapper for UserMapper {
    type Entity = UserEntity;
    type Request = UpsertUserModel;
    type Response = UserModel;

    fn labels() -> &'static ResourceLabels {
        &LABELS
    }

    fn to_entity(request: UpsertUserModel) -> Result<UserEntity, MappingError> {
        let email = required_text(request.email, "El correo electrónico es obligatorio")?;
        let password = request.password.ok_or_else(|| {
            MappingError::Invalid("La contraseña es obligatoria".to_string())
        })?;

        Ok(UserEntity {
            id: None,
            name: required_text(request.name, "El nombre es obligatorio")?,
            last_name: required_text(request.last_name, "El apellido es obligatorio")?,
            email: valid_email(email)?,
            password_hash: hashed(password)?,
            role: request.role.unwrap_or_default(),
            status: EntityStatus::Active,
            created_at: None,
            updated_at: None,
        })
    }

    fn to_response(entity: &UserEntity) -> UserModel {
        UserModel {
            id: entity.id,
            name: entity.name.clone(),
            last_name: entity.last_name.clone(),
            email: entity.email.clone(),
            role: entity.role,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    fn partial_update(request: UpsertUserModel, entity: &mut UserEntity) -> Result<(), MappingError> {
        let mut merged = entity.clone();

        if let Some(name) = request.name {
            merged.name = non_blank(name, "El nombre es obligatorio")?;
        }
        if let Some(last_name) = request.last_name {
            merged.last_name = non_blank(last_name, "El apellido es obligatorio")?;
        }
        if let Some(email) = request.email {
            merged.email = valid_email(email)?;
        }
        if let Some(password) = request.password {
            merged.password_hash = hashed(password)?;
        }
        if let Some(role) = request.role {
            merged.role = role;
        }

        *entity = merged;
        Ok(())
    }

    fn unique_key(request: &UpsertUserModel) -> Option<UniqueKey> {
        trimmed_key("email", request.email.as_ref()).map(|key| UniqueKey {
            value: key.value.to_lowercase(),
            ..key
        })
    }
}
