use anyhow::Result;
use async_trait::async_trait;
use diesel::{PgConnection, RunQueryDsl, delete, insert_into, prelude::*, update};
use std::{collections::HashMap, sync::Arc};

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error,
    postgres_connection::PgPoolSquad,
    schema::{tourist_plan_characteristics, tourist_plans},
};
use domain::{
    entities::tourist_plans::{
        TouristPlanChangeset, TouristPlanCharacteristicRow, TouristPlanEntity, TouristPlanRow,
    },
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct TouristPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TouristPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

/// Loads the characteristic links of the given plans and builds the entities.
fn with_characteristics(
    conn: &mut PgConnection,
    rows: Vec<TouristPlanRow>,
) -> QueryResult<Vec<TouristPlanEntity>> {
    let plan_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

    let links = tourist_plan_characteristics::table
        .filter(tourist_plan_characteristics::tourist_plan_id.eq_any(plan_ids))
        .order((
            tourist_plan_characteristics::tourist_plan_id.asc(),
            tourist_plan_characteristics::characteristic_id.asc(),
        ))
        .select(TouristPlanCharacteristicRow::as_select())
        .load::<TouristPlanCharacteristicRow>(conn)?;

    let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
    for link in links {
        grouped
            .entry(link.tourist_plan_id)
            .or_default()
            .push(link.characteristic_id);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let characteristic_ids = grouped.remove(&row.id).unwrap_or_default();
            TouristPlanEntity::from_row(row, characteristic_ids)
        })
        .collect())
}

#[async_trait]
impl CrudRepository for TouristPlanPostgres {
    type Entity = TouristPlanEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<TouristPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = tourist_plans::table
            .find(id)
            .select(TouristPlanRow::as_select())
            .load::<TouristPlanRow>(&mut conn)?;

        Ok(with_characteristics(&mut conn, rows)?.into_iter().next())
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<TouristPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = tourist_plans::table
            .filter(tourist_plans::status.eq(status.as_i16()))
            .order(tourist_plans::id.asc())
            .select(TouristPlanRow::as_select())
            .load::<TouristPlanRow>(&mut conn)?;

        Ok(with_characteristics(&mut conn, rows)?)
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<TouristPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = tourist_plans::table
            .find(id)
            .filter(tourist_plans::status.eq(status.as_i16()))
            .select(TouristPlanRow::as_select())
            .load::<TouristPlanRow>(&mut conn)?;

        Ok(with_characteristics(&mut conn, rows)?.into_iter().next())
    }

    async fn find_by_unique_key(&self, key: &str) -> Result<Option<TouristPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = tourist_plans::table
            .filter(tourist_plans::title.eq(key))
            .select(TouristPlanRow::as_select())
            .load::<TouristPlanRow>(&mut conn)?;

        Ok(with_characteristics(&mut conn, rows)?.into_iter().next())
    }

    async fn save(&self, entity: TouristPlanEntity) -> Result<TouristPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = TouristPlanChangeset::from(&entity);

        // Row and link table change together or not at all.
        let saved = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let row = match entity.id {
                    None => insert_into(tourist_plans::table)
                        .values(&changeset)
                        .returning(TouristPlanRow::as_returning())
                        .get_result::<TouristPlanRow>(conn)?,
                    Some(id) => update(tourist_plans::table.find(id))
                        .set(&changeset)
                        .returning(TouristPlanRow::as_returning())
                        .get_result::<TouristPlanRow>(conn)?,
                };

                delete(
                    tourist_plan_characteristics::table
                        .filter(tourist_plan_characteristics::tourist_plan_id.eq(row.id)),
                )
                .execute(conn)?;

                let links: Vec<TouristPlanCharacteristicRow> = entity
                    .characteristic_ids
                    .iter()
                    .map(|&characteristic_id| TouristPlanCharacteristicRow {
                        tourist_plan_id: row.id,
                        characteristic_id,
                    })
                    .collect();

                if !links.is_empty() {
                    insert_into(tourist_plan_characteristics::table)
                        .values(&links)
                        .execute(conn)?;
                }

                Ok(TouristPlanEntity::from_row(
                    row,
                    entity.characteristic_ids.clone(),
                ))
            })
            .map_err(|err| translate_write_error(err, "tourist_plans"))?;

        Ok(saved)
    }
}
