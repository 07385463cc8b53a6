//! Persistence gateway: the create/update seam the form core depends on, plus
//! the PostgreSQL implementation used by the admin back office.

use crate::error::AppError;
use crate::record::PropertyRecord;
use crate::sql::{
    delete_property, insert_property, select_properties, select_property, update_property,
    PgBindValue, QueryBuf,
};
use crate::store::qualified_properties_table;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

/// A property row as stored, with identity and timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedProperty {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: PropertyRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update interface consumed by the form core. Both calls are
/// single-shot; any timeout or retry policy belongs to the caller.
#[async_trait]
pub trait PropertyGateway: Send + Sync {
    async fn create_property(&self, record: &PropertyRecord)
        -> Result<PersistedProperty, AppError>;

    async fn update_property(
        &self,
        id: Uuid,
        record: &PropertyRecord,
    ) -> Result<PersistedProperty, AppError>;
}

/// PostgreSQL-backed property store.
#[derive(Clone)]
pub struct PgPropertyStore {
    pool: PgPool,
}

impl PgPropertyStore {
    pub fn new(pool: PgPool) -> Self {
        PgPropertyStore { pool }
    }

    /// Fetch one property by id, or None.
    pub async fn fetch(&self, id: Uuid) -> Result<Option<PersistedProperty>, AppError> {
        let sql = select_property(&qualified_properties_table());
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query(&sql)
            .bind(PgBindValue::Uuid(id))
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| persisted_from_row(&r)).transpose()
    }

    /// List properties with exact-match filters, newest first. Limit defaults
    /// to 100 and is capped at 1000.
    pub async fn list(
        &self,
        filters: &[(String, Value)],
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<PersistedProperty>, AppError> {
        const DEFAULT_LIMIT: u32 = 100;
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(1000);
        let offset = offset.unwrap_or(0);
        let q = select_properties(&qualified_properties_table(), filters, limit, offset);
        let rows = Self::query_rows(&self.pool, &q).await?;
        rows.iter().map(persisted_from_row).collect()
    }

    /// Delete by id, returning the deleted row or None.
    pub async fn delete(&self, id: Uuid) -> Result<Option<PersistedProperty>, AppError> {
        let sql = delete_property(&qualified_properties_table());
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query(&sql)
            .bind(PgBindValue::Uuid(id))
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| persisted_from_row(&r)).transpose()
    }

    async fn query_rows(
        pool: &PgPool,
        q: &QueryBuf,
    ) -> Result<Vec<sqlx::postgres::PgRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn execute_returning_one(
        pool: &PgPool,
        q: &QueryBuf,
        extra: Option<PgBindValue>,
    ) -> Result<Option<sqlx::postgres::PgRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        if let Some(b) = extra {
            query = query.bind(b);
        }
        Ok(query.fetch_optional(pool).await?)
    }
}

#[async_trait]
impl PropertyGateway for PgPropertyStore {
    async fn create_property(
        &self,
        record: &PropertyRecord,
    ) -> Result<PersistedProperty, AppError> {
        let map = record_to_map(record)?;
        let q = insert_property(&qualified_properties_table(), &map);
        let row = Self::execute_returning_one(&self.pool, &q, None)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
        persisted_from_row(&row)
    }

    async fn update_property(
        &self,
        id: Uuid,
        record: &PropertyRecord,
    ) -> Result<PersistedProperty, AppError> {
        let map = record_to_map(record)?;
        let q = update_property(&qualified_properties_table(), &map);
        let row = Self::execute_returning_one(&self.pool, &q, Some(PgBindValue::Uuid(id)))
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        persisted_from_row(&row)
    }
}

fn record_to_map(record: &PropertyRecord) -> Result<serde_json::Map<String, Value>, AppError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::BadRequest("record must serialize to an object".into())),
    }
}

fn persisted_from_row(row: &sqlx::postgres::PgRow) -> Result<PersistedProperty, AppError> {
    let value = row_to_json(row);
    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("stored row does not match record shape: {}", e)))
}

fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        let v = cell_to_value(row, name);
        map.insert(name.to_string(), v);
    }
    Value::Object(map)
}

fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(v) = row.try_get::<Option<i16>, _>(name) {
        if let Some(n) = v {
            return Value::Number(n.into());
        }
    }
    if let Ok(v) = row.try_get::<Option<i32>, _>(name) {
        if let Some(n) = v {
            return Value::Number(n.into());
        }
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(name) {
        if let Some(n) = v {
            return Value::Number(n.into());
        }
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = v {
            if let Some(n) = serde_json::Number::from_f64(n) {
                return Value::Number(n);
            }
        }
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(name) {
        if let Some(b) = v {
            return Value::Bool(b);
        }
    }
    if let Ok(v) = row.try_get::<Option<Uuid>, _>(name) {
        if let Some(u) = v {
            return Value::String(u.to_string());
        }
    }
    if let Ok(v) = row.try_get::<Option<DateTime<Utc>>, _>(name) {
        if let Some(d) = v {
            return Value::String(d.to_rfc3339());
        }
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(name) {
        if let Some(s) = v {
            return Value::String(s);
        }
    }
    if let Ok(v) = row.try_get::<Option<Value>, _>(name) {
        if let Some(j) = v {
            return j;
        }
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::normalize;

    #[test]
    fn record_map_keeps_null_optionals() {
        let mut draft = crate::draft::PropertyDraft::new();
        draft.name = "Green Valley PG".to_string();
        draft.locality = "Fatehpur".to_string();
        draft.address = "123 Main Rd".to_string();
        draft.description = "Nice place".to_string();
        draft.price_from = 5000.0;
        let map = record_to_map(&normalize(&draft)).unwrap();
        assert!(map["price_to"].is_null());
        assert_eq!(map["name"], "Green Valley PG");
        assert!(!map.contains_key("id"));
    }

    #[test]
    fn persisted_round_trips_through_flat_json() {
        let mut draft = crate::draft::PropertyDraft::new();
        draft.name = "Sunrise Hostel".to_string();
        draft.locality = "Other".to_string();
        draft.address = "Ring Road".to_string();
        draft.description = "Quiet".to_string();
        draft.price_from = 4000.0;
        let record = normalize(&draft);

        let mut json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        obj.insert("created_at".into(), Value::String(Utc::now().to_rfc3339()));
        obj.insert("updated_at".into(), Value::String(Utc::now().to_rfc3339()));

        let persisted: PersistedProperty = serde_json::from_value(json).unwrap();
        assert_eq!(persisted.record, record);
    }
}
