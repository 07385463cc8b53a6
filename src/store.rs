//! Properties table DDL and database bootstrap. The table lives in a schema
//! named from `ROOMSAATHI_SCHEMA` env (default `roomsaathi`).

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Schema name for the properties table. Must be a valid PostgreSQL identifier.
pub fn roomsaathi_schema() -> String {
    std::env::var("ROOMSAATHI_SCHEMA").unwrap_or_else(|_| "roomsaathi".into())
}

/// Schema-qualified properties table name (e.g. "roomsaathi.properties").
pub fn qualified_properties_table() -> String {
    format!("{}.properties", roomsaathi_schema())
}

/// Create the schema and the properties table if missing. Idempotent; safe to
/// call at every startup. Columns correspond 1:1 to PropertyRecord fields.
pub async fn ensure_property_tables(pool: &PgPool) -> Result<(), AppError> {
    let schema = roomsaathi_schema();
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", schema))
        .execute(pool)
        .await?;

    let table = qualified_properties_table();
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            property_type TEXT NOT NULL,
            city TEXT NOT NULL,
            locality TEXT NOT NULL,
            address TEXT NOT NULL,
            state TEXT NOT NULL,
            pincode TEXT,
            description TEXT NOT NULL,
            price_from DOUBLE PRECISION NOT NULL,
            price_to DOUBLE PRECISION,
            offer_price DOUBLE PRECISION,
            total_floors BIGINT NOT NULL DEFAULT 1,
            rooms_per_floor BIGINT NOT NULL DEFAULT 1,
            latitude DOUBLE PRECISION,
            longitude DOUBLE PRECISION,
            images JSONB NOT NULL DEFAULT '[]',
            video_url TEXT,
            contact_phone TEXT,
            contact_email TEXT,
            owner_name TEXT,
            owner_details TEXT,
            verified BOOLEAN NOT NULL DEFAULT FALSE,
            published BOOLEAN NOT NULL DEFAULT FALSE,
            availability_status TEXT NOT NULL DEFAULT 'Available',
            accommodation_type TEXT,
            suitable_for JSONB NOT NULL DEFAULT '[]',
            food_included BOOLEAN NOT NULL DEFAULT FALSE,
            property_size DOUBLE PRECISION,
            bedrooms BIGINT,
            bathrooms BIGINT,
            balconies BIGINT,
            floor_number BIGINT,
            furnishing_status TEXT,
            parking_type TEXT,
            carpet_area DOUBLE PRECISION,
            built_up_area DOUBLE PRECISION,
            property_age DOUBLE PRECISION,
            facing_direction TEXT,
            lift_available BOOLEAN,
            power_backup BOOLEAN,
            water_supply TEXT,
            maintenance_charges DOUBLE PRECISION,
            security_deposit_months DOUBLE PRECISION,
            gender_preference TEXT,
            sharing_type TEXT,
            room_type TEXT,
            visitor_policy TEXT,
            meal_options JSONB,
            meal_charges DOUBLE PRECISION,
            notice_period_days BIGINT,
            lock_in_period_months BIGINT,
            gate_closing_time TEXT,
            attached_bathroom BOOLEAN,
            laundry_service BOOLEAN,
            total_capacity BIGINT,
            current_occupancy BIGINT,
            hostel_gender TEXT,
            meal_plans JSONB,
            room_types_available JSONB,
            security_hours TEXT,
            warden_available BOOLEAN,
            study_room BOOLEAN,
            common_area BOOLEAN,
            kitchen_access BOOLEAN,
            separate_entrance BOOLEAN,
            min_stay_duration BIGINT,
            max_stay_duration BIGINT,
            daily_rate DOUBLE PRECISION,
            weekly_rate DOUBLE PRECISION,
            monthly_rate DOUBLE PRECISION,
            check_in_time TEXT,
            check_out_time TEXT,
            cancellation_policy TEXT,
            cleaning_service TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        table
    );
    sqlx::query(&ddl).execute(pool).await?;

    for column in ["city", "property_type", "published"] {
        let idx = format!(
            "CREATE INDEX IF NOT EXISTS properties_{}_idx ON {} ({})",
            column, table, column
        );
        sqlx::query(&idx).execute(pool).await?;
    }

    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_parsing() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/roomsaathi").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres");
        assert_eq!(name, "roomsaathi");
        let (_, name) =
            parse_db_name_from_url("postgres://u:p@host:5432/listings?sslmode=require").unwrap();
        assert_eq!(name, "listings");
    }
}
