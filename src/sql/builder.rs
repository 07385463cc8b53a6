//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the properties table.

use serde_json::{Map, Value};

/// Quote identifier for PostgreSQL (safe: column names come from this crate).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// INSERT from a record map. Null entries are skipped so unset optionals fall
/// back to column defaults (NULL). Caller appends RETURNING and the id param.
pub fn insert_property(table: &str, record: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut columns = Vec::new();
    let mut placeholders = Vec::new();
    for (col, value) in record {
        if value.is_null() {
            continue;
        }
        columns.push(quoted(col));
        let n = q.push_param(value.clone());
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        table,
        columns.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by id. Null entries become literal NULL assignments so a cleared
/// optional actually clears the stored value. Also bumps updated_at.
pub fn update_property(table: &str, record: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut assignments = Vec::new();
    for (col, value) in record {
        if value.is_null() {
            assignments.push(format!("{} = NULL", quoted(col)));
        } else {
            let n = q.push_param(value.clone());
            assignments.push(format!("{} = ${}", quoted(col), n));
        }
    }
    assignments.push("updated_at = NOW()".to_string());
    let id_param = q.params.len() + 1;
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING *",
        table,
        assignments.join(", "),
        id_param
    );
    q
}

/// SELECT one row by id. Caller binds the id as sole param.
pub fn select_property(table: &str) -> String {
    format!("SELECT * FROM {} WHERE id = $1", table)
}

/// SELECT list with exact-match filters, newest first.
pub fn select_properties(table: &str, filters: &[(String, Value)], limit: u32, offset: u32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sql = format!("SELECT * FROM {}", table);
    if !filters.is_empty() {
        let mut clauses = Vec::new();
        for (col, value) in filters {
            let n = q.push_param(value.clone());
            clauses.push(format!("{} = ${}", quoted(col), n));
        }
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(&format!(
        " ORDER BY created_at DESC LIMIT {} OFFSET {}",
        limit, offset
    ));
    q.sql = sql;
    q
}

/// DELETE by id, returning the deleted row. Caller binds the id as sole param.
pub fn delete_property(table: &str) -> String {
    format!("DELETE FROM {} WHERE id = $1 RETURNING *", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("name".to_string(), json!("Green Valley PG"));
        m.insert("price_from".to_string(), json!(5000.0));
        m.insert("price_to".to_string(), Value::Null);
        m.insert("images".to_string(), json!(["http://a.com/1.jpg"]));
        m
    }

    #[test]
    fn insert_skips_null_columns() {
        let q = insert_property("roomsaathi.properties", &record());
        assert!(!q.sql.contains("price_to"));
        assert!(q.sql.contains("\"name\""));
        assert!(q.sql.ends_with("RETURNING *"));
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn update_clears_null_columns_explicitly() {
        let q = update_property("roomsaathi.properties", &record());
        assert!(q.sql.contains("\"price_to\" = NULL"));
        assert!(q.sql.contains("updated_at = NOW()"));
        // id is bound after the three non-null values
        assert!(q.sql.contains("WHERE id = $4"));
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn list_filters_are_parameterized() {
        let filters = vec![
            ("city".to_string(), json!("Sikar")),
            ("published".to_string(), json!(true)),
        ];
        let q = select_properties("roomsaathi.properties", &filters, 50, 10);
        assert!(q.sql.contains("\"city\" = $1"));
        assert!(q.sql.contains("\"published\" = $2"));
        assert!(q.sql.contains("LIMIT 50 OFFSET 10"));
        assert_eq!(q.params.len(), 2);
    }
}
