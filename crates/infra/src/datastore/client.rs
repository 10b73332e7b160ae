//! Minimal PostgREST client for the Supabase `rest/v1` surface

use paneboard_domain::{DatastoreConfig, PaneboardError, Result};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::http::{endpoint, HttpClient};

const PREFER_REPRESENTATION: &str = "return=representation";

/// Table-level row operations keyed by `id`
#[derive(Clone)]
pub struct PostgrestClient {
    http: HttpClient,
    base_url: String,
    service_key: String,
}

impl PostgrestClient {
    pub fn new(http: HttpClient, config: &DatastoreConfig) -> Self {
        Self { http, base_url: config.url.clone(), service_key: config.service_key.clone() }
    }

    fn table_url(&self, table: &str) -> Result<Url> {
        endpoint(&self.base_url, ["rest", "v1", table])
    }

    fn authed(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// `select=*` with extra query pairs such as filters and ordering.
    pub async fn select<T>(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.table_url(table)?;
        let request = self.authed(Method::GET, url).query(&[("select", "*")]).query(query);

        debug!(table, "selecting rows");
        let rows: Vec<Value> = self.http.send_json(request).await?;
        decode_rows(rows)
    }

    /// All rows, newest first.
    pub async fn select_recent<T>(&self, table: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.select(table, &[("order", "created_at.desc")]).await
    }

    /// The row whose `id` equals `id`; `NotFound` when there is none.
    pub async fn select_by_id<T>(&self, table: &str, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let filter = eq(id);
        let rows = self.select(table, &[("id", filter.as_str()), ("limit", "1")]).await?;
        first_row(rows, table, id)
    }

    /// Insert one row and return it as stored.
    pub async fn insert<B, T>(&self, table: &str, row: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table)?;
        let request = self
            .authed(Method::POST, url)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(row);

        debug!(table, "inserting row");
        let rows: Vec<Value> = self.http.send_json(request).await?;
        first_row(decode_rows(rows)?, table, "<new>")
    }

    /// Patch the row with this `id` and return the updated row.
    pub async fn update<B, T>(&self, table: &str, id: &str, patch: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table)?;
        let filter = eq(id);
        let request = self
            .authed(Method::PATCH, url)
            .query(&[("id", filter.as_str())])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(patch);

        debug!(table, id, "updating row");
        let rows: Vec<Value> = self.http.send_json(request).await?;
        first_row(decode_rows(rows)?, table, id)
    }
}

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

fn first_row<T>(rows: Vec<T>, table: &str, id: &str) -> Result<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| PaneboardError::NotFound(format!("No row in {table} with id {id}")))
}

/// Decode rows, accepting numeric identifiers where the domain keeps strings.
fn decode_rows<T>(rows: Vec<Value>) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    rows.into_iter()
        .map(|mut row| {
            stringify_ids(&mut row);
            serde_json::from_value(row)
                .map_err(|e| PaneboardError::Database(format!("Unexpected row shape: {e}")))
        })
        .collect()
}

fn stringify_ids(row: &mut Value) {
    let Some(object) = row.as_object_mut() else {
        return;
    };
    for (key, value) in object.iter_mut() {
        let is_key_column = key == "id" || key.ends_with("_id");
        if is_key_column && value.is_number() {
            *value = Value::String(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        id: String,
        team_id: Option<String>,
        amount: f64,
    }

    #[test]
    fn numeric_key_columns_become_strings() {
        let rows: Vec<Row> =
            decode_rows(vec![json!({ "id": 7, "team_id": 3, "amount": 120.5 })]).unwrap();

        assert_eq!(rows[0].id, "7");
        assert_eq!(rows[0].team_id.as_deref(), Some("3"));
        assert!((rows[0].amount - 120.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_result_is_not_found() {
        let err = first_row::<Row>(Vec::new(), "estimates", "9").unwrap_err();

        assert!(matches!(err, PaneboardError::NotFound(_)));
    }

    #[test]
    fn wrong_shape_is_database_error() {
        let err = decode_rows::<Row>(vec![json!({ "name": "x" })]).unwrap_err();

        assert!(matches!(err, PaneboardError::Database(_)));
    }
}
