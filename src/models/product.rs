use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub article_no: String,
    pub product_name: String,
    pub in_price: Decimal,
    pub price: Decimal,
    pub unit: Option<String>,
    pub in_stock: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload.
///
/// Column values are kept as their textual form and cast by Postgres, so a
/// missing, null or ill-typed value is rejected by the table, not the parser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default, deserialize_with = "column_text")]
    pub article_no: Option<String>,
    #[serde(default, deserialize_with = "column_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "column_text")]
    pub in_price: Option<String>,
    #[serde(default, deserialize_with = "column_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "column_text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "column_text")]
    pub in_stock: Option<String>,
    #[serde(default, deserialize_with = "column_text")]
    pub description: Option<String>,
}

/// Partial update payload.
///
/// The outer `Option` tells whether the field was present in the body, the
/// inner one carries an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub article_no: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub product_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub in_price: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub price: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub unit: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub in_stock: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied_column_text")]
    pub description: Option<Option<String>>,
}

impl UpdateProductRequest {
    /// Supplied columns paired with their new value, in table order.
    pub fn assignments(self) -> Vec<(&'static str, Option<String>)> {
        [
            ("article_no", self.article_no),
            ("product_name", self.product_name),
            ("in_price", self.in_price),
            ("price", self.price),
            ("unit", self.unit),
            ("in_stock", self.in_stock),
            ("description", self.description),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }
}

fn column_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn supplied_column_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    column_text(deserializer).map(Some)
}
