use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{CreateProductRequest, Product, UpdateProductRequest},
};

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn count(pool: &PgPool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn create_product(pool: &PgPool, req: &CreateProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (article_no, product_name, in_price, price, unit, in_stock, description)
         VALUES ($1, $2, CAST($3 AS NUMERIC), CAST($4 AS NUMERIC), $5, CAST($6 AS INTEGER), $7)
         RETURNING *",
    )
    .bind(&req.article_no)
    .bind(&req.product_name)
    .bind(&req.in_price)
    .bind(&req.price)
    .bind(&req.unit)
    .bind(&req.in_stock)
    .bind(&req.description)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Inserts all rows in a single statement and returns how many were written.
pub async fn bulk_create(pool: &PgPool, rows: &[CreateProductRequest]) -> Result<u64> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO products (article_no, product_name, in_price, price, unit, in_stock, description) ",
    );

    query_builder.push_values(rows, |mut b, row| {
        b.push_bind(&row.article_no)
            .push_bind(&row.product_name)
            .push_bind(&row.in_price)
            .push_unseparated("::numeric")
            .push_bind(&row.price)
            .push_unseparated("::numeric")
            .push_bind(&row.unit)
            .push_bind(&row.in_stock)
            .push_unseparated("::integer")
            .push_bind(&row.description);
    });

    let result = query_builder.build().execute(pool).await?;

    Ok(result.rows_affected())
}

/// SQL type the textual value of a column is cast to before it is stored.
/// Text columns are cast to `TEXT`, not their `VARCHAR(n)`, so that an
/// over-long value is rejected instead of truncated.
fn column_type(column: &str) -> &'static str {
    match column {
        "in_price" | "price" => "NUMERIC",
        "in_stock" => "INTEGER",
        _ => "TEXT",
    }
}

/// Merges the supplied fields onto the row. `updated_at` only moves when at
/// least one value actually differs. Returns `None` when the row does not
/// exist.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: UpdateProductRequest,
) -> Result<Option<Product>> {
    let assignments = req.assignments();
    if assignments.is_empty() {
        return find_by_id(pool, id).await;
    }

    let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE products SET ");

    let mut fields = query_builder.separated(", ");
    for (column, value) in &assignments {
        fields
            .push(format_args!("{} = CAST(", column))
            .push_bind_unseparated(value.clone())
            .push_unseparated(format_args!(" AS {})", column_type(column)));
    }
    fields.push("updated_at = NOW()");

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" AND (");

    let mut changed = query_builder.separated(" OR ");
    for (column, value) in &assignments {
        changed
            .push(format_args!("{} IS DISTINCT FROM CAST(", column))
            .push_bind_unseparated(value.clone())
            .push_unseparated(format_args!(" AS {})", column_type(column)));
    }

    query_builder.push(") RETURNING *");

    let updated = query_builder
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;

    match updated {
        Some(product) => Ok(Some(product)),
        // nothing differed, or the row is gone
        None => find_by_id(pool, id).await,
    }
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
