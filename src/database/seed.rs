use sqlx::PgPool;

use crate::{error::Result, models::CreateProductRequest, queries::product_queries};

fn demo_product(
    article_no: &str,
    product_name: &str,
    in_price: &str,
    price: &str,
    unit: &str,
    in_stock: i32,
    description: &str,
) -> CreateProductRequest {
    CreateProductRequest {
        article_no: Some(article_no.to_string()),
        product_name: Some(product_name.to_string()),
        in_price: Some(in_price.to_string()),
        price: Some(price.to_string()),
        unit: Some(unit.to_string()),
        in_stock: Some(in_stock.to_string()),
        description: Some(description.to_string()),
    }
}

pub fn demo_products() -> Vec<CreateProductRequest> {
    vec![
        demo_product(
            "ART-1001",
            "Premium Screwdriver Set",
            "15.99",
            "29.99",
            "set",
            150,
            "12-piece professional set",
        ),
        demo_product(
            "ART-1002",
            "Wireless Mouse",
            "8.50",
            "19.99",
            "pcs",
            200,
            "Ergonomic wireless mouse",
        ),
        demo_product(
            "ART-1003",
            "LED Work Lamp",
            "22.00",
            "44.95",
            "pcs",
            75,
            "Rechargeable 20W work lamp",
        ),
        demo_product(
            "ART-1004",
            "Wood Screws 4x40",
            "3.25",
            "7.49",
            "box",
            420,
            "Box of 200 countersunk screws",
        ),
        demo_product(
            "ART-1005",
            "Measuring Tape 5m",
            "4.10",
            "9.95",
            "pcs",
            130,
            "Self-locking steel tape",
        ),
    ]
}

/// Inserts the demo rows when the table has none. Returns the number of
/// rows written, zero when data was already present.
pub async fn seed_if_empty(pool: &PgPool) -> Result<u64> {
    let existing = product_queries::count(pool).await?;
    if existing > 0 {
        tracing::info!("Skipping seed, {} products already present", existing);
        return Ok(0);
    }

    let seeded = product_queries::bulk_create(pool, &demo_products()).await?;
    tracing::info!("Seeded {} products", seeded);

    Ok(seeded)
}
