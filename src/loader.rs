//! Bulk loading of generated rows
//!
//! Clients and products are each loaded inside a single transaction.
//! Orders are committed chunk by chunk: a failure after chunk K leaves
//! chunks 1..K committed and the rest absent, with no rollback and no
//! resumption.

use crate::error::Result;
use crate::generator::{ClientRow, OrderRow, ProductRow};
use crate::schema;
use sqlx::{Connection, MySql, MySqlConnection, QueryBuilder};
use tracing::debug;

/// Rows per INSERT statement for the client table. The MySQL binary
/// protocol caps a prepared statement at 65,535 placeholders and client
/// rows bind 7 columns each.
const CLIENT_CHUNK_ROWS: usize = 5_000;

/// Create the three benchmark tables if absent, in dependency order.
pub async fn create_schema(conn: &mut MySqlConnection) -> Result<()> {
    for ddl in schema::CREATE_TABLES {
        debug!("executing DDL: {}", ddl.trim());
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Insert client rows, one transaction committed at the end.
pub async fn insert_clients(conn: &mut MySqlConnection, clients: &[ClientRow]) -> Result<()> {
    if clients.is_empty() {
        return Ok(());
    }

    let mut tx = conn.begin().await?;
    for chunk in clients.chunks(CLIENT_CHUNK_ROWS) {
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
            "INSERT INTO opt_clients (id, name, surname, email, phone, address, status) ",
        );
        builder.push_values(chunk, |mut row, client| {
            row.push_bind(&client.id)
                .push_bind(&client.name)
                .push_bind(&client.surname)
                .push_bind(&client.email)
                .push_bind(&client.phone)
                .push_bind(&client.address)
                .push_bind(client.status);
        });
        builder.build().execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}

/// Insert product rows as one multi-row statement.
pub async fn insert_products(conn: &mut MySqlConnection, products: &[ProductRow]) -> Result<()> {
    if products.is_empty() {
        return Ok(());
    }

    let mut tx = conn.begin().await?;
    let mut builder: QueryBuilder<MySql> = QueryBuilder::new(
        "INSERT INTO opt_products (product_name, product_category, description) ",
    );
    builder.push_values(products, |mut row, product| {
        row.push_bind(&product.name)
            .push_bind(product.category)
            .push_bind(&product.description);
    });
    builder.build().execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(())
}

/// Insert order rows in fixed-size chunks, committing after each chunk.
pub async fn insert_orders(
    conn: &mut MySqlConnection,
    orders: &[OrderRow],
    chunk_size: usize,
) -> Result<()> {
    let chunk_size = chunk_size.max(1);
    let mut inserted = 0;

    for chunk in orders.chunks(chunk_size) {
        let mut tx = conn.begin().await?;
        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new("INSERT INTO opt_orders (order_date, client_id, product_id) ");
        builder.push_values(chunk, |mut row, order| {
            row.push_bind(order.order_date)
                .push_bind(&order.client_id)
                .push_bind(order.product_id);
        });
        builder.build().execute(&mut *tx).await?;
        tx.commit().await?;

        inserted += chunk.len();
        println!("Inserted {inserted} / {} rows into opt_orders...", orders.len());
    }

    Ok(())
}

/// Number of chunks a load of `total` rows splits into
pub fn chunk_count(total: usize, chunk_size: usize) -> usize {
    total.div_ceil(chunk_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn million_rows_make_a_hundred_chunks() {
        assert_eq!(chunk_count(1_000_000, 10_000), 100);
    }

    #[test]
    fn trailing_partial_chunk_is_counted() {
        assert_eq!(chunk_count(25_001, 10_000), 3);
        assert_eq!(chunk_count(9_999, 10_000), 1);
        assert_eq!(chunk_count(0, 10_000), 0);
    }

    #[test]
    fn client_chunks_fit_the_placeholder_cap() {
        assert!(CLIENT_CHUNK_ROWS * 7 <= u16::MAX as usize);
    }
}
