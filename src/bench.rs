//! Benchmark query execution and result inspection

use crate::error::{BenchError, Result};
use crate::schema;
use chrono::NaiveDateTime;
use sqlx::{MySqlConnection, Row};
use std::time::{Duration, Instant};

/// One row of the aggregate result set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupRow {
    pub product_name: String,
    pub client_name: String,
    pub order_count: i64,
}

/// A timed query execution
#[derive(Debug)]
pub struct QueryRun {
    pub rows: Vec<GroupRow>,
    pub elapsed: Duration,
}

/// Execute one benchmark query, binding the cutoff date, and time it.
pub async fn run_query(
    conn: &mut MySqlConnection,
    sql: &str,
    cutoff: NaiveDateTime,
) -> Result<QueryRun> {
    let started = Instant::now();
    let raw = sqlx::query(sql).bind(cutoff).fetch_all(&mut *conn).await?;
    let elapsed = started.elapsed();

    let mut rows = Vec::with_capacity(raw.len());
    for row in &raw {
        rows.push(GroupRow {
            product_name: row.try_get("product_name")?,
            client_name: row.try_get("client_name")?,
            order_count: row.try_get("order_count")?,
        });
    }

    Ok(QueryRun { rows, elapsed })
}

/// Create the three order-table indexes.
pub async fn create_indexes(conn: &mut MySqlConnection) -> Result<()> {
    for ddl in schema::CREATE_INDEXES {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Print row count, elapsed time, and the first `limit` rows.
pub fn print_sample(run: &QueryRun, limit: usize) {
    println!(
        "{:>8} rows in {:>8.3}ms",
        run.rows.len(),
        run.elapsed.as_secs_f64() * 1000.0
    );
    for row in run.rows.iter().take(limit) {
        println!(
            "  {:<30} {:<25} {:>6}",
            row.product_name, row.client_name, row.order_count
        );
    }
}

/// Check that both executions produced the same result set. The queries
/// order by count only, so ties may come back in different row orders;
/// comparison is order-insensitive.
pub fn verify(unindexed: &QueryRun, cte: &QueryRun) -> Result<()> {
    let mut left = unindexed.rows.clone();
    let mut right = cte.rows.clone();
    left.sort();
    right.sort();

    if left == right {
        Ok(())
    } else {
        Err(BenchError::ResultMismatch {
            unindexed: unindexed.rows.len(),
            cte: cte.rows.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product: &str, client: &str, count: i64) -> GroupRow {
        GroupRow {
            product_name: product.to_string(),
            client_name: client.to_string(),
            order_count: count,
        }
    }

    fn run_of(rows: Vec<GroupRow>) -> QueryRun {
        QueryRun {
            rows,
            elapsed: Duration::from_millis(1),
        }
    }

    #[test]
    fn verify_ignores_row_order() {
        let a = run_of(vec![row("widget", "James", 3), row("gasket", "Mary", 3)]);
        let b = run_of(vec![row("gasket", "Mary", 3), row("widget", "James", 3)]);
        verify(&a, &b).unwrap();
    }

    #[test]
    fn verify_rejects_differing_counts() {
        let a = run_of(vec![row("widget", "James", 3)]);
        let b = run_of(vec![row("widget", "James", 4)]);
        let err = verify(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            BenchError::ResultMismatch {
                unindexed: 1,
                cte: 1
            }
        ));
    }

    #[test]
    fn verify_rejects_missing_rows() {
        let a = run_of(vec![row("widget", "James", 3), row("gasket", "Mary", 2)]);
        let b = run_of(vec![row("widget", "James", 3)]);
        assert!(verify(&a, &b).is_err());
    }
}
