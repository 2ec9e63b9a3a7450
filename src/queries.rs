//! Benchmark queries
//!
//! Two logically equivalent aggregates over orders placed after a cutoff
//! date: order counts grouped by (product name, client name), descending.
//! The first runs as written against the unindexed table; the second is the
//! CTE rewrite intended to benefit from the indexes in [`crate::schema`].
//! Both take the cutoff as their single bind parameter.

/// Plain three-way join and aggregate
pub const JOIN_AGG: &str = r#"
SELECT
    p.product_name,
    c.name AS client_name,
    COUNT(o.order_id) AS order_count
FROM opt_orders o
JOIN opt_clients c ON o.client_id = c.id
JOIN opt_products p ON o.product_id = p.product_id
WHERE o.order_date > ?
GROUP BY p.product_name, c.name
ORDER BY order_count DESC
"#;

/// Equivalent aggregate with orders pre-filtered in a CTE
pub const JOIN_AGG_CTE: &str = r#"
WITH recent_orders AS (
    SELECT order_id, client_id, product_id
    FROM opt_orders
    WHERE order_date > ?
)
SELECT
    p.product_name,
    c.name AS client_name,
    COUNT(ro.order_id) AS order_count
FROM recent_orders ro
JOIN opt_clients c ON ro.client_id = c.id
JOIN opt_products p ON ro.product_id = p.product_id
GROUP BY p.product_name, c.name
ORDER BY order_count DESC
"#;
