//! Benchmark table DDL

/// All benchmark table names, in creation (dependency) order
pub const TABLES: &[&str] = &["opt_clients", "opt_products", "opt_orders"];

/// DDL for the client table
pub const CREATE_CLIENTS: &str = r#"
CREATE TABLE IF NOT EXISTS opt_clients (
    id VARCHAR(36) PRIMARY KEY,
    name VARCHAR(255),
    surname VARCHAR(255),
    email VARCHAR(255),
    phone VARCHAR(50),
    address TEXT,
    status VARCHAR(10)
)
"#;

/// DDL for the product table
pub const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS opt_products (
    product_id INT AUTO_INCREMENT PRIMARY KEY,
    product_name VARCHAR(255),
    product_category VARCHAR(255),
    description TEXT
)
"#;

/// DDL for the order table. References clients and products, so it is
/// created last.
pub const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS opt_orders (
    order_id INT AUTO_INCREMENT PRIMARY KEY,
    order_date DATETIME,
    client_id VARCHAR(36),
    product_id INT,
    FOREIGN KEY (client_id) REFERENCES opt_clients(id),
    FOREIGN KEY (product_id) REFERENCES opt_products(product_id)
)
"#;

/// Table DDL in dependency order
pub const CREATE_TABLES: &[&str] = &[CREATE_CLIENTS, CREATE_PRODUCTS, CREATE_ORDERS];

/// Single-column indexes on the order table, created between the two
/// benchmark queries. MySQL has no IF NOT EXISTS for CREATE INDEX, so
/// re-running these against an already indexed table fails.
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX idx_opt_orders_order_date ON opt_orders(order_date)",
    "CREATE INDEX idx_opt_orders_client_id ON opt_orders(client_id)",
    "CREATE INDEX idx_opt_orders_product_id ON opt_orders(product_id)",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_created_if_absent() {
        for ddl in CREATE_TABLES {
            assert!(ddl.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }

    #[test]
    fn every_table_has_matching_ddl() {
        for (table, ddl) in TABLES.iter().zip(CREATE_TABLES) {
            assert!(ddl.contains(table), "DDL does not mention {table}");
        }
    }

    #[test]
    fn indexes_cover_filter_and_join_columns() {
        let columns = ["order_date", "client_id", "product_id"];
        assert_eq!(CREATE_INDEXES.len(), columns.len());
        for (ddl, col) in CREATE_INDEXES.iter().zip(columns) {
            assert!(ddl.contains(&format!("ON opt_orders({col})")));
        }
    }
}
