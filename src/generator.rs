//! Synthetic data generator

use chrono::{Duration, NaiveDateTime, Utc};
use rand::prelude::*;
use uuid::Uuid;

/// Order timestamps are drawn uniformly from the 5 years before generation.
const ORDER_WINDOW_DAYS: i64 = 365 * 5;

/// Client account states
pub const STATUSES: &[&str] = &["active", "inactive"];

/// The five fixed product category labels
pub const CATEGORIES: &[&str] = &[
    "Category1",
    "Category2",
    "Category3",
    "Category4",
    "Category5",
];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
];

const STREETS: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Walnut", "Willow", "Birch", "Chestnut", "Spruce",
];

const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Georgetown",
    "Madison",
    "Clinton",
    "Salem",
    "Greenville",
    "Bristol",
    "Ashland",
];

const PRODUCT_WORDS: &[&str] = &[
    "widget", "gadget", "sprocket", "gizmo", "fixture", "bracket", "module", "adapter", "coupler",
    "spindle", "flange", "gasket", "valve", "sensor", "relay", "bearing",
];

const DESCRIPTION_WORDS: &[&str] = &[
    "durable",
    "compact",
    "lightweight",
    "industrial",
    "precision",
    "standard",
    "reinforced",
    "anodized",
    "polished",
    "burnished",
    "plated",
    "assembly",
    "component",
    "grade",
    "series",
    "finish",
];

/// A generated client row. The id is a random UUID v4 in string form and is
/// unique regardless of the generator seed.
#[derive(Debug, Clone)]
pub struct ClientRow {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: &'static str,
}

/// A generated product row. The product_id column is AUTO_INCREMENT, so the
/// row carries no identity of its own.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub name: String,
    pub category: &'static str,
    pub description: String,
}

/// A generated order row referencing a client id and a product id
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order_date: NaiveDateTime,
    pub client_id: String,
    pub product_id: i32,
}

/// Target row counts for a seeding run
#[derive(Debug, Clone, Copy)]
pub struct RowCounts {
    pub clients: usize,
    pub products: usize,
    pub orders: usize,
}

impl Default for RowCounts {
    fn default() -> Self {
        Self {
            clients: 100_000,
            products: 1_000,
            orders: 1_000_000,
        }
    }
}

/// Synthetic data generator
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate_clients(&mut self, count: usize) -> Vec<ClientRow> {
        let mut clients = Vec::with_capacity(count);

        for i in 0..count {
            let name = self.pick(FIRST_NAMES);
            let surname = self.pick(LAST_NAMES);
            let email = format!(
                "{}.{}{}@example.com",
                name.to_lowercase(),
                surname.to_lowercase(),
                i + 1
            );
            let phone = format!(
                "{}-{}-{}-{}",
                self.rng.gen_range(10..34),
                self.rng.gen_range(100..999),
                self.rng.gen_range(100..999),
                self.rng.gen_range(1000..9999)
            );
            let address = format!(
                "{} {} St, {} {:05}",
                self.rng.gen_range(1..9999),
                self.pick(STREETS),
                self.pick(CITIES),
                self.rng.gen_range(10000..99999)
            );

            clients.push(ClientRow {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                surname: surname.to_string(),
                email,
                phone,
                address,
                status: self.pick(STATUSES),
            });
        }

        clients
    }

    pub fn generate_products(&mut self, count: usize) -> Vec<ProductRow> {
        let mut products = Vec::with_capacity(count);

        for _ in 0..count {
            let name = format!("{} {}", self.pick(PRODUCT_WORDS), self.pick(PRODUCT_WORDS));
            let words = self.rng.gen_range(8..15);
            let description = (0..words)
                .map(|_| self.pick(DESCRIPTION_WORDS))
                .collect::<Vec<_>>()
                .join(" ");

            products.push(ProductRow {
                name,
                category: self.pick(CATEGORIES),
                description,
            });
        }

        products
    }

    /// Generate order rows. Client references are sampled from the given
    /// client list; product references are drawn uniformly from
    /// [1, product_count], the id range AUTO_INCREMENT assigns to a freshly
    /// seeded product table.
    pub fn generate_orders(
        &mut self,
        count: usize,
        clients: &[ClientRow],
        product_count: usize,
    ) -> Vec<OrderRow> {
        let window_start = Utc::now().naive_utc() - Duration::days(ORDER_WINDOW_DAYS);
        let mut orders = Vec::with_capacity(count);

        for _ in 0..count {
            let client = &clients[self.rng.gen_range(0..clients.len())];
            orders.push(OrderRow {
                order_date: window_start + Duration::days(self.rng.gen_range(0..=ORDER_WINDOW_DAYS)),
                client_id: client.id.clone(),
                product_id: self.rng.gen_range(1..=product_count as i32),
            });
        }

        orders
    }

    fn pick(&mut self, table: &'static [&'static str]) -> &'static str {
        table[self.rng.gen_range(0..table.len())]
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn client_ids_are_unique_well_formed_uuids() {
        let mut gen = DataGenerator::with_seed(42);
        let clients = gen.generate_clients(1_000);
        assert_eq!(clients.len(), 1_000);

        let ids: HashSet<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), clients.len());

        for client in &clients {
            assert_eq!(client.id.len(), 36);
            Uuid::parse_str(&client.id).expect("client id is not a valid UUID");
        }
    }

    #[test]
    fn client_status_stays_in_domain() {
        let mut gen = DataGenerator::with_seed(42);
        for client in gen.generate_clients(500) {
            assert!(STATUSES.contains(&client.status));
            assert!(client.email.contains('@'));
            assert!(!client.address.is_empty());
        }
    }

    #[test]
    fn product_categories_stay_in_domain() {
        let mut gen = DataGenerator::with_seed(42);
        let products = gen.generate_products(200);
        assert_eq!(products.len(), 200);
        for product in products {
            assert!(CATEGORIES.contains(&product.category));
            assert!(!product.description.is_empty());
        }
    }

    #[test]
    fn order_dates_fall_in_the_trailing_window() {
        let mut gen = DataGenerator::with_seed(42);
        let clients = gen.generate_clients(10);

        let before = Utc::now().naive_utc();
        let orders = gen.generate_orders(2_000, &clients, 50);
        let after = Utc::now().naive_utc();

        let earliest = before - Duration::days(ORDER_WINDOW_DAYS);
        for order in &orders {
            assert!(order.order_date >= earliest);
            assert!(order.order_date <= after);
        }
    }

    #[test]
    fn order_references_point_at_generated_rows() {
        let mut gen = DataGenerator::with_seed(42);
        let clients = gen.generate_clients(25);
        let client_ids: HashSet<&str> = clients.iter().map(|c| c.id.as_str()).collect();

        let orders = gen.generate_orders(2_000, &clients, 40);
        assert_eq!(orders.len(), 2_000);
        for order in &orders {
            assert!(client_ids.contains(order.client_id.as_str()));
            assert!((1..=40).contains(&order.product_id));
        }
    }

    #[test]
    fn fixed_seed_repeats_values_but_not_identifiers() {
        let a = DataGenerator::with_seed(7).generate_clients(100);
        let b = DataGenerator::with_seed(7).generate_clients(100);

        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.name, right.name);
            assert_eq!(left.surname, right.surname);
            assert_eq!(left.phone, right.phone);
            assert_eq!(left.status, right.status);
            // Identifiers stay unique across reruns even with a fixed seed.
            assert_ne!(left.id, right.id);
        }
    }
}
