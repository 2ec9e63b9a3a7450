//! Benchmark CLI

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use optbench::config::DbConfig;
use optbench::error::Result;
use optbench::generator::DataGenerator;
use optbench::{bench, loader, queries};
use sqlx::{Connection, MySqlConnection};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "optbench")]
#[command(about = "MySQL index/CTE benchmark seeder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema, seed all tables, and run both benchmark queries
    Run {
        #[command(flatten)]
        seed: SeedArgs,

        #[command(flatten)]
        bench: BenchArgs,
    },

    /// Create the three tables if absent
    Schema,

    /// Generate and bulk-insert synthetic rows
    Seed {
        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Run the two benchmark queries against already seeded tables
    Bench {
        #[command(flatten)]
        bench: BenchArgs,
    },
}

#[derive(Args)]
struct SeedArgs {
    /// Client rows to generate
    #[arg(long, default_value_t = 100_000)]
    clients: usize,

    /// Product rows to generate
    #[arg(long, default_value_t = 1_000)]
    products: usize,

    /// Order rows to generate
    #[arg(long, default_value_t = 1_000_000)]
    orders: usize,

    /// Rows per order INSERT chunk (one commit per chunk)
    #[arg(long, default_value_t = 10_000)]
    chunk_size: usize,

    /// RNG seed for value generation (identifiers stay random regardless)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct BenchArgs {
    /// Count only orders placed after this date
    #[arg(long, default_value = "2023-01-01")]
    cutoff: NaiveDate,

    /// Result rows to print per query
    #[arg(long, default_value_t = 5)]
    sample: usize,

    /// Check that both queries return identical result sets
    #[arg(long)]
    verify: bool,

    /// Skip index creation (for re-runs against an already indexed table)
    #[arg(long)]
    skip_indexes: bool,
}

#[tokio::main]
async fn main() {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = DbConfig::from_env()?;
    let mut conn = MySqlConnection::connect_with(&config.connect_options()).await?;

    match cli.command {
        Commands::Run { seed, bench } => {
            seed_tables(&mut conn, &seed).await?;
            run_benchmark(&mut conn, &bench).await?;
        }
        Commands::Schema => {
            println!("Creating tables...");
            loader::create_schema(&mut conn).await?;
            println!("Tables created.");
        }
        Commands::Seed { seed } => {
            seed_tables(&mut conn, &seed).await?;
        }
        Commands::Bench { bench } => {
            run_benchmark(&mut conn, &bench).await?;
        }
    }

    conn.close().await?;
    Ok(())
}

async fn seed_tables(conn: &mut MySqlConnection, args: &SeedArgs) -> Result<()> {
    println!("Creating tables...");
    loader::create_schema(conn).await?;
    println!("Tables created.");

    let mut gen = match args.seed {
        Some(seed) => DataGenerator::with_seed(seed),
        None => DataGenerator::new(),
    };

    println!("Generating {} clients...", args.clients);
    let clients = gen.generate_clients(args.clients);
    println!("Inserting into opt_clients...");
    loader::insert_clients(conn, &clients).await?;
    println!("Inserted into opt_clients.");

    println!("Generating {} products...", args.products);
    let products = gen.generate_products(args.products);
    println!("Inserting into opt_products...");
    loader::insert_products(conn, &products).await?;
    println!("Inserted into opt_products.");

    println!("Generating {} orders...", args.orders);
    let orders = gen.generate_orders(args.orders, &clients, args.products);
    println!("Inserting into opt_orders...");
    loader::insert_orders(conn, &orders, args.chunk_size).await?;
    println!("Inserted into opt_orders.");

    Ok(())
}

async fn run_benchmark(conn: &mut MySqlConnection, args: &BenchArgs) -> Result<()> {
    let cutoff = args.cutoff.and_time(NaiveTime::MIN);

    println!("Executing non-optimized query...");
    let unindexed = bench::run_query(conn, queries::JOIN_AGG, cutoff).await?;
    bench::print_sample(&unindexed, args.sample);

    if args.skip_indexes {
        println!("Executing optimized query...");
    } else {
        println!("Creating indexes and executing optimized query...");
        let start = Instant::now();
        bench::create_indexes(conn).await?;
        println!("Indexes created in {:?}", start.elapsed());
    }

    let cte = bench::run_query(conn, queries::JOIN_AGG_CTE, cutoff).await?;
    bench::print_sample(&cte, args.sample);

    if args.verify {
        bench::verify(&unindexed, &cte)?;
        println!("Result sets match ({} rows).", cte.rows.len());
    }

    println!("\n=== Summary ===");
    println!(
        "non-optimized: {:>8.3}ms",
        unindexed.elapsed.as_secs_f64() * 1000.0
    );
    println!(
        "CTE + indexes: {:>8.3}ms",
        cte.elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
