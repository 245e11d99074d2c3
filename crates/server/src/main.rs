// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, post, put},
};
use clap::Parser;
use petgroom::{Salon, SystemClock};
use petgroom_domain::{Money, PriceTable};
use petgroom_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// The salon engine as served over HTTP.
pub type SalonHandle = Salon<Persistence, SystemClock>;

/// Pet grooming salon server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Bath price in cents
    #[arg(long, default_value_t = 3000)]
    bath_price: i64,

    /// Grooming price in cents
    #[arg(long, default_value_t = 4000)]
    grooming_price: i64,

    /// Bath and grooming price in cents
    #[arg(long, default_value_t = 6000)]
    combo_price: i64,
}

impl Args {
    const fn price_table(&self) -> PriceTable {
        PriceTable {
            bath: Money::from_cents(self.bath_price),
            grooming: Money::from_cents(self.grooming_price),
            both: Money::from_cents(self.combo_price),
        }
    }
}

/// Application state shared across handlers.
///
/// The salon sits behind a Mutex so each request runs to completion before
/// the next one touches the state.
#[derive(Clone)]
pub struct AppState {
    /// The salon engine and its storage.
    pub salon: Arc<Mutex<SalonHandle>>,
}

impl AppState {
    /// Wraps a salon for sharing across handlers.
    pub fn new(salon: SalonHandle) -> Self {
        Self {
            salon: Arc::new(Mutex::new(salon)),
        }
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/clients/{id}",
            put(handlers::update_client).delete(handlers::delete_client),
        )
        .route("/clients/{id}/pets", get(handlers::list_client_pets))
        .route("/pets", get(handlers::list_pets).post(handlers::create_pet))
        .route(
            "/pets/{id}",
            put(handlers::update_pet).delete(handlers::delete_pet),
        )
        .route(
            "/pets/{id}/vaccine-status",
            get(handlers::pet_vaccine_status),
        )
        .route(
            "/groomers",
            get(handlers::list_groomers).post(handlers::create_groomer),
        )
        .route(
            "/groomers/{id}",
            put(handlers::update_groomer).delete(handlers::delete_groomer),
        )
        .route("/groomers/{id}/workload", get(handlers::groomer_workload))
        .route(
            "/groomers/{id}/commissions",
            get(handlers::groomer_commissions),
        )
        .route(
            "/groomers/{id}/commissions/total",
            get(handlers::groomer_commission_total),
        )
        .route("/groomers/{id}/points", get(handlers::groomer_points))
        .route(
            "/packages",
            get(handlers::list_packages).post(handlers::create_package),
        )
        .route(
            "/packages/{id}",
            put(handlers::update_package).delete(handlers::delete_package),
        )
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/appointments/auto-assign",
            post(handlers::auto_assign_day),
        )
        .route(
            "/appointments/{id}",
            put(handlers::update_appointment).delete(handlers::delete_appointment),
        )
        .route(
            "/appointments/{id}/auto-assign",
            post(handlers::auto_assign),
        )
        .route("/appointments/{id}/assign", post(handlers::assign_groomer))
        .route("/pricing/quote", get(handlers::quote))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing pet grooming salon server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let prices: PriceTable = args.price_table();
    info!(
        bath = prices.bath.cents(),
        grooming = prices.grooming.cents(),
        both = prices.both.cents(),
        "Loaded price table"
    );

    let salon: SalonHandle = Salon::open(persistence, SystemClock)?.with_prices(prices);

    let app: Router = build_router(AppState::new(salon));

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
