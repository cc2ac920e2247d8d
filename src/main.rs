//! HTTP server for the Payroll Reconciliation Engine.
//!
//! Environment (a `.env` file is read if present):
//! - `PAYROLL_CONFIG_DIR`: configuration directory, default `./config/payroll`
//! - `PAYROLL_BIND_ADDR`: listen address, default `0.0.0.0:3000`
//! - `PAYROLL_SEED_FILE`: optional JSON seed with employees, attendance,
//!   leaves, and extra holidays
//! - `RUST_LOG`: log filter, default `info`

use std::env;
use std::sync::Arc;

use tracing::{error, info};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::error::EngineResult;
use payroll_engine::logging;
use payroll_engine::payroll::PayrollService;
use payroll_engine::store::{InMemoryStore, SeedData};

const DEFAULT_CONFIG_DIR: &str = "./config/payroll";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn build_service() -> EngineResult<PayrollService> {
    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        holidays = config.holidays().len(),
        default_base_salary = %config.default_base_salary(),
        "Configuration loaded"
    );

    let store = InMemoryStore::with_holidays(config.holidays().clone());
    if let Ok(seed_file) = env::var("PAYROLL_SEED_FILE") {
        let seed = SeedData::from_file(&seed_file)?;
        info!(
            seed_file = %seed_file,
            employees = seed.employees.len(),
            attendance = seed.attendance.len(),
            leaves = seed.leaves.len(),
            "Seed data loaded"
        );
        store.load_seed(seed)?;
    }

    Ok(PayrollService::new(
        Arc::new(store),
        config.deduction_policy(),
        config.default_base_salary(),
    ))
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let service = match build_service() {
        Ok(service) => service,
        Err(err) => {
            error!(error = %err, "Failed to start payroll engine");
            std::process::exit(1);
        }
    };

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!(bind_addr = %bind_addr, "Payroll engine listening");

    let app = create_router(AppState::new(service));
    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
