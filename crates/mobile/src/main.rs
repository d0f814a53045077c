//! Terminal shell for the E Corp app: log in as a role and print its home
//! screen, fed by the prediction service or the built-in fallback data.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use ecorp_auth::{Role, Session};
use ecorp_client::{DEFAULT_LIMIT, DataSource, MlServiceClient, ServiceConfig};
use ecorp_mobile::{ServiceHealth, build_home, screen_stack};

/// E Corp role dashboards
#[derive(Parser, Debug, Clone)]
#[command(name = "ecorp-mobile")]
#[command(about = "Log in as a role and print its dashboard")]
struct Args {
    /// Role to log in as (warehouse, sales, customer_service, mechanic, csuite)
    #[arg(long)]
    role: Role,

    /// Display name; defaults to the role's login title
    #[arg(long)]
    name: Option<String>,

    /// Page size for sales and service tickets
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Day used for "today" counters (YYYY-MM-DD); defaults to the current UTC date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Emit logs as one JSON object per line
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.json_logs {
        ecorp_observability::init();
    } else {
        ecorp_observability::init_pretty();
    }

    let config = ServiceConfig::from_env().context("invalid prediction service configuration")?;
    tracing::info!(base_url = %config.base_url(), "using prediction service");
    let source: Arc<dyn DataSource> = Arc::new(MlServiceClient::new(config));

    let health = ServiceHealth::mount(Arc::clone(&source));

    let mut session = Session::new();
    let name = args.name.unwrap_or_else(|| args.role.title().to_string());
    let user = session
        .start(args.role, name)
        .context("failed to start session")?
        .clone();

    let screens: Vec<String> = screen_stack(&session).iter().map(ToString::to_string).collect();
    println!("{} ({}) - {}", user.name, user.role.title(), screens.join(" / "));

    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let home = build_home(&user, Arc::clone(&source), args.limit, today).await;
    let health = health.settled().await;

    println!("[{}]", health.connectivity().label());
    print!("{home}");

    session.end();
    Ok(())
}
