use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use recipe_scout::db::{create_orm_conn, run_migrations_from};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,recipe_scout=debug".into()))
        .with(fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://recipes.db?mode=rwc".to_string());
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("migrations"));

    let orm = create_orm_conn(&database_url).await?;
    run_migrations_from(&orm, &dir).await?;
    println!("Migrations from {} applied to {database_url}", dir.display());
    Ok(())
}
