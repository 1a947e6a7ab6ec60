use dotenvy::dotenv;
use recipe_box::{
    config::{catalog, database, settings},
    core::{catalog::seed_catalog, shopping_list, subscription},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: recipe-box [shopping-list <user_id> | subscriptions <user_id>]";

fn parse_user_id(arg: Option<String>) -> Result<i64> {
    let raw = arg.ok_or_else(|| Error::Config {
        message: USAGE.to_string(),
    })?;
    raw.parse().map_err(|_| Error::InvalidValue {
        field: "user_id",
        message: format!("'{raw}' is not a user id"),
    })
}

async fn seed_from_catalog(db: &DatabaseConnection) -> Result<()> {
    let path = settings::catalog_path();
    if !path.exists() {
        warn!("Catalog file {} not found, skipping seeding", path.display());
        return Ok(());
    }

    let catalog = catalog::load_catalog(&path)?;
    let summary = seed_catalog(db, &catalog).await?;
    info!(
        tags_created = summary.tags_created,
        ingredients_created = summary.ingredients_created,
        "Seeded catalog from {}",
        path.display()
    );
    Ok(())
}

async fn print_shopping_list(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let lines = shopping_list::aggregate_shopping_list(db, user_id).await?;
    println!("{}", shopping_list::render_shopping_list(&lines));
    Ok(())
}

async fn print_subscriptions(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let views = subscription::list_subscriptions(db, user_id, settings::recipes_limit()).await?;
    for view in views {
        println!(
            "{} ({} recipes)",
            view.author.username, view.recipes_count
        );
        for recipe in view.recipes {
            println!("  {} - {} min", recipe.name, recipe.cooking_time);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Connect and make sure every table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed reference data
    seed_from_catalog(&db)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    // 5. Optional one-shot report
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => info!("Store ready"),
        Some("shopping-list") => print_shopping_list(&db, parse_user_id(args.next())?).await?,
        Some("subscriptions") => print_subscriptions(&db, parse_user_id(args.next())?).await?,
        Some(_) => {
            return Err(Error::Config {
                message: USAGE.to_string(),
            });
        }
    }

    Ok(())
}
