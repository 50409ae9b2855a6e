//! Seed the database: upserts the administrator account and fills the
//! catering service and staff tables when they are empty.

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;

use hiro_server::{
    config::AppConfig,
    models::{catering_service::CreateCateringService, staff::CreateStaff},
    repository::Repository,
    services::Services,
};

const SERVICES: &[(&str, &str, i64)] = &[
    ("Wedding Catering", "Full-service catering for weddings with menu customization.", 80_000),
    ("Corporate Event", "Professional catering for company events, conferences, and galas.", 60_000),
    ("Birthday Party", "Fun catering options for birthday celebrations.", 30_000),
    ("Private Dinner", "Exclusive fine dining experiences at home or private venues.", 20_000),
];

/// name, role, specialty, experience, bio
const STAFF: &[(&str, &str, Option<&str>, &str, &str)] = &[
    ("Chef John Mwanjala", "CHEF", Some("Swahili dishes"), "10 years in Pwani and Tanzania cuisine", "Let's enjoy Swahili flavors"),
    ("Chef Aisha Jane", "CHEF", Some("African Fusion"), "8 years of culinary artistry", "Creates bold African fusion menus with global influences."),
    ("Chef Daya Raj", "CHEF", Some("Indian Cuisine"), "12 years in fine dining and event catering", "Expert in authentic Indian flavors with elegant presentation."),
    ("Alex Kimani", "HEAD_WAITER", None, "7 years leading event service teams", "Leads front-of-house staff ensuring seamless service at every event."),
    ("Jane Mwende", "HEAD_WAITER", None, "5 years in luxury catering", "Ensures every guest enjoys an unforgettable service experience."),
    ("Brian King", "MIXOLOGIST", None, "3 years crafting signature cocktails", "Specializes in creating memorable drink experiences for events."),
    ("Mary Kyavulani", "DECORATOR", None, "8 years in event design and theming", "Transforms ordinary spaces into breathtaking event scenes."),
    ("David Ochieng", "PHOTOGRAPHER", None, "10 years capturing events and candid moments", "Storyteller through the lens, immortalizing every memory."),
    ("DJ Rash", "DJ", None, "9 years energizing weddings and corporate events", "Mixes vibrant soundtracks to match every mood and celebration."),
    ("MC Tony", "MC", None, "11 years hosting events with charisma and humor", "Brings energy, class, and fun to every occasion."),
    ("Lucy Naliaka", "HEAD_CLEANER", None, "15 years in event and hospitality cleaning", "Ensures every event space is spotless before, during, and after."),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hiro_server={}", config.logging.level).into()),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let services = Arc::new(Services::new(Repository::new(pool), &config));

    let admin = &config.admin;
    let user = services
        .users
        .ensure_admin(&admin.name, &admin.email, &admin.password, &admin.phone_number)
        .await
        .context("Failed to upsert admin account")?;
    tracing::info!(email = %user.email, "Admin account ready");

    if services.catering_services.count().await? == 0 {
        for (name, description, price) in SERVICES {
            services
                .catering_services
                .create(&CreateCateringService {
                    name: Some(name.to_string()),
                    description: Some(description.to_string()),
                    base_price: Some(Decimal::from(*price)),
                    image_url: None,
                    is_active: Some(true),
                })
                .await
                .with_context(|| format!("Failed to seed service {}", name))?;
        }
        tracing::info!(count = SERVICES.len(), "Catering services seeded");
    } else {
        tracing::info!("Catering services present, skipping");
    }

    if services.staff.count().await? == 0 {
        for (name, role, specialty, experience, bio) in STAFF {
            services
                .staff
                .seed(CreateStaff {
                    name: Some(name.to_string()),
                    role: Some(role.to_string()),
                    specialty: specialty.map(str::to_string),
                    experience: Some(experience.to_string()),
                    image_url: None,
                    bio: Some(bio.to_string()),
                })
                .await
                .with_context(|| format!("Failed to seed staff member {}", name))?;
        }
        tracing::info!(count = STAFF.len(), "Staff seeded");
    } else {
        tracing::info!("Staff present, skipping");
    }

    Ok(())
}
