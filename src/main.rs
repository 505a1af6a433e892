use std::env;

use config::Config;
use dotenvy::dotenv;

use rsa_portal::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    rsa_portal::run(settings).await
}
