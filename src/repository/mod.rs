pub mod repository_error;
pub mod user_repo;
pub mod location_repo;
pub mod container_type_repo;
pub mod goods_type_repo;
pub mod quote_repo;
pub mod shipment_repo;
pub mod tracking_event_repo;
pub mod contact_message_repo;
pub mod service_offering_repo;

use crate::config::mongo_conf::MongoConfig;

/// Build the shared MongoDB handle. One client for the whole process; the
/// repositories each hold a typed collection off this database.
pub async fn connect(config: &MongoConfig) -> Result<mongodb::Database, mongodb::error::Error> {
    use mongodb::{
        options::{ClientOptions, Credential, ResolverConfig},
        Client,
    };

    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare())
            .await?;
    client_options.app_name = Some("LogisticsBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout =
        Some(std::time::Duration::from_secs(config.connection_timeout_secs));

    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    Ok(client.database(&config.database))
}

/// Timestamp format used for createdAt/updatedAt across all collections.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
