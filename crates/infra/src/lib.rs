mod config;
mod repos;

pub use config::{Config, ConfigError, StoreTimeouts};
pub use repos::{resolve_visited_service, ICustomerRepo, IServiceRepo, IShopInfoRepo, Repos};

use mongodb::{bson::doc, options::ClientOptions, Client};
use tracing::info;

const MONGODB_CONNECTION_STRING: &str = "MONGODB_URI";
const MONGODB_NAME: &str = "MONGODB_NAME";
const DEFAULT_MONGODB_NAME: &str = "barberia";

#[derive(Clone)]
pub struct BarberContext {
    pub repos: Repos,
    pub config: Config,
    client: Option<Client>,
}

struct ContextParams {
    pub mongodb_connection_string: String,
    pub mongodb_name: String,
    pub config: Config,
}

impl BarberContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::default(),
            client: None,
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let mut client_options = ClientOptions::parse(&params.mongodb_connection_string).await?;
        client_options.server_selection_timeout = Some(params.config.store_timeouts.operation);
        let client = Client::with_options(client_options)?;
        let db = client.database(&params.mongodb_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        tokio::time::timeout(
            params.config.store_timeouts.operation,
            db.run_command(doc! { "ping": 1 }, None),
        )
        .await
        .map_err(|_| anyhow::anyhow!("Ping did not complete in time"))??;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            repos: Repos::create_mongodb(&db, params.config.store_timeouts),
            config: params.config,
            client: Some(client),
        })
    }

    /// Closes the connections to the database, if any
    pub async fn shutdown(self) {
        if let Some(client) = self.client {
            info!("Closing database connections");
            client.shutdown().await;
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<BarberContext> {
    let config = Config::from_env()?;
    let mongodb_connection_string = get_mongodb_connection_string()?;

    BarberContext::create(ContextParams {
        mongodb_connection_string,
        mongodb_name: get_mongodb_name(),
        config,
    })
    .await
}

fn get_mongodb_connection_string() -> Result<String, ConfigError> {
    std::env::var(MONGODB_CONNECTION_STRING)
        .map_err(|_| ConfigError::Missing(MONGODB_CONNECTION_STRING))
}

fn get_mongodb_name() -> String {
    std::env::var(MONGODB_NAME).unwrap_or_else(|_| DEFAULT_MONGODB_NAME.into())
}

/// Creates the inmemory context and additionally a mongo context when
/// `MONGODB_URI` is set, so that the repos are tested against both
#[cfg(test)]
pub(crate) async fn create_test_contexts() -> Vec<BarberContext> {
    let mut ctxs = vec![BarberContext::create_inmemory()];
    if let Ok(mongodb_connection_string) = get_mongodb_connection_string() {
        let ctx = BarberContext::create(ContextParams {
            mongodb_connection_string,
            mongodb_name: "barberia_test".into(),
            config: Config::default(),
        })
        .await
        .expect("MONGODB_URI to point at a running database");
        ctxs.push(ctx);
    }
    ctxs
}
