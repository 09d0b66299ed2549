use std::path::Path;
use std::sync::Arc;

use model_relay::auth;
use model_relay::gateway::GatewayState;
use model_relay::llm::{AnthropicClient, AnthropicModel, ModelProvider};
use model_relay::routes::configure_routes;

const PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let api_key = match auth::resolve_api_key(Path::new(auth::SECRET_FILE), auth::API_KEY_ENV) {
        Ok(key) => key,
        Err(e) => {
            log::error!("{}; see README.md on how to configure", e);
            std::process::exit(auth::EXIT_NO_CREDENTIAL);
        }
    };

    let provider: Arc<dyn ModelProvider> =
        match AnthropicClient::new(api_key, AnthropicModel::Haiku3) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                log::error!("failed to construct the model client: {}", e);
                std::process::exit(1);
            }
        };

    let routes = configure_routes(GatewayState::new(provider));

    log::info!("listening on http://127.0.0.1:{}", PORT);
    warp::serve(routes).run(([127, 0, 0, 1], PORT)).await;
}
