// Route definitions

use warp::Filter;

use crate::gateway::{self, GatewayState};

/// Directory served unauthenticated to browsers.
pub const PUBLIC_DIR: &str = "public";

pub fn configure_routes(
    state: GatewayState,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /ws -> socket gateway
    let gateway_route = warp::path("ws")
        .and(warp::path::end())
        .and(warp::ws())
        .and(with_state(state))
        .map(|ws: warp::ws::Ws, state: GatewayState| {
            ws.on_upgrade(move |socket| gateway::client_connected(socket, state))
        });

    // Everything else -> static assets
    let static_files = warp::fs::dir(PUBLIC_DIR);

    gateway_route.or(static_files)
}

fn with_state(
    state: GatewayState,
) -> impl Filter<Extract = (GatewayState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}
