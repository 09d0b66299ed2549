// Connected-client registry

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};
use warp::ws::Message;

use super::protocol::ServerFrame;

/// Connection id counter, unique for the process lifetime.
static NEXT_CLIENT_ID: AtomicUsize = AtomicUsize::new(1);

pub type ClientId = usize;

/// Live connections, keyed by client id. Each entry holds the sending
/// half of the channel feeding that client's websocket. The map is only
/// ever inserted into, iterated, and drained on disconnect.
pub type Clients = Arc<RwLock<HashMap<ClientId, mpsc::UnboundedSender<Message>>>>;

pub fn new_clients() -> Clients {
    Arc::new(RwLock::new(HashMap::new()))
}

pub fn next_client_id() -> ClientId {
    NEXT_CLIENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Register a newly connected client.
pub async fn register(clients: &Clients, id: ClientId, tx: mpsc::UnboundedSender<Message>) {
    clients.write().await.insert(id, tx);
}

/// Remove a client once its connection closes.
pub async fn unregister(clients: &Clients, id: ClientId) {
    clients.write().await.remove(&id);
}

/// Send a frame to every connected client. A failed send means the
/// receiving task already hung up and the disconnect path will drop the
/// entry, so failures are ignored here.
pub async fn broadcast(clients: &Clients, frame: &ServerFrame) {
    let text = frame.to_json();
    for tx in clients.read().await.values() {
        let _ = tx.send(Message::text(text.clone()));
    }
}

/// Send a frame to a single client, if it is still connected.
pub async fn unicast(clients: &Clients, id: ClientId, frame: &ServerFrame) {
    if let Some(tx) = clients.read().await.get(&id) {
        let _ = tx.send(Message::text(frame.to_json()));
    }
}
