#![allow(dead_code)]

use std::sync::Arc;

use rx_config::ApiConfig;
use rx_core::Surface;
use rx_session::{KeyValueStore, MemoryStore, Session};
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    }
}

pub fn session(server: &MockServer, surface: Surface) -> (Arc<MemoryStore>, Session) {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(surface, &api_config(server), store.clone()).unwrap();
    (store, session)
}

pub fn session_with_token(
    server: &MockServer,
    surface: Surface,
    token: &str,
) -> (Arc<MemoryStore>, Session) {
    let store = Arc::new(MemoryStore::new());
    store.set(surface.token_key(), token).unwrap();
    let session = Session::new(surface, &api_config(server), store.clone()).unwrap();
    (store, session)
}

pub fn customer_json() -> Value {
    json!({
        "_id": "65f1c0ffee",
        "ownerName": "Priya Nair",
        "email": "orders@sunrisemedicals.in",
        "establishmentName": "Sunrise Medicals",
        "status": "approved"
    })
}

pub fn admin_json() -> Value {
    json!({
        "id": "adm-1",
        "name": "Asha Rao",
        "email": "asha@rxadmin.in",
        "role": "superadmin",
        "permissions": ["customers:approve"]
    })
}
