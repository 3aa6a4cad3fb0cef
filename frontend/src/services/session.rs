//! Admin token persisted for the lifetime of the browser tab.

use gloo::storage::{SessionStorage, Storage};
use uuid::Uuid;

const ADMIN_TOKEN_KEY: &str = "sproutsphere.admin_token";

pub fn admin_token() -> Option<Uuid> {
    SessionStorage::get(ADMIN_TOKEN_KEY).ok()
}

pub fn store_admin_token(token: &Uuid) {
    if let Err(e) = SessionStorage::set(ADMIN_TOKEN_KEY, token) {
        tracing::warn!("Failed to persist admin session: {:?}", e);
    }
}

pub fn clear_admin_token() {
    SessionStorage::delete(ADMIN_TOKEN_KEY);
}
