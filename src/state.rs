use std::sync::Arc;

use crate::{email::EmailDispatcher, notify::Notifier, store::Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub mailer: Arc<dyn EmailDispatcher>,
    pub notifier: Notifier,
}
