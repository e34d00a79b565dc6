use std::sync::Arc;

use flume::Sender;

use crate::{config::Config, event::events::Event};

pub struct AppContext {
    pub config: Arc<Config>,
    pub event_tx: Sender<Event>,
}

impl AppContext {
    pub fn new(config: Config, event_tx: Sender<Event>) -> Self {
        Self {
            config: Arc::new(config),
            event_tx,
        }
    }

    pub fn send(&self, event: Event) {
        if let Err(e) = self.event_tx.send(event) {
            tracing::warn!("event channel closed: {e}");
        }
    }
}
