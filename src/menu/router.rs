use anyhow::Result;
use std::collections::HashMap;

pub type Handler = Box<dyn Fn(&str) -> Result<Flow>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Dispatches menu ids to their handlers. Handlers run on the UI thread, so
/// they are not required to be `Send`.
#[derive(Default)]
pub struct EventRouter {
    routes: HashMap<String, Handler>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, handler: Handler) {
        let id = id.into();
        if self.routes.insert(id.clone(), handler).is_some() {
            log::warn!("Route for {} replaced", id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.routes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn route(&self, event_id: &str) -> Result<Flow> {
        match self.routes.get(event_id) {
            Some(handler) => handler(event_id),
            None => {
                log::warn!("No route found for event: {}", event_id);
                Ok(Flow::Continue)
            }
        }
    }
}
