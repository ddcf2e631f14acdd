use serde::{Deserialize, Serialize};

/// What a single handler decided about a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handling {
    /// This handler took the request
    Handled,
    /// Not ours, hand it to the next handler in the chain
    Pass,
}

/// Outcome of running a request through the whole chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dispatch {
    Handled { by: String },
    /// No handler matched. The chain terminates explicitly instead of
    /// falling off the end.
    Unhandled { request: i32 },
}

/// A link in the dispatch chain
pub trait RequestHandler: Send + Sync {
    /// Name reported in dispatch outcomes
    fn name(&self) -> &str;

    /// Inspect a request and either take it or pass it along
    fn handle(&self, request: i32) -> Handling;
}

/// Handler that takes exactly one request value
pub struct MatchValueHandler {
    name: String,
    matches: i32,
}

impl MatchValueHandler {
    pub fn new(name: impl Into<String>, matches: i32) -> Self {
        Self {
            name: name.into(),
            matches,
        }
    }
}

impl RequestHandler for MatchValueHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, request: i32) -> Handling {
        if request == self.matches {
            Handling::Handled
        } else {
            Handling::Pass
        }
    }
}

/// Ordered chain of handlers; first match wins
pub struct HandlerChain {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler to the end of the chain
    pub fn register(&mut self, handler: Box<dyn RequestHandler>) {
        self.handlers.push(handler);
    }

    /// Walk the chain until a handler takes the request
    pub fn dispatch(&self, request: i32) -> Dispatch {
        for handler in &self.handlers {
            if handler.handle(request) == Handling::Handled {
                tracing::debug!(request, handler = handler.name(), "request handled");
                return Dispatch::Handled {
                    by: handler.name().to_string(),
                };
            }
        }

        tracing::debug!(request, "no handler matched");
        Dispatch::Unhandled { request }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}
