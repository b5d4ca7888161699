pub mod comments;
pub mod error;
pub mod likes;
pub mod payments;
pub mod wishes;

use std::sync::Arc;

use wishwell_gateway::dispatcher::Dispatcher;
use wishwell_store::Store;

use crate::payments::PaymentClient;

pub type AppState = Arc<AppStateInner>;

/// Shared application state for all route handlers.
pub struct AppStateInner {
    pub store: Store,
    pub dispatcher: Dispatcher,
    pub payments: PaymentClient,
}
