//! Application state for the Demurrage & Detention Billing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TariffBook;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded tariff book.
#[derive(Clone)]
pub struct AppState {
    /// The loaded and validated tariff book.
    book: Arc<TariffBook>,
}

impl AppState {
    /// Creates a new application state with the given tariff book.
    pub fn new(book: TariffBook) -> Self {
        Self {
            book: Arc::new(book),
        }
    }

    /// Returns a reference to the tariff book.
    pub fn book(&self) -> &TariffBook {
        &self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
