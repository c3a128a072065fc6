use std::sync::Arc;

use crate::repository::{InMemoryProductRepository, ProductRepository};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// State backed by the seeded in-memory catalog.
    pub fn in_memory() -> Result<Self, url::ParseError> {
        Ok(Self::new(Arc::new(InMemoryProductRepository::seeded()?)))
    }
}
