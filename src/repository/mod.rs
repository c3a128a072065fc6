use async_trait::async_trait;
use thiserror::Error;

use crate::models::Product;

pub mod memory;
pub mod seed;

pub use memory::InMemoryProductRepository;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    /// The store declined the mutation; the message is returned to the client.
    #[error("{0}")]
    Rejected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage access for products.
///
/// Records are only ever read or have their description replaced; there is
/// no way to add or remove a product through this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order.
    async fn all_products(&self) -> Vec<Product>;

    /// Products with `available == true`, in insertion order.
    async fn available_products(&self) -> Vec<Product>;

    /// Product with the given id, if any.
    async fn product(&self, id: i32) -> Option<Product>;

    /// Replace the description of the product with the given id.
    async fn update_product_description(
        &self,
        id: i32,
        description: &str,
    ) -> RepositoryResult<()>;
}
