use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::{
    models::Product,
    repository::{ProductRepository, RepositoryError, RepositoryResult, seed::seed_products},
};

/// Product store backed by a lock-guarded vector.
///
/// Records keep their insertion order. Guards are never held across an
/// `.await`.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Store preloaded with the fixed catalog.
    pub fn seeded() -> Result<Self, url::ParseError> {
        Ok(Self::new(seed_products()?))
    }

    fn read<T>(&self, f: impl FnOnce(&[Product]) -> T) -> T {
        let guard = self.products.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn all_products(&self) -> Vec<Product> {
        self.read(|products| products.to_vec())
    }

    async fn available_products(&self) -> Vec<Product> {
        self.read(|products| products.iter().filter(|p| p.available).cloned().collect())
    }

    async fn product(&self, id: i32) -> Option<Product> {
        self.read(|products| products.iter().find(|p| p.id == id).cloned())
    }

    async fn update_product_description(
        &self,
        id: i32,
        description: &str,
    ) -> RepositoryResult<()> {
        if !self.read(|products| products.iter().any(|p| p.id == id)) {
            return Err(RepositoryError::NotFound);
        }

        let mut guard = self
            .products
            .write()
            .map_err(|err| RepositoryError::Rejected(err.to_string()))?;

        let product = guard
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        product.description = description.to_string();

        tracing::debug!(product_id = id, "product description updated");
        Ok(())
    }
}
