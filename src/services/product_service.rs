use crate::{
    dto::products::ProductResponse,
    error::{AppError, AppResult},
    state::AppState,
    version::ApiVersion,
};

pub async fn get_product(
    state: &AppState,
    version: ApiVersion,
    id: i32,
) -> AppResult<ProductResponse> {
    let product = state.products.product(id).await;
    ProductResponse::map(version, product.as_ref()).ok_or(AppError::NotFound)
}

pub async fn list_available_products(state: &AppState, version: ApiVersion) -> Vec<ProductResponse> {
    state
        .products
        .available_products()
        .await
        .iter()
        .map(|p| ProductResponse::from_model(version, p))
        .collect()
}

/// Replace a product description. A missing product is reported before any
/// update is attempted.
pub async fn update_description(state: &AppState, id: i32, description: &str) -> AppResult<()> {
    if state.products.product(id).await.is_none() {
        return Err(AppError::NotFound);
    }

    if let Err(err) = state
        .products
        .update_product_description(id, description)
        .await
    {
        tracing::warn!(product_id = id, error = %err, "description update rejected");
        return Err(err.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use url::Url;

    use super::*;
    use crate::{
        models::Product,
        repository::{MockProductRepository, RepositoryError},
    };

    fn product(id: i32, available: bool) -> Product {
        Product {
            id,
            name: "Available product name".into(),
            img_uri: Url::parse("http://www.test.tld/image?id=1").unwrap(),
            price: Decimal::new(12345, 2),
            available,
            description: "Available product description".into(),
        }
    }

    fn state(mock: MockProductRepository) -> AppState {
        AppState::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn get_product_maps_found_record() {
        let mut mock = MockProductRepository::new();
        mock.expect_product()
            .with(eq(1))
            .returning(|id| Some(product(id, true)));

        let response = get_product(&state(mock), ApiVersion::V1, 1).await.unwrap();
        match response {
            ProductResponse::V1(p) => {
                assert_eq!(p.name, "Available product name");
                assert_eq!(p.available, Some(true));
            }
            other => panic!("expected v1 product, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_product_reports_missing_record() {
        let mut mock = MockProductRepository::new();
        mock.expect_product().returning(|_| None);

        let err = get_product(&state(mock), ApiVersion::V3, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn available_products_are_mapped_for_the_version() {
        let mut mock = MockProductRepository::new();
        mock.expect_available_products()
            .returning(|| vec![product(1, true)]);

        let items = list_available_products(&state(mock), ApiVersion::V3).await;
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], ProductResponse::V3(_)));
    }

    #[tokio::test]
    async fn update_of_missing_product_never_reaches_the_store() {
        let mut mock = MockProductRepository::new();
        mock.expect_product().returning(|_| None);
        mock.expect_update_product_description().never();

        let err = update_description(&state(mock), 1, "New description")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn rejected_update_carries_the_store_message() {
        let mut mock = MockProductRepository::new();
        mock.expect_product().returning(|id| Some(product(id, true)));
        mock.expect_update_product_description()
            .returning(|_, _| Err(RepositoryError::Rejected("Bad request - error message".into())));

        let err = update_description(&state(mock), 1, "New description")
            .await
            .unwrap_err();
        match err {
            AppError::UpdateRejected(message) => assert_eq!(message, "Bad request - error message"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_update_passes_id_and_text_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_product().returning(|id| Some(product(id, true)));
        mock.expect_update_product_description()
            .withf(|id, description| *id == 1 && description == "New description")
            .times(1)
            .returning(|_, _| Ok(()));

        update_description(&state(mock), 1, "New description")
            .await
            .unwrap();
    }
}
