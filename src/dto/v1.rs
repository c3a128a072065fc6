use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::models;

/// Legacy product shape. Carries availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = v1::Product)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub img_uri: Url,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    pub description: String,
}

impl From<&models::Product> for Product {
    fn from(product: &models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            img_uri: product.img_uri.clone(),
            price: product.price,
            available: Some(product.available),
            description: product.description.clone(),
        }
    }
}
