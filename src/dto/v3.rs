use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::models;

/// Current product shape. Availability is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = v3::Product)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub img_uri: Url,
    pub price: Decimal,
    pub description: String,
}

impl From<&models::Product> for Product {
    fn from(product: &models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            img_uri: product.img_uri.clone(),
            price: product.price,
            description: product.description.clone(),
        }
    }
}
