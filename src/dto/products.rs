use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::{v1, v3},
    models::Product,
    validation::validate_positive_price,
    version::ApiVersion,
};

/// Product as sent over the wire, shaped by the requested API version.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProductResponse {
    V1(v1::Product),
    V3(v3::Product),
}

impl ProductResponse {
    /// Map an internal record to the response model of `version`.
    /// A missing record maps to a missing response.
    pub fn map(version: ApiVersion, product: Option<&Product>) -> Option<Self> {
        product.map(|p| Self::from_model(version, p))
    }

    pub fn from_model(version: ApiVersion, product: &Product) -> Self {
        match version {
            ApiVersion::V1 => Self::V1(v1::Product::from(product)),
            ApiVersion::V3 => Self::V3(v3::Product::from(product)),
        }
    }
}

/// Body of the object-style description update.
///
/// Every field is optional on the wire so that an incomplete object reaches
/// validation rather than failing deserialization. Only `id` and
/// `description` take part in the update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDescriptionRequest {
    #[validate(range(min = 1, message = "'Id' must be greater than '0'."))]
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "The Name is required."),
        length(min = 1, message = "The Name is required.")
    )]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "The Img Uri is required."),
        length(min = 1, message = "The Img Uri is required."),
        url(message = "The Image URI is not valid URI.")
    )]
    pub img_uri: Option<String>,
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,
    /// Required by v1, ignored by v3. Checked in `validation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for UpdateDescriptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_empty<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        write!(
            f,
            "Id: '{}'; Name: '{}'; ImgUri: '{}'; Price: '{}'; Available: '{}'; Description: '{}'",
            self.id,
            or_empty(&self.name),
            or_empty(&self.img_uri),
            self.price,
            or_empty(&self.available),
            or_empty(&self.description),
        )
    }
}
