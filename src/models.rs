use rust_decimal::Decimal;
use url::Url;

/// Internal product record as held by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub img_uri: Url,
    pub price: Decimal,
    pub available: bool,
    pub description: String,
}
