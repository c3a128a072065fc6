use rust_decimal::Decimal;
use url::Url;

use crate::models::Product;

const SEED: [(i32, &str, &str, i64, bool, &str); 5] = [
    (
        1,
        "First product",
        "http://subdomain.domain.tld/image?id=1",
        111,
        true,
        "First product description",
    ),
    (
        2,
        "Second product",
        "http://subdomain.domain.tld/image?id=2",
        222,
        false,
        "Second product description",
    ),
    (
        3,
        "Third product",
        "http://subdomain.domain.tld/image?id=3",
        333,
        true,
        "Third product description",
    ),
    (
        4,
        "Fourth product",
        "http://subdomain.domain.tld/image?id=4",
        444,
        true,
        "Fourth product description",
    ),
    (
        5,
        "Fifth product",
        "http://subdomain.domain.tld/image?id=5",
        555,
        false,
        "Fifth product description",
    ),
];

/// Fixed catalog the in-memory store starts with. Prices are stored in cents
/// above and scaled to two decimal places here. Every row must parse.
pub fn seed_products() -> Result<Vec<Product>, url::ParseError> {
    SEED.iter()
        .map(|&(id, name, img_uri, cents, available, description)| {
            Ok(Product {
                id,
                name: name.to_string(),
                img_uri: Url::parse(img_uri)?,
                price: Decimal::new(cents, 2),
                available,
                description: description.to_string(),
            })
        })
        .collect()
}
