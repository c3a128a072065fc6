pub mod products;
pub mod v1;
pub mod v3;
