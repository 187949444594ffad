use crate::prelude::*;

/// One product as scraped from a store's search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    /// Price per kg/liter/etc. Not every listing carries one; products
    /// without it sort after every priced one.
    pub price_per: Option<f64>,
    pub url: String,
    pub store: String,
}
