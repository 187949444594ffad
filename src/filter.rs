use crate::prelude::*;

/// Keeps the products whose names pass the group predicate. A stable filter:
/// the candidate order is preserved, nothing is reordered here.
pub fn filter_group(group: &Group, mode: MatchingMode, products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| group.matches(mode, &product.name))
        .cloned()
        .collect()
}

/// Sorts by price, or by per-unit price with unpriced products last (they
/// compare as infinitely expensive). The sort is stable.
pub fn sort_products(products: &mut [Product], descending: bool, by_price_per: bool) {
    products.sort_by(|a, b| {
        let (a, b) = match by_price_per {
            true => (a.price_per.unwrap_or(f64::INFINITY), b.price_per.unwrap_or(f64::INFINITY)),
            false => (a.price, b.price),
        };
        let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match descending {
            true => ordering.reverse(),
            false => ordering,
        }
    });
}

pub fn limit_products(products: &mut Vec<Product>, limit: usize) {
    products.truncate(limit);
}
