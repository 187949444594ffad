use scraper::{Html, Selector};
use crate::prelude::*;

const SITE: &str = "https://www.rimi.ee";

/// Rimi e-store (https://www.rimi.ee/epood/ee). Product data comes from a
/// JSON blob the page embeds in a `data-gtm-eec-product` attribute.
pub struct Rimi;

#[async_trait]
impl Store for Rimi {
    fn name(&self) -> &'static str {
        "rimi"
    }

    fn page_size_bounds(&self) -> (usize, usize) {
        (1, 80)
    }

    fn request_url(&self, term: &str, page: usize, page_size: usize, sort: QuerySort) -> String {
        let sort = match sort {
            QuerySort::Default => "relevance",
            QuerySort::Asc => "price-asc",
            QuerySort::Desc => "price-desc",
            QuerySort::AscPer => "priceunit-asc",
            QuerySort::DescPer => "priceunit-desc",
        };
        let term = urlencoding::encode(term);
        format!("{SITE}/epood/ee/otsing?page={page}&pageSize={page_size}&query={term}:{sort}")
    }

    fn is_last_page(&self, html: &str) -> bool {
        !html.contains("product-grid__item")
    }

    fn parse(&self, html: &str) -> Vec<Product> {
        let document = Html::parse_document(html);
        let item_selector = Selector::parse(".product-grid__item").unwrap();
        let data_selector = Selector::parse("div[data-gtm-eec-product]").unwrap();
        let url_selector = Selector::parse("a.card__url").unwrap();
        let price_per_selector = Selector::parse("p.card__price-per").unwrap();

        let mut products = Vec::new();
        for item in document.select(&item_selector) {
            let Some(data) = item.select(&data_selector).next().and_then(|el| el.value().attr("data-gtm-eec-product")) else { continue };
            let Some(url) = item.select(&url_selector).next().and_then(|el| el.value().attr("href")) else { continue };
            let Ok(data) = serde_json::from_str::<serde_json::Value>(data) else { continue };
            let Some(name) = data.get("name").and_then(|name| name.as_str()) else { continue };
            let Some(price) = data.get("price").and_then(|price| price.as_f64()) else { continue };
            let price_per = item.select(&price_per_selector).next()
                .map(|el| el.text().collect::<Vec<_>>().join(" "))
                .and_then(|text| parse_price(&text));

            products.push(Product {
                name: name.to_string(),
                price,
                price_per,
                url: format!("{SITE}{url}"),
                store: self.name().to_string(),
            });
        }
        products
    }
}
