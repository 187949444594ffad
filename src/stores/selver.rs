use scraper::{Html, Selector};
use crate::prelude::*;

/// Selver e-store (https://www.selver.ee). Serves pages of 24, 48 or 96
/// products and only supports plain price sorting; per-unit sort requests
/// fall back to relevance.
pub struct Selver;

#[async_trait]
impl Store for Selver {
    fn name(&self) -> &'static str {
        "selver"
    }

    fn page_size_bounds(&self) -> (usize, usize) {
        (24, 96)
    }

    fn request_url(&self, term: &str, page: usize, page_size: usize, sort: QuerySort) -> String {
        let (dir, order) = match sort {
            QuerySort::Asc => ("asc", "price"),
            QuerySort::Desc => ("desc", "price"),
            QuerySort::Default | QuerySort::AscPer | QuerySort::DescPer => ("asc", "relevance"),
        };
        let page_size = match page_size {
            0..=24 => 24,
            25..=48 => 48,
            _ => 96,
        };
        let term = urlencoding::encode(term);
        format!("https://www.selver.ee/catalogsearch/result/index/?dir={dir}&limit={page_size}&order={order}&p={page}&q={term}")
    }

    fn is_last_page(&self, html: &str) -> bool {
        !html.contains("products-grid")
    }

    fn parse(&self, html: &str) -> Vec<Product> {
        let document = Html::parse_document(html);
        let item_selector = Selector::parse("#products-grid li").unwrap();
        let name_selector = Selector::parse("h5.product-name a").unwrap();
        let price_selector = Selector::parse("span.regular-price span.price").unwrap();
        let price_per_selector = Selector::parse("span.regular-price span.unit-price").unwrap();

        let mut products = Vec::new();
        for item in document.select(&item_selector) {
            let Some(name_el) = item.select(&name_selector).next() else { continue };
            let Some(url) = name_el.value().attr("href") else { continue };
            let name = name_el.text().collect::<Vec<_>>().join(" ");
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            let Some(price_el) = item.select(&price_selector).next() else { continue };
            let price_text = price_el.text().collect::<Vec<_>>().join(" ");
            let Some(price) = parse_price(&price_text) else { continue };
            let price_per = item.select(&price_per_selector).next()
                .map(|el| el.text().collect::<Vec<_>>().join(" "))
                .and_then(|text| parse_price(&text));

            products.push(Product {
                name: name.to_string(),
                price,
                price_per,
                url: format!("https:{url}"),
                store: self.name().to_string(),
            });
        }
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body><ul id="products-grid">
            <li>
                <h5 class="product-name"><a href="//www.selver.ee/farmi-piim-2-5-1-l">Farmi piim 2,5%, 1 l</a></h5>
                <span class="regular-price">
                    <span class="price">0,89 €</span>
                    <span class="unit-price">0,89 €/l</span>
                </span>
            </li>
            <li>
                <h5 class="product-name"><a href="//www.selver.ee/tere-kohupiim">Tere kohupiim, 300 g</a></h5>
                <span class="regular-price"><span class="price">1,79 €</span></span>
            </li>
            <li>
                <h5 class="product-name"><a href="//www.selver.ee/salapiim">Salapiim</a></h5>
                <span class="regular-price"><span class="price">hinda pole</span></span>
            </li>
        </ul></body></html>
    "#;

    #[test]
    fn parses_products_and_skips_unpriced_ones() {
        let products = Selver.parse(PAGE);
        assert_eq!(products.len(), 2);

        assert_eq!(products[0].name, "Farmi piim 2,5%, 1 l");
        assert_eq!(products[0].price, 0.89);
        assert_eq!(products[0].price_per, Some(0.89));
        assert_eq!(products[0].url, "https://www.selver.ee/farmi-piim-2-5-1-l");
        assert_eq!(products[0].store, "selver");

        assert_eq!(products[1].price, 1.79);
        assert_eq!(products[1].price_per, None);
    }

    #[test]
    fn last_page_has_no_grid() {
        assert!(!Selver.is_last_page(PAGE));
        assert!(Selver.is_last_page("<html><body>Otsing ei andnud tulemusi</body></html>"));
    }

    #[test]
    fn request_urls_quantize_the_page_size() {
        let url = Selver.request_url("piim", 1, 24, QuerySort::Default);
        assert_eq!(url, "https://www.selver.ee/catalogsearch/result/index/?dir=asc&limit=24&order=relevance&p=1&q=piim");

        assert!(Selver.request_url("piim", 1, 30, QuerySort::Default).contains("limit=48"));
        assert!(Selver.request_url("piim", 1, 96, QuerySort::Default).contains("limit=96"));
    }

    #[test]
    fn unsupported_sorts_fall_back_to_relevance() {
        assert!(Selver.request_url("piim", 1, 96, QuerySort::Asc).contains("dir=asc&limit=96&order=price"));
        assert!(Selver.request_url("piim", 1, 96, QuerySort::Desc).contains("dir=desc"));
        assert!(Selver.request_url("piim", 1, 96, QuerySort::DescPer).contains("order=relevance"));
    }
}
