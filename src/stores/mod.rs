mod rimi;
pub use rimi::*;
mod selver;
pub use selver::*;

use crate::prelude::*;

/// Every store the program searches, in the order their results are combined.
pub static STORES: [&dyn Store; 2] = [&Rimi, &Selver];

/// The sort order requested from the e-store itself, as opposed to the local
/// sorting done after filtering. Stores map these onto their own URL
/// dialects; unsupported values fall back to the store's default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySort {
    Default,
    Asc,
    Desc,
    AscPer,
    DescPer,
}

impl FromStr for QuerySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(QuerySort::Default),
            "asc" => Ok(QuerySort::Asc),
            "desc" => Ok(QuerySort::Desc),
            "asc_per" => Ok(QuerySort::AscPer),
            "desc_per" => Ok(QuerySort::DescPer),
            _ => Err(format!("unknown query sort {s:?} (expected default, asc, desc, asc_per or desc_per)")),
        }
    }
}

impl std::fmt::Display for QuerySort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuerySort::Default => write!(f, "default"),
            QuerySort::Asc => write!(f, "asc"),
            QuerySort::Desc => write!(f, "desc"),
            QuerySort::AscPer => write!(f, "asc_per"),
            QuerySort::DescPer => write!(f, "desc_per"),
        }
    }
}

/// One e-store: how to build its search URLs and how to read its result
/// pages. Implementations are unit structs registered in [`STORES`].
#[async_trait]
pub trait Store: Send + Sync {
    /// Store identifier, also the cache namespace and the `store` field of
    /// produced products.
    fn name(&self) -> &'static str;

    /// (min, max) number of products the store serves on one page.
    fn page_size_bounds(&self) -> (usize, usize);

    /// Search URL for one result page.
    fn request_url(&self, term: &str, page: usize, page_size: usize, sort: QuerySort) -> String;

    /// Cheap marker check telling whether a result page carries no products.
    fn is_last_page(&self, html: &str) -> bool;

    /// Extracts products from one result page. Malformed product markup is
    /// skipped, never an error.
    fn parse(&self, html: &str) -> Vec<Product>;

    /// Downloads and parses all result pages for one search term.
    async fn get(&self, client: &Client, term: &str, query_limit: usize, query_sort: QuerySort) -> Result<Vec<Product>, FetchError> {
        info!("{}: searching for {term:?}", self.name());
        let htmls = download(client, self, term, query_limit, query_sort).await?;
        let products = htmls.iter().flat_map(|html| self.parse(html)).collect::<Vec<_>>();
        info!("{}: {} products for {term:?}", self.name(), products.len());
        Ok(products)
    }
}

/// Normalizes a store price text ("1,49 €/kg") to a number: everything but
/// digits and the decimal comma is dropped first.
pub(crate) fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| match c { ',' => '.', other => other })
        .collect::<String>();
    cleaned.parse::<f64>().ok()
}
