use crate::prelude::*;

#[derive(Debug)]
pub enum FetchError {
    Reqwest(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Reqwest(e)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Reqwest(e) => write!(f, "RequestError: {e}"),
        }
    }
}

/// Page sizes to request, in order, to get `query_limit` products from a
/// store serving between `min_page_size` and `max_page_size` products per
/// page. Every page but the last requests the maximum; the last one requests
/// the remainder, clamped up to the store's minimum.
pub fn page_plan(query_limit: usize, min_page_size: usize, max_page_size: usize) -> Vec<usize> {
    let query_limit = query_limit.max(min_page_size);
    if query_limit <= max_page_size {
        return vec![query_limit];
    }
    let page_count = query_limit.div_ceil(max_page_size);
    let mut sizes = vec![max_page_size; page_count];
    let remainder = query_limit % max_page_size;
    if remainder > 0 {
        sizes[page_count - 1] = remainder.max(min_page_size);
    }
    sizes
}

/// Fetches all result pages for one search term from one store. Stops early
/// when the store runs out of products; the empty page is not returned.
pub async fn download<S: Store + ?Sized>(client: &Client, store: &S, term: &str, query_limit: usize, query_sort: QuerySort) -> Result<Vec<String>, FetchError> {
    let (min_page_size, max_page_size) = store.page_size_bounds();
    let plan = page_plan(query_limit, min_page_size, max_page_size);
    if plan.len() > 1 {
        info!("{}: downloading up to {} pages, this can take a while", store.name(), plan.len());
    }

    let mut htmls = Vec::new();
    for (i, page_size) in plan.iter().enumerate() {
        let url = store.request_url(term, i + 1, *page_size, query_sort);
        debug!("{}: GET {url}", store.name());
        let html = client.get(&url).send().await?.text().await?;
        if plan.len() > 1 && store.is_last_page(&html) {
            info!("{}: every product under {term:?} was already downloaded", store.name());
            break;
        }
        htmls.push(html);
    }
    Ok(htmls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_page_when_the_limit_fits() {
        assert_eq!(page_plan(50, 1, 80), vec![50]);
        assert_eq!(page_plan(80, 1, 80), vec![80]);
        assert_eq!(page_plan(96, 24, 96), vec![96]);
    }

    #[test]
    fn limit_below_the_minimum_clamps_up() {
        assert_eq!(page_plan(0, 1, 80), vec![1]);
        assert_eq!(page_plan(10, 24, 96), vec![24]);
    }

    #[test]
    fn full_pages_then_the_remainder() {
        assert_eq!(page_plan(100, 1, 80), vec![80, 20]);
        assert_eq!(page_plan(200, 1, 80), vec![80, 80, 40]);
        assert_eq!(page_plan(160, 1, 80), vec![80, 80]);
    }

    #[test]
    fn tiny_remainders_clamp_up_to_the_minimum() {
        assert_eq!(page_plan(100, 24, 96), vec![96, 24]);
    }
}
