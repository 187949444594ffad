use std::path::Path;
use crate::prelude::*;

/// Parsed products cached per store and per request parameters. Only parsed
/// products are cached, never filtered result lists: filtering, sorting and
/// limiting are cheap next to downloading and scraping, so one cached fetch
/// serves any number of clause and mode variations.
#[derive(Debug, Default)]
pub struct Cache {
    entries: HashMap<String, HashMap<String, Vec<Product>>>,
    modified: bool,
}

/// Cache entries are keyed on everything that shapes the store request, so
/// changed request parameters automatically miss.
fn cache_key(term: &str, query_limit: usize, query_sort: QuerySort) -> String {
    format!("{term}+query_limit={query_limit}+query_sort={query_sort}")
}

impl Cache {
    /// Reads the cache file. A keep-alive below one second disables the
    /// cache file entirely; a missing, expired or unreadable file is an
    /// empty cache, never an error.
    pub fn load(path: &Path, keep_alive: i64) -> Cache {
        let mut cache = Cache::default();
        if keep_alive < 1 {
            return cache;
        }

        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                info!("No cache file at {}: {e}", path.display());
                return cache;
            },
        };
        let modified_time = metadata.modified().ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|age| age.as_secs())
            .unwrap_or(0);
        if now() > modified_time + keep_alive as u64 {
            info!("Cache file {} is expired", path.display());
            return cache;
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read cache file {}: {e}", path.display());
                return cache;
            },
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => {
                info!("Cache read from {}", path.display());
                cache.entries = entries;
            },
            Err(e) => warn!("Could not parse cache file {}: {e}", path.display()),
        }
        cache
    }

    /// Writes the cache file, unless the cache is disabled or nothing was
    /// fetched since loading.
    pub fn store(&self, path: &Path, keep_alive: i64) {
        if keep_alive < 1 {
            return;
        }
        if !self.modified {
            debug!("Cache unchanged, not writing it");
            return;
        }
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                error!("Could not serialize the cache: {e}");
                return;
            },
        };
        match std::fs::write(path, json) {
            Ok(()) => info!("Cache written to {}", path.display()),
            Err(e) => error!("Could not write cache file {}: {e}", path.display()),
        }
    }

    pub fn lookup(&self, store: &str, term: &str, query_limit: usize, query_sort: QuerySort) -> Option<&[Product]> {
        let products = self.entries.get(store)?.get(&cache_key(term, query_limit, query_sort))?;
        Some(products.as_slice())
    }

    pub fn insert(&mut self, store: &str, term: &str, query_limit: usize, query_sort: QuerySort, products: Vec<Product>) {
        self.entries
            .entry(store.to_string())
            .or_default()
            .insert(cache_key(term, query_limit, query_sort), products);
        self.modified = true;
    }

    /// Returns all stores' products for one search term, fetching whatever
    /// the cache doesn't already hold. Missing stores are fetched
    /// concurrently; the combined list keeps the [`STORES`] order.
    pub async fn get_or_fetch(&mut self, client: &Client, term: &str, query_limit: usize, query_sort: QuerySort) -> Result<Vec<Product>, FetchError> {
        let mut fetches = Vec::new();
        for store in STORES {
            match self.lookup(store.name(), term, query_limit, query_sort) {
                Some(_) => debug!("{}: cache hit for {term:?}", store.name()),
                None => fetches.push(async move {
                    let products = store.get(client, term, query_limit, query_sort).await?;
                    Ok::<_, FetchError>((store.name(), products))
                }),
            }
        }

        for fetched in join_all(fetches).await {
            let (store_name, products) = fetched?;
            self.insert(store_name, term, query_limit, query_sort, products);
        }

        let mut combined = Vec::new();
        for store in STORES {
            if let Some(products) = self.lookup(store.name(), term, query_limit, query_sort) {
                combined.extend_from_slice(products);
            }
        }
        Ok(combined)
    }
}
