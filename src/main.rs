mod cache;
mod clap;
mod download;
mod filter;
mod output;
mod prelude;
mod products;
mod query;
mod stores;

use crate::prelude::*;

fn fail(message: String) -> ! {
    error!("{message}");
    std::process::exit(1);
}

/// Gathers specifications from the command line and the shopping list file,
/// in that order. Blank lines are skipped.
fn collect_specs(args: &Args) -> Vec<String> {
    let mut specs = args.specs.clone();
    if let Some(path) = &args.file {
        match std::fs::read_to_string(path) {
            Ok(content) => specs.extend(
                content.lines().map(|line| line.trim().to_string()).filter(|line| !line.is_empty()),
            ),
            Err(e) => error!("Could not read shopping list {}, skipping it: {e}", path.display()),
        }
    }
    specs
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_level = match args.silent {
        true => "warn",
        false => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let Some(format) = parse_format(&args.format) else {
        fail(format!("Invalid output format {:?} (expected space-separated n, p, e, u, s)", args.format))
    };

    let specs = collect_specs(&args);
    if specs.is_empty() {
        fail(String::from("No search specifications were found (pass them as arguments or with --file)"));
    }

    let mut terms = Vec::new();
    for spec in &specs {
        match Term::parse(spec) {
            Ok(term) => terms.push(term),
            Err(e) => fail(format!("Invalid specification {spec:?}: {e}")),
        }
    }
    let query = Query::new(terms, args.mode, args.glue);

    let mut cache = Cache::load(&args.cache_file, args.cache_time);
    let client = Client::new();

    // One candidate pool per distinct key; groups sharing a main term share
    // the fetched data
    let mut candidates: HashMap<String, Vec<Product>> = HashMap::new();
    for group in &query.groups {
        if candidates.contains_key(&group.key) {
            continue;
        }
        match cache.get_or_fetch(&client, &group.key, args.query_limit, args.query_sort).await {
            Ok(products) => {
                candidates.insert(group.key.clone(), products);
            },
            Err(e) => fail(format!("Fetching products for {:?} failed: {e}", group.key)),
        }
    }

    let mut results = Vec::new();
    for group in &query.groups {
        let pool = candidates.get(&group.key).map(Vec::as_slice).unwrap_or(&[]);
        let mut products = filter_group(group, query.mode, pool);
        sort_products(&mut products, args.descending, args.price_per);
        limit_products(&mut products, args.limit);
        debug!("{}: {} of {} products kept", group.label(), products.len(), pool.len());
        results.push((group.label(), products));
    }

    cache.store(&args.cache_file, args.cache_time);

    let rendered = match args.json {
        true => render_json(&results),
        false => render_human(&results, &format),
    };
    println!("{rendered}");
}
