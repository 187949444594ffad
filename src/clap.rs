use std::path::PathBuf;
use crate::prelude::*;

/// Price search over Estonian e-store catalogs.
///
/// Specifications look like `main:add1:^add2`: products must carry the main
/// term (depending on --mode) and every additional term in their name, and
/// must not carry the `^`-negated ones. Literal `:` and `^` characters are
/// written `\:` and `\^`. With --glue, specifications sharing a main term
/// fill one combined result list instead of separate ones.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Cache keep-alive period in seconds, 0 disables the cache file
    #[arg(short, long, default_value_t = 60 * 60 * 12)]
    pub cache_time: i64,

    /// Cache file path
    #[arg(long, default_value = "cache.json")]
    pub cache_file: PathBuf,

    /// Sort descendingly
    #[arg(short, long)]
    pub descending: bool,

    /// Shopping list file with one specification per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Glue specifications sharing a main term into one result list
    #[arg(short, long)]
    pub glue: bool,

    /// Output the results as JSON instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Sort order requested from the e-stores themselves
    /// (default|asc|desc|asc_per|desc_per)
    #[arg(short = 'k', long, default_value = "default")]
    pub query_sort: QuerySort,

    /// Maximum number of products shown per result list
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Main term matching mode (none|precise|strict)
    #[arg(short, long, default_value = "precise")]
    pub mode: MatchingMode,

    /// Output field arrangement (n=name, p=price, e=price per kg/l/etc,
    /// u=url, s=store); does not affect the JSON output
    #[arg(short = 'o', long, default_value = "s n p e")]
    pub format: String,

    /// Sort by the price per kg/liter/etc instead of the plain price
    #[arg(short, long)]
    pub price_per: bool,

    /// Maximum number of products requested per store
    #[arg(short, long, default_value_t = 100)]
    pub query_limit: usize,

    /// Only print warnings, errors and the end result
    #[arg(short, long)]
    pub silent: bool,

    /// Term specifications, e.g. "piim:1l:^alma"
    pub specs: Vec<String>,
}
