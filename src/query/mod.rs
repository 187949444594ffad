mod parsing;
pub use parsing::*;
mod matching;
pub use matching::*;
mod grouping;
pub use grouping::*;

use crate::prelude::*;

/// A whole invocation's worth of parsed search input: the matching mode and
/// the ordered result groups. Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Query {
    pub mode: MatchingMode,
    pub groups: Vec<Group>,
}

impl Query {
    pub fn new(terms: Vec<Term>, mode: MatchingMode, glue: bool) -> Query {
        Query {
            mode,
            groups: build_groups(terms, glue),
        }
    }
}
