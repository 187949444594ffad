use crate::prelude::*;

/// Strictness of the main-term check against a candidate name. A single
/// global setting; clauses are checked the same way in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingMode {
    /// Trust the store results, don't check the main term at all
    None,
    /// The main term must appear in the name
    Precise,
    /// The main term must appear as a word or a word ending
    Strict,
}

impl FromStr for MatchingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(MatchingMode::None),
            "precise" => Ok(MatchingMode::Precise),
            "strict" => Ok(MatchingMode::Strict),
            _ => Err(format!("unknown matching mode {s:?} (expected none, precise or strict)")),
        }
    }
}

/// The canonical case fold. Applied identically to every side of every
/// comparison (clause texts, main terms, candidate names, group keys), so
/// matching stays consistent for Estonian diacritics.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

impl Clause {
    pub fn matches(&self, candidate: &str) -> bool {
        fold(candidate).contains(&fold(&self.text)) != self.negated
    }
}

impl Term {
    /// Tests one candidate name: the mode-dependent main-term check, then
    /// every clause (logical AND).
    pub fn matches(&self, mode: MatchingMode, candidate: &str) -> bool {
        let main_found = match mode {
            MatchingMode::None => true,
            MatchingMode::Precise => fold(candidate).contains(&fold(&self.main)),
            MatchingMode::Strict => ends_word(&fold(candidate), &fold(&self.main)),
        };
        if !main_found {
            return false;
        }
        self.clauses.iter().all(|clause| clause.matches(candidate))
    }
}

/// True when `needle` occurs in `haystack` immediately followed by the end of
/// the string or a non-alphanumeric character. There is no requirement on the
/// left side: "kohupiim" ends the word "piim", "piimašokolaad" does not.
fn ends_word(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let start = from + found;
        let end = start + needle.len();
        match haystack[end..].chars().next() {
            None => return true,
            Some(c) if !c.is_alphanumeric() => return true,
            Some(_) => (),
        }
        match haystack[start..].chars().next() {
            Some(c) => from = start + c.len_utf8(),
            None => return false,
        }
    }
    false
}
