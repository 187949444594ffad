/// One additional term of a specification. `negated` means the text must be
/// absent from a candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub text: String,
    pub negated: bool,
}

/// One parsed specification, e.g. `piim:1l:^alma`: the main term the store
/// query is based on plus the clauses used for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub main: String,
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyMain,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyMain => write!(f, "the main term is empty"),
        }
    }
}

impl Term {
    /// Parses a raw specification string.
    ///
    /// Unescaped `:` delimits segments. The first segment is the main term,
    /// every later non-empty segment one clause, negated when it starts with
    /// an unescaped `^`. `\:` and `\^` resolve to literal characters; a
    /// backslash before anything else passes through as-is.
    pub fn parse(raw: &str) -> Result<Term, ParseError> {
        let mut segments: Vec<(String, bool)> = Vec::new();
        let mut current = String::new();
        let mut negated = false;
        let mut chars = raw.chars();
        loop {
            match chars.next() {
                Some('\\') => match chars.next() {
                    Some(':') => current.push(':'),
                    Some('^') => current.push('^'),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    },
                    None => current.push('\\'),
                },
                Some(':') => {
                    segments.push((std::mem::take(&mut current), negated));
                    negated = false;
                },
                // Only the first character of a clause segment negates
                Some('^') if current.is_empty() && !segments.is_empty() && !negated => negated = true,
                Some(other) => current.push(other),
                None => {
                    segments.push((current, negated));
                    break;
                },
            }
        }

        let mut segments = segments.into_iter();
        let (main, _) = segments.next().unwrap_or_default();
        if main.is_empty() {
            return Err(ParseError::EmptyMain);
        }
        let clauses = segments
            .filter(|(text, _)| !text.is_empty())
            .map(|(text, negated)| Clause { text, negated })
            .collect();

        Ok(Term { main, clauses })
    }
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    for c in text.chars() {
        if c == ':' || c == '^' {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_escaped(f, &self.main)?;
        for clause in &self.clauses {
            write!(f, ":")?;
            if clause.negated {
                write!(f, "^")?;
            }
            write_escaped(f, &clause.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(text: &str, negated: bool) -> Clause {
        Clause { text: text.to_string(), negated }
    }

    #[test]
    fn plain_term() {
        let term = Term::parse("piim").unwrap();
        assert_eq!(term.main, "piim");
        assert!(term.clauses.is_empty());
    }

    #[test]
    fn clauses_and_negation() {
        let term = Term::parse("piim:1l:2,5%:^alma").unwrap();
        assert_eq!(term.main, "piim");
        assert_eq!(term.clauses, vec![
            clause("1l", false),
            clause("2,5%", false),
            clause("alma", true),
        ]);
    }

    #[test]
    fn escaped_colon_in_main() {
        let term = Term::parse("a\\:b").unwrap();
        assert_eq!(term.main, "a:b");
        assert!(term.clauses.is_empty());
    }

    #[test]
    fn escaped_caret_is_not_negation() {
        let term = Term::parse("a:\\^b").unwrap();
        assert_eq!(term.main, "a");
        assert_eq!(term.clauses, vec![clause("^b", false)]);
    }

    #[test]
    fn stray_backslash_passes_through() {
        let term = Term::parse("a\\b:c\\d").unwrap();
        assert_eq!(term.main, "a\\b");
        assert_eq!(term.clauses, vec![clause("c\\d", false)]);
    }

    #[test]
    fn empty_segments_are_discarded() {
        let term = Term::parse("piim::1l:").unwrap();
        assert_eq!(term.clauses, vec![clause("1l", false)]);

        let term = Term::parse("piim:^").unwrap();
        assert!(term.clauses.is_empty());
    }

    #[test]
    fn caret_is_only_structural_at_clause_start() {
        let term = Term::parse("piim:al^ma").unwrap();
        assert_eq!(term.clauses, vec![clause("al^ma", false)]);

        let term = Term::parse("piim:^^alma").unwrap();
        assert_eq!(term.clauses, vec![clause("^alma", true)]);
    }

    #[test]
    fn caret_in_main_is_literal() {
        let term = Term::parse("^piim").unwrap();
        assert_eq!(term.main, "^piim");
    }

    #[test]
    fn empty_main_is_an_error() {
        assert_eq!(Term::parse(""), Err(ParseError::EmptyMain));
        assert_eq!(Term::parse(":alma"), Err(ParseError::EmptyMain));
    }

    #[test]
    fn display_round_trips() {
        let terms = [
            Term::parse("piim").unwrap(),
            Term::parse("piim:1l:^alma").unwrap(),
            Term::parse("a\\:b:\\^c:^d").unwrap(),
            Term {
                main: "juust 20%:".to_string(),
                clauses: vec![
                    Clause { text: "^viil".to_string(), negated: true },
                    Clause { text: "a:b".to_string(), negated: false },
                ],
            },
        ];
        for term in terms {
            assert_eq!(Term::parse(&term.to_string()).unwrap(), term);
        }
    }
}
