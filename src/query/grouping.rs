use crate::prelude::*;

/// One output result list: the case-folded main text it is keyed on and the
/// terms whose predicates are OR-combined to fill it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub members: Vec<Term>,
}

impl Group {
    /// Tests one candidate name against the group: any member term may accept
    /// it. With glued duplicates this is what implements
    /// `(A AND B) OR (A AND C)`.
    pub fn matches(&self, mode: MatchingMode, candidate: &str) -> bool {
        self.members.iter().any(|term| term.matches(mode, candidate))
    }

    /// Label identifying this group in rendered output, e.g.
    /// `piim::(alma)|(rimi&^basic)`.
    pub fn label(&self) -> String {
        if self.members.len() == 1 && self.members[0].clauses.is_empty() {
            return self.key.clone();
        }
        let members = self.members.iter().map(|term| {
            let clauses = term.clauses.iter().map(|clause| match clause.negated {
                true => format!("^{}", clause.text),
                false => clause.text.clone(),
            }).collect::<Vec<_>>().join("&");
            format!("({clauses})")
        }).collect::<Vec<_>>().join("|");
        format!("{}::{members}", self.key)
    }
}

/// Partitions terms into groups. Without glue every term gets its own group,
/// in input order. With glue, terms sharing a case-folded main text collapse
/// into one group sitting at the first occurrence's position.
pub fn build_groups(terms: Vec<Term>, glue: bool) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for term in terms {
        let key = fold(&term.main);
        if glue {
            if let Some(group) = groups.iter_mut().find(|group| group.key == key) {
                group.members.push(term);
                continue;
            }
        }
        groups.push(Group { key, members: vec![term] });
    }
    groups
}
