use thiserror::Error;

use super::{Cell, Neighborhood, ParseNeighborhoodError};

use Cell::{Alive as A, Dead as D};

/// Total mapping from each of the 8 neighborhoods to the next state of the
/// center cell. One table defines one elementary automaton rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleTable {
    name: &'static str,
    next: [Cell; 8],
}

/// Errors from building a rule table out of runtime data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("no entry for neighborhood {0}")]
    Missing(Neighborhood),
    #[error("neighborhood {0} is listed more than once")]
    Duplicate(Neighborhood),
    #[error(transparent)]
    Neighborhood(#[from] ParseNeighborhoodError),
}

impl RuleTable {
    /// Build a table from exactly one entry per neighborhood.
    ///
    /// Evaluated in a `const` context a missing or repeated neighborhood
    /// stops compilation, which is how the built-in tables below are checked.
    pub const fn new(name: &'static str, entries: [(Neighborhood, Cell); 8]) -> Self {
        let mut slots: [Option<Cell>; 8] = [None; 8];
        let mut i = 0;
        while i < entries.len() {
            let (neighborhood, cell) = entries[i];
            let idx = neighborhood.index();
            if slots[idx].is_some() {
                panic!("rule table lists a neighborhood twice");
            }
            slots[idx] = Some(cell);
            i += 1;
        }

        let mut next = [Cell::Dead; 8];
        let mut j = 0;
        while j < next.len() {
            next[j] = match slots[j] {
                Some(cell) => cell,
                None => panic!("rule table is missing a neighborhood"),
            };
            j += 1;
        }

        Self { name, next }
    }

    /// Checked construction from any list of entries.
    pub fn from_entries(
        name: &'static str,
        entries: impl IntoIterator<Item = (Neighborhood, Cell)>,
    ) -> Result<Self, RuleTableError> {
        let mut slots: [Option<Cell>; 8] = [None; 8];
        for (neighborhood, cell) in entries {
            let slot = &mut slots[neighborhood.index()];
            if slot.is_some() {
                return Err(RuleTableError::Duplicate(neighborhood));
            }
            *slot = Some(cell);
        }

        let mut next = [Cell::Dead; 8];
        for (idx, slot) in slots.into_iter().enumerate() {
            next[idx] = slot.ok_or(RuleTableError::Missing(Neighborhood::from_index(idx)))?;
        }

        Ok(Self { name, next })
    }

    /// Parse the textual form, e.g. `[("111", false), ("110", true), ...]`.
    pub fn parse(name: &'static str, entries: &[(&str, bool)]) -> Result<Self, RuleTableError> {
        let parsed = entries
            .iter()
            .map(|&(key, alive)| Ok((key.parse::<Neighborhood>()?, Cell::from(alive))))
            .collect::<Result<Vec<_>, RuleTableError>>()?;
        Self::from_entries(name, parsed)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Next state for the center cell of `neighborhood`
    pub const fn lookup(&self, neighborhood: Neighborhood) -> Cell {
        self.next[neighborhood.index()]
    }

    /// Wolfram code of this table, read off its entries
    pub fn number(&self) -> u8 {
        self.next
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .fold(0, |acc, (idx, _)| acc | (1u8 << idx))
    }
}

const fn entry(left: u8, center: u8, right: u8, next: Cell) -> (Neighborhood, Cell) {
    (Neighborhood::from_bits(left, center, right), next)
}

/// Rule 18: sparse Sierpinski-like triangles
pub const RULE_18: RuleTable = RuleTable::new(
    "Rule 18",
    [
        entry(1, 1, 1, D),
        entry(1, 1, 0, D),
        entry(1, 0, 1, D),
        entry(1, 0, 0, A),
        entry(0, 1, 1, D),
        entry(0, 1, 0, D),
        entry(0, 0, 1, A),
        entry(0, 0, 0, D),
    ],
);

/// Rule 30: chaotic, aperiodic center column
pub const RULE_30: RuleTable = RuleTable::new(
    "Rule 30",
    [
        entry(1, 1, 1, D),
        entry(1, 1, 0, D),
        entry(1, 0, 1, D),
        entry(1, 0, 0, A),
        entry(0, 1, 1, A),
        entry(0, 1, 0, A),
        entry(0, 0, 1, A),
        entry(0, 0, 0, D),
    ],
);

/// Rule 86: mirror image of rule 30
pub const RULE_86: RuleTable = RuleTable::new(
    "Rule 86",
    [
        entry(1, 1, 1, D),
        entry(1, 1, 0, A),
        entry(1, 0, 1, D),
        entry(1, 0, 0, A),
        entry(0, 1, 1, D),
        entry(0, 1, 0, A),
        entry(0, 0, 1, A),
        entry(0, 0, 0, D),
    ],
);

/// Rule 110: Turing complete, grows only to the left
pub const RULE_110: RuleTable = RuleTable::new(
    "Rule 110",
    [
        entry(1, 1, 1, D),
        entry(1, 1, 0, A),
        entry(1, 0, 1, A),
        entry(1, 0, 0, D),
        entry(0, 1, 1, A),
        entry(0, 1, 0, A),
        entry(0, 0, 1, A),
        entry(0, 0, 0, D),
    ],
);

/// Rules offered by the viewer, in button order
pub fn all_rules() -> Vec<(&'static str, RuleTable)> {
    [RULE_18, RULE_30, RULE_110, RULE_86]
        .into_iter()
        .map(|rule| (rule.name(), rule))
        .collect()
}

/// Rule rendered when the viewer starts
pub const fn default_rule() -> RuleTable {
    RULE_30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_numbers_match_names() {
        assert_eq!(RULE_18.number(), 18);
        assert_eq!(RULE_30.number(), 30);
        assert_eq!(RULE_86.number(), 86);
        assert_eq!(RULE_110.number(), 110);
    }

    #[test]
    fn test_every_rule_is_total() {
        for (name, rule) in all_rules() {
            let rebuilt = RuleTable::from_entries(
                name,
                Neighborhood::all().map(|n| (n, rule.lookup(n))),
            );
            assert_eq!(rebuilt, Ok(rule), "{name}");
        }
    }

    #[test]
    fn test_rule30_lookups() {
        let on = |s: &str| RULE_30.lookup(s.parse().unwrap());
        assert_eq!(on("001"), Cell::Alive);
        assert_eq!(on("010"), Cell::Alive);
        assert_eq!(on("100"), Cell::Alive);
        assert_eq!(on("111"), Cell::Dead);
        assert_eq!(on("000"), Cell::Dead);
    }

    #[test]
    fn test_all_rules_order_and_default() {
        let names: Vec<_> = all_rules().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Rule 18", "Rule 30", "Rule 110", "Rule 86"]);
        assert_eq!(default_rule(), RULE_30);
    }

    #[test]
    fn test_parse_textual_table() {
        let rule = RuleTable::parse(
            "Rule 110",
            &[
                ("111", false),
                ("110", true),
                ("101", true),
                ("100", false),
                ("011", true),
                ("010", true),
                ("001", true),
                ("000", false),
            ],
        );
        assert_eq!(rule, Ok(RULE_110));
    }

    #[test]
    fn test_missing_entry_is_rejected() {
        let entries = Neighborhood::all()
            .into_iter()
            .filter(|n| n.to_string() != "101")
            .map(|n| (n, Cell::Dead));
        assert_eq!(
            RuleTable::from_entries("partial", entries),
            Err(RuleTableError::Missing("101".parse().unwrap()))
        );
    }

    #[test]
    fn test_duplicate_entry_is_rejected() {
        let mut entries: Vec<_> = Neighborhood::all().map(|n| (n, Cell::Dead)).to_vec();
        entries.push((Neighborhood::from_bits(0, 0, 0), Cell::Alive));
        assert_eq!(
            RuleTable::from_entries("dup", entries),
            Err(RuleTableError::Duplicate(Neighborhood::from_bits(0, 0, 0)))
        );
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        let result = RuleTable::parse("bad", &[("1a1", true)]);
        assert_eq!(
            result,
            Err(RuleTableError::Neighborhood(ParseNeighborhoodError::Character('a')))
        );
    }

    #[test]
    #[should_panic(expected = "lists a neighborhood twice")]
    fn test_const_constructor_panics_on_repeat() {
        let d = Cell::Dead;
        RuleTable::new(
            "gap",
            [
                entry(0, 0, 0, d),
                entry(0, 0, 1, d),
                entry(0, 1, 0, d),
                entry(0, 1, 1, d),
                entry(1, 0, 0, d),
                entry(1, 0, 1, d),
                entry(1, 1, 0, d),
                entry(0, 0, 0, d),
            ],
        );
    }
}
