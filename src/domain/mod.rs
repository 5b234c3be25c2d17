mod cell;
mod neighborhood;
mod rules;
mod generation;
mod grid;

pub use cell::Cell;
pub use neighborhood::{Neighborhood, ParseNeighborhoodError};
pub use rules::{
    RuleTable, RuleTableError, RULE_18, RULE_30, RULE_86, RULE_110, all_rules, default_rule,
};
pub use generation::Generation;
pub use grid::Grid;
