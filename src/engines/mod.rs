pub mod cdcl;
pub mod dp;
pub mod dpll;
pub mod resolution;

use std::collections::HashMap;

/// The two-valued verdict every engine returns (spec.md §6).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Sat,
    Unsat,
}

/// A witness assignment, exposed by the SAT-returning variants of DPLL and
/// CDCL (spec.md §6).
#[derive(Clone, Debug, Default)]
pub struct Model {
    values: HashMap<usize, bool>,
}

impl Model {
    pub fn from_assignment(values: HashMap<usize, bool>) -> Self {
        Model { values }
    }

    pub fn value_of(&self, var: usize) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// True iff every clause in `cnf` is satisfied by this model. Used by
    /// tests to check the universal invariant (spec.md §8, property 1).
    pub fn satisfies(&self, cnf: &crate::cnf::Cnf) -> bool {
        cnf.clauses.iter().all(|clause| {
            clause.literals().iter().any(|&lit| {
                self.value_of(crate::cnf::var_of(lit)).map(|v| (lit > 0) == v).unwrap_or(false)
            })
        })
    }
}
