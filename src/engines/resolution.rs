use std::collections::HashSet;

use crate::cnf::{resolve, Clause, Cnf};
use crate::engines::Verdict;

/// Saturates the clause set under binary resolution (spec.md §4.2).
/// Grounded on `original_source/sat_solver.py::resolution_only` and the
/// teacher's `resolution.rs::resolve`/hashtable-membership idiom, generalized
/// from Q-resolution back to plain propositional resolution.
///
/// Maintains the invariant that every generated non-tautological resolvent
/// not already present is added, one clause per outer pass. Terminates when
/// either the empty clause is derived (UNSAT) or a full pass produces no new
/// clause (SAT).
pub fn resolution_only(cnf: &Cnf) -> Verdict {
    let mut clauses: Vec<Clause> = cnf.clauses.clone();
    let mut seen: HashSet<Clause> = clauses.iter().cloned().collect();

    loop {
        let mut found = None;
        'search: for i in 0..clauses.len() {
            for j in (i + 1)..clauses.len() {
                if let Some(resolvent) = resolve(&clauses[i], &clauses[j]) {
                    if resolvent.is_tautology() {
                        continue;
                    }
                    if !seen.contains(&resolvent) {
                        found = Some(resolvent);
                        break 'search;
                    }
                }
            }
        }
        match found {
            None => return Verdict::Sat,
            Some(resolvent) => {
                if resolvent.is_empty() {
                    return Verdict::Unsat;
                }
                seen.insert(resolvent.clone());
                clauses.push(resolvent);
            }
        }
    }
}
