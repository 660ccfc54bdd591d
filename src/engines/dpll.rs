use std::collections::HashMap;

use crate::cnf::{propagate_literal, pure_literal_in_list, var_of, Clause, Cnf};
use crate::engines::{Model, Verdict};

/// Iterative DPLL with an explicit stack of `(formula, partial_assignment)`
/// frames (spec.md §4.4), grounded on
/// `original_source/sat_solver.py::dpll_iterative` — the reference the
/// teacher's recursive `dpll::dpll` was itself a (buggier) stand-in for.
///
/// Per frame: simplify by alternating unit propagation and one pass of
/// pure-literal elimination until neither changes anything; then branch on
/// the first literal of the first remaining clause, pushing both `true` and
/// `false` successor frames so both are explored if the first fails.
pub fn dpll(cnf: &Cnf) -> (Verdict, Option<Model>) {
    let mut stack: Vec<(Vec<Clause>, HashMap<usize, bool>)> = vec![(cnf.clauses.clone(), HashMap::new())];

    while let Some((mut formula, mut asn)) = stack.pop() {
        let mut conflict = false;

        loop {
            let mut changed = false;

            while let Some(lit) = formula.iter().find_map(Clause::is_unit) {
                asn.insert(var_of(lit), lit > 0);
                match propagate_literal(lit, &formula) {
                    Some(reduced) => {
                        formula = reduced;
                        changed = true;
                    }
                    None => {
                        conflict = true;
                        break;
                    }
                }
            }
            if conflict {
                break;
            }

            if let Some(lit) = pure_literal_in_list(&formula) {
                asn.insert(var_of(lit), lit > 0);
                formula.retain(|c| !c.literals().contains(&lit));
                changed = true;
            }

            if !changed {
                break;
            }
        }

        if conflict {
            continue;
        }
        if formula.is_empty() {
            return (Verdict::Sat, Some(Model::from_assignment(asn)));
        }

        let lit = formula[0].literals()[0];
        if let Some(false_formula) = propagate_literal(-lit, &formula) {
            let mut false_asn = asn.clone();
            false_asn.insert(var_of(lit), lit < 0);
            stack.push((false_formula, false_asn));
        }
        if let Some(true_formula) = propagate_literal(lit, &formula) {
            let mut true_asn = asn;
            true_asn.insert(var_of(lit), lit > 0);
            stack.push((true_formula, true_asn));
        }
    }

    (Verdict::Unsat, None)
}
