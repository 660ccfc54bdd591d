use crate::cnf::{var_of, Clause, Lit};

use super::Solver;

impl Solver {
    /// First-UIP conflict analysis (spec.md §4.5). Walks the trail backward
    /// from the conflicting clause, resolving away every variable assigned
    /// at the current decision level until exactly one remains: the first
    /// unique implication point. Literals from earlier levels are kept
    /// as-is in the learned clause; the UIP's negation is added as the
    /// asserting literal.
    ///
    /// `seen` is indexed by *variable*, not literal, by construction —
    /// this is the fix for the source behavior spec.md §9 flags as
    /// possibly conflating variable and literal identity during analysis.
    ///
    /// Returns the learned clause, the asserting UIP literal (which
    /// `Clause::new`'s sort may relocate anywhere in the clause, so it is
    /// handed back explicitly rather than recovered positionally), and the
    /// backjump level (the second-highest decision level among the clause's
    /// other literals, or 0 if the clause is unit).
    pub fn analyze(&self, conflict_idx: usize, current_level: i32) -> (Clause, Lit, i32) {
        let mut seen = vec![false; self.assignment_len()];
        let mut learnt: Vec<Lit> = Vec::new();
        let mut counter = 0usize;
        let mut trail_idx = self.assignment.trail().len();
        let mut clause_lits = self.arena[conflict_idx].literals().to_vec();
        let mut pivot: Option<Lit> = None;

        loop {
            for &lit in &clause_lits {
                if Some(lit) == pivot {
                    continue;
                }
                let var = var_of(lit);
                if seen[var] {
                    continue;
                }
                let level = self.assignment.level_of(var);
                if level <= 0 {
                    continue; // level-0 facts are permanent; drop from the learned clause
                }
                seen[var] = true;
                if level == current_level {
                    counter += 1;
                } else {
                    learnt.push(lit);
                }
            }

            loop {
                trail_idx -= 1;
                let var = self.assignment.trail()[trail_idx];
                if seen[var] {
                    break;
                }
            }
            let var = self.assignment.trail()[trail_idx];
            let trail_lit = self.assignment.trail_literal(var);
            seen[var] = false;
            counter -= 1;
            pivot = Some(trail_lit);

            if counter == 0 {
                break;
            }
            clause_lits = self
                .assignment
                .antecedent_of(var)
                .map(|idx| self.arena[idx].literals().to_vec())
                .expect("a variable resolved mid-analysis must have an antecedent");
        }

        let uip_lit = -pivot.expect("the conflict clause has at least one literal to pivot on");
        let backjump_level = learnt
            .iter()
            .map(|&lit| self.assignment.level_of(var_of(lit)))
            .max()
            .unwrap_or(0);

        learnt.push(uip_lit);
        (Clause::new(learnt), uip_lit, backjump_level)
    }
}
