mod analyze;
mod propagate;
mod restart;
mod trail;
mod watch;

use std::collections::VecDeque;

use crate::cnf::{Clause, Cnf, Lit};
use crate::config::SolverConfig;
use crate::engines::{Model, Verdict};
use crate::stats::Statistics;

use restart::RestartSchedule;
use trail::Assignment;
use watch::WatchLists;

/// CDCL solver state: a growable clause arena (original clauses followed by
/// learned ones), the two-watched-literal index into it, and the trail.
/// Grounded on `data_structures::{Assign, Clauses}` and `cdcl::cdcl::Cdcl`,
/// generalized from QBF back to plain CDCL and rebuilt as an explicit loop
/// rather than the teacher's recursion (spec.md §4.5 requires iteration).
struct Solver {
    arena: Vec<Clause>,
    watch_pairs: Vec<(Lit, Lit)>,
    watches: WatchLists,
    assignment: Assignment,
    num_vars: usize,
    stats: Statistics,
}

impl Solver {
    fn new(cnf: &Cnf) -> Self {
        let num_vars = cnf.num_vars();
        let mut solver = Solver {
            arena: Vec::new(),
            watch_pairs: Vec::new(),
            watches: WatchLists::new(num_vars),
            assignment: Assignment::new(num_vars),
            num_vars,
            stats: Statistics::new(),
        };
        for clause in &cnf.clauses {
            let idx = solver.arena.len();
            solver.arena.push(clause.clone());
            solver.watch_clause(idx);
        }
        solver
    }

    fn assignment_len(&self) -> usize {
        self.num_vars + 1
    }

    /// Seeds the propagation queue with every unit clause at level 0 and
    /// runs BCP to a fixpoint. This is the explicit fix for the source
    /// behavior spec.md §9 flags: the reference only ever seeds its queue
    /// from the most recent decision, so top-level units are never
    /// propagated until something else happens to touch them.
    fn seed_units(&mut self) -> Option<usize> {
        let mut queue = VecDeque::new();
        for idx in 0..self.arena.len() {
            if let Some(lit) = self.arena[idx].is_unit() {
                match self.assignment.value_of(lit) {
                    Some(true) => {}
                    Some(false) => return Some(idx),
                    None => {
                        self.assignment.assign(lit, 0, Some(idx));
                        queue.push_back(lit);
                    }
                }
            }
        }
        self.bcp(&mut queue)
    }

    fn all_assigned(&self) -> bool {
        self.assignment.num_assigned() == self.num_vars
    }

    fn decide(&mut self, level: i32) -> Lit {
        let var = (1..=self.num_vars)
            .find(|&v| self.assignment.value_of_var(v).is_none())
            .expect("decide called with no unassigned variable left");
        let lit = var as Lit; // no phase saving: always assign true (spec.md §9)
        self.assignment.assign(lit, level, None);
        lit
    }

    fn add_learned_clause(&mut self, clause: Clause) -> usize {
        let idx = self.arena.len();
        self.arena.push(clause);
        self.watch_clause(idx);
        idx
    }

    fn model(&self) -> Model {
        let mut values = std::collections::HashMap::new();
        for var in 1..=self.num_vars {
            if let Some(value) = self.assignment.value_of_var(var) {
                values.insert(var, value);
            }
        }
        Model::from_assignment(values)
    }
}

/// Conflict-driven clause learning (spec.md §4.5): two-watched-literal BCP,
/// first-UIP conflict analysis, non-chronological backjumping, and geometric
/// restarts. The central engine of the toolkit and the only one with a
/// nontrivial concurrency story (see `engines::cdcl` callers in `harness`).
pub fn cdcl(cnf: &Cnf, config: &SolverConfig) -> (Verdict, Option<Model>, Statistics) {
    if cnf.contains_empty_clause() {
        return (Verdict::Unsat, None, Statistics::new());
    }

    let mut solver = Solver::new(cnf);
    let mut schedule = RestartSchedule::new(config.restart_base.max(1) as u64);
    let mut conflicts = 0u64;
    let mut level = 0i32;

    if solver.seed_units().is_some() {
        return (Verdict::Unsat, None, solver.stats);
    }

    loop {
        if solver.all_assigned() {
            return (Verdict::Sat, Some(solver.model()), solver.stats);
        }

        level += 1;
        let decision = solver.decide(level);
        let mut queue = VecDeque::from([decision]);

        loop {
            match solver.bcp(&mut queue) {
                None => break,
                Some(confl) => {
                    conflicts += 1;
                    solver.stats.increment_backtrack_count();
                    if level == 0 {
                        return (Verdict::Unsat, None, solver.stats);
                    }

                    let (learnt, uip_lit, backjump_level) = solver.analyze(confl, level);
                    solver.stats.increment_learned_clause_count();
                    solver.assignment.undo_to(backjump_level);
                    level = backjump_level;
                    queue.clear();

                    let learnt_idx = solver.add_learned_clause(learnt);
                    solver.assignment.assign(uip_lit, level, Some(learnt_idx));
                    queue.push_back(uip_lit);

                    if config.restarts_enabled && schedule.should_restart(conflicts) {
                        solver.assignment.undo_to(0);
                        level = 0;
                        queue.clear();
                        schedule.bump();
                        solver.stats.increment_restart_count();
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests_support {
    use super::Solver;
    use crate::cnf::Cnf;

    pub fn solver_from(clauses: &[&[i32]]) -> Solver {
        Solver::new(&Cnf::from_literal_lists(clauses.iter().map(|c| c.to_vec())))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cnf::Cnf;
    use crate::config::SolverConfig;

    fn cnf(clauses: &[&[i32]]) -> Cnf {
        Cnf::from_literal_lists(clauses.iter().map(|c| c.to_vec()))
    }

    fn solve(clauses: &[&[i32]]) -> (Verdict, Option<Model>) {
        let config = SolverConfig::default();
        let (verdict, model, _) = cdcl(&cnf(clauses), &config);
        (verdict, model)
    }

    #[test]
    fn single_unit_is_sat_with_witness() {
        let (verdict, model) = solve(&[&[1]]);
        assert_eq!(verdict, Verdict::Sat);
        assert_eq!(model.unwrap().value_of(1), Some(true));
    }

    #[test]
    fn unit_contradiction_is_unsat() {
        assert_eq!(solve(&[&[1], &[-1]]).0, Verdict::Unsat);
    }

    #[test]
    fn xor_like_formula_is_unsat() {
        assert_eq!(solve(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]]).0, Verdict::Unsat);
    }

    #[test]
    fn pigeonhole_like_formula_is_unsat() {
        assert_eq!(solve(&[&[1, 2, 3], &[-1, 2], &[-2, 3], &[-3]]).0, Verdict::Unsat);
    }

    #[test]
    fn triangle_implication_is_sat_and_witness_satisfies() {
        let formula = cnf(&[&[1, -2], &[2, -3], &[3, -1]]);
        let config = SolverConfig::default();
        let (verdict, model, _) = cdcl(&formula, &config);
        assert_eq!(verdict, Verdict::Sat);
        assert!(model.unwrap().satisfies(&formula));
    }

    #[test]
    fn chain_formula_witness_satisfies() {
        let formula = cnf(&[&[1, 2], &[-2, 3], &[-3, 4]]);
        let config = SolverConfig::default();
        let (verdict, model, _) = cdcl(&formula, &config);
        assert_eq!(verdict, Verdict::Sat);
        assert!(model.unwrap().satisfies(&formula));
    }

    #[test]
    fn requires_backjump_over_multiple_decision_levels() {
        // With no phase saving, the solver decides x1=true, x2=true, x3=true
        // in that order, violating this single clause on the third decision.
        // Since x1 and x2 are not implicated by it, 1-UIP analysis must
        // backjump straight to level 2 (skipping chronological backtrack to
        // level 3) and assert x3=false there for the solver to find the
        // witness x1=x2=true, x3=false at all.
        let formula = cnf(&[&[-1, -2, -3]]);
        let config = SolverConfig::default();
        let (verdict, model, _) = cdcl(&formula, &config);
        assert_eq!(verdict, Verdict::Sat);
        assert!(model.unwrap().satisfies(&formula));
    }

    #[test]
    fn multi_literal_learned_clause_asserts_the_correct_uip() {
        // Regression test: the UIP literal must be read off the value
        // `analyze` computed it to be, not recovered positionally from the
        // sorted learned clause (where it need not be first or last).
        // Decide x1=true (level 1), x2=true (level 2); x2 forces x3 and x4
        // true via (-2,3)/(-2,4), which conflicts with (-1,-3,-4). The
        // learned clause is {-1,-2} with UIP -2 at level 2 (not -1, which
        // sorts last): backjump to level 1, assert x2=false there.
        let formula = cnf(&[&[-1, -3, -4], &[-2, 3], &[-2, 4]]);
        let config = SolverConfig::default();
        let (verdict, model, _) = cdcl(&formula, &config);
        assert_eq!(verdict, Verdict::Sat);
        assert!(model.unwrap().satisfies(&formula));
    }

    #[test]
    fn restarts_do_not_change_the_verdict() {
        let formula = cnf(&[&[1, 2, 3], &[-1, 2], &[-2, 3], &[-3, 4], &[1, -4]]);
        let config = SolverConfig { restart_base: 1, ..SolverConfig::default() }; // restart after every single conflict
        let (verdict, model, stats) = cdcl(&formula, &config);
        assert_eq!(verdict, Verdict::Sat);
        assert!(model.unwrap().satisfies(&formula));
        let _ = stats.restart_count; // may be zero if no conflicts were hit; just exercising the path
    }

    #[test]
    fn deterministic_across_runs() {
        let formula = cnf(&[&[1, 2, 3], &[-1, 2], &[-2, 3], &[-3, 4], &[1, -4]]);
        let config = SolverConfig::default();
        let first = cdcl(&formula, &config).0;
        let second = cdcl(&formula, &config).0;
        assert_eq!(first, second);
    }
}
