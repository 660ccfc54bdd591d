use std::collections::VecDeque;

use crate::cnf::Lit;

use super::Solver;

impl Solver {
    /// Registers a clause's initial watches: its first two literals, or a
    /// single doubled watch for a unit clause (spec.md §3: "a clause with a
    /// single literal watches itself").
    pub fn watch_clause(&mut self, clause_idx: usize) {
        let lits = self.arena[clause_idx].literals().to_vec();
        let pair = if lits.len() == 1 { (lits[0], lits[0]) } else { (lits[0], lits[1]) };
        self.watches.add(pair.0, clause_idx);
        if pair.1 != pair.0 {
            self.watches.add(pair.1, clause_idx);
        }
        self.watch_pairs.push(pair);
    }

    /// Boolean constraint propagation over the two-watched-literal scheme
    /// (spec.md §4.5). `queue` holds literals that have just become true;
    /// for each one we walk the watch list of its negation, since that is
    /// the literal that just became false in every clause watching it.
    ///
    /// Returns the conflicting clause's arena index, if propagation derives
    /// a falsified clause; otherwise drains the queue and returns `None`.
    pub fn bcp(&mut self, queue: &mut VecDeque<Lit>) -> Option<usize> {
        while let Some(true_lit) = queue.pop_front() {
            let false_lit = -true_lit;
            let level = self.assignment.level_of(crate::cnf::var_of(true_lit));

            for clause_idx in self.watches.get(false_lit) {
                let (a, b) = self.watch_pairs[clause_idx];
                let other = if a == false_lit { b } else { a };

                if self.assignment.is_true(other) {
                    continue; // clause already satisfied by its other watch
                }

                let replacement = self.arena[clause_idx]
                    .literals()
                    .iter()
                    .copied()
                    .find(|&lit| lit != false_lit && lit != other && !self.assignment.is_false(lit));

                match replacement {
                    Some(new_watch) => {
                        self.watches.remove(false_lit, clause_idx);
                        self.watches.add(new_watch, clause_idx);
                        self.watch_pairs[clause_idx] = (new_watch, other);
                    }
                    None => {
                        if self.assignment.is_false(other) {
                            return Some(clause_idx);
                        }
                        if self.assignment.value_of(other).is_none() {
                            self.assignment.assign(other, level, Some(clause_idx));
                            self.stats.increment_propagation_count();
                            queue.push_back(other);
                        }
                    }
                }
            }
        }
        None
    }
}
