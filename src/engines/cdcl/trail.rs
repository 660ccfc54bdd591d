use crate::cnf::{var_of, Lit};

/// Per-variable assignment record: its value, the decision level it was set
/// at, and the clause (arena index) that forced it, if any (`None` for
/// decisions). Grounded on `data_structures::Assign` / `VarData`, but dense
/// over `1..=num_vars` rather than keyed through a wrapper type.
#[derive(Clone, Copy, Debug)]
pub struct VarState {
    pub value: bool,
    pub level: i32,
    pub antecedent: Option<usize>,
}

/// The trail: a dense per-variable assignment table plus the order in which
/// variables were assigned, so backjumping can undo a contiguous suffix.
pub struct Assignment {
    states: Vec<Option<VarState>>,
    trail: Vec<usize>,
}

impl Assignment {
    pub fn new(num_vars: usize) -> Self {
        Assignment { states: vec![None; num_vars + 1], trail: Vec::new() }
    }

    pub fn value_of_var(&self, var: usize) -> Option<bool> {
        self.states[var].map(|s| s.value)
    }

    pub fn value_of(&self, lit: Lit) -> Option<bool> {
        self.value_of_var(var_of(lit)).map(|v| v == (lit > 0))
    }

    pub fn is_true(&self, lit: Lit) -> bool {
        self.value_of(lit) == Some(true)
    }

    pub fn is_false(&self, lit: Lit) -> bool {
        self.value_of(lit) == Some(false)
    }

    pub fn level_of(&self, var: usize) -> i32 {
        self.states[var].map(|s| s.level).unwrap_or(-1)
    }

    pub fn antecedent_of(&self, var: usize) -> Option<usize> {
        self.states[var].and_then(|s| s.antecedent)
    }

    /// The literal corresponding to `var`'s current assignment (e.g. `-3` if
    /// variable 3 is assigned false).
    pub fn trail_literal(&self, var: usize) -> Lit {
        let value = self.states[var].expect("trail entry must be assigned").value;
        if value {
            var as Lit
        } else {
            -(var as Lit)
        }
    }

    pub fn assign(&mut self, lit: Lit, level: i32, antecedent: Option<usize>) {
        let var = var_of(lit);
        self.states[var] = Some(VarState { value: lit > 0, level, antecedent });
        self.trail.push(var);
    }

    pub fn trail(&self) -> &[usize] {
        &self.trail
    }

    pub fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    /// Undoes every assignment made above `level`, returning the freed
    /// variables to unassigned. Used both for conflict-driven backjumps and
    /// for restarts (undo to level 0).
    pub fn undo_to(&mut self, level: i32) {
        while let Some(&var) = self.trail.last() {
            if self.states[var].map(|s| s.level).unwrap_or(-1) <= level {
                break;
            }
            self.states[var] = None;
            self.trail.pop();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assign_and_undo() {
        let mut assignment = Assignment::new(3);
        assignment.assign(1, 0, None);
        assignment.assign(-2, 1, Some(0));
        assignment.assign(3, 2, None);
        assert_eq!(assignment.num_assigned(), 3);

        assignment.undo_to(1);
        assert_eq!(assignment.num_assigned(), 2);
        assert_eq!(assignment.value_of_var(3), None);
        assert_eq!(assignment.value_of(-2), Some(true));
    }

    #[test]
    fn trail_literal_reflects_polarity() {
        let mut assignment = Assignment::new(2);
        assignment.assign(-2, 0, None);
        assert_eq!(assignment.trail_literal(2), -2);
    }
}
