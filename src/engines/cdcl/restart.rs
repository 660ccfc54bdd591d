/// Geometric restart schedule (spec.md §4.5 / §9): the conflict budget
/// before the next restart starts at `base` and doubles every time it is
/// hit. Grounded on `data_structures::RestartData::update_conflicts_until_restart`,
/// simplified to pure doubling (no Luby sequence) to match
/// `original_source/sat_solver.py::cdcl_solver`'s `next_restart *= 2`.
pub struct RestartSchedule {
    threshold: u64,
}

impl RestartSchedule {
    pub fn new(base: u64) -> Self {
        RestartSchedule { threshold: base.max(1) }
    }

    pub fn should_restart(&self, conflicts: u64) -> bool {
        conflicts >= self.threshold
    }

    pub fn bump(&mut self) {
        self.threshold *= 2;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn doubles_threshold_on_bump() {
        let mut schedule = RestartSchedule::new(4);
        assert!(!schedule.should_restart(3));
        assert!(schedule.should_restart(4));
        schedule.bump();
        assert!(!schedule.should_restart(4));
        assert!(schedule.should_restart(8));
    }
}
