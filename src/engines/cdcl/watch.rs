use crate::cnf::Lit;

/// Watch lists: literal -> sequence of clause indices currently watching it
/// (spec.md §3). Keyed by literal directly via a dense offset (design note
/// §9: "2N+1 slots if zero-based over [-N, N]") rather than a hash map, for
/// O(1) lookup during BCP.
pub struct WatchLists {
    num_vars: usize,
    lists: Vec<Vec<usize>>,
}

impl WatchLists {
    pub fn new(num_vars: usize) -> Self {
        WatchLists { num_vars, lists: vec![Vec::new(); 2 * num_vars + 1] }
    }

    fn offset(&self, lit: Lit) -> usize {
        (lit + self.num_vars as i32) as usize
    }

    pub fn add(&mut self, lit: Lit, clause_idx: usize) {
        let offset = self.offset(lit);
        self.lists[offset].push(clause_idx);
    }

    pub fn remove(&mut self, lit: Lit, clause_idx: usize) {
        let offset = self.offset(lit);
        if let Some(pos) = self.lists[offset].iter().position(|&c| c == clause_idx) {
            self.lists[offset].swap_remove(pos);
        }
    }

    pub fn get(&self, lit: Lit) -> Vec<usize> {
        self.lists[self.offset(lit)].clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_remove_roundtrip() {
        let mut watches = WatchLists::new(4);
        watches.add(-2, 0);
        watches.add(-2, 1);
        assert_eq!(watches.get(-2), vec![0, 1]);
        watches.remove(-2, 0);
        assert_eq!(watches.get(-2), vec![1]);
    }
}
