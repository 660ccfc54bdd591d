use rand::Rng;

use crate::cnf::{Clause, Cnf};

/// Generates a random 3-SAT instance at clause/variable ratio `alpha`, near
/// the phase transition when `alpha` is about 4.3 (spec.md §8). Grounded on
/// `original_source/make_benchmark.py::gen_random_3sat`.
pub fn gen_random_3sat(n: usize, alpha: f32, rng: &mut impl Rng) -> Cnf {
    let m = (alpha * n as f32) as usize;
    let mut clauses = Vec::with_capacity(m);
    for _ in 0..m {
        let mut vars = Vec::with_capacity(3);
        while vars.len() < 3 {
            let candidate = rng.gen_range(1..=n as i32);
            if !vars.contains(&candidate) {
                vars.push(candidate);
            }
        }
        let literals = vars
            .into_iter()
            .map(|v| if rng.gen_bool(0.5) { v } else { -v })
            .collect();
        clauses.push(Clause::new(literals));
    }
    Cnf::new(clauses)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_clause_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let cnf = gen_random_3sat(50, 4.3, &mut rng);
        assert_eq!(cnf.clauses.len(), (4.3 * 50.0) as usize);
        for clause in &cnf.clauses {
            assert_eq!(clause.len(), 3);
        }
    }

    #[test]
    fn deterministic_given_seed() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = gen_random_3sat(30, 4.3, &mut rng_a);
        let b = gen_random_3sat(30, 4.3, &mut rng_b);
        assert_eq!(a.clauses, b.clauses);
    }
}
