//! Property-based tests for the elimination engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quotient_integers::Rational;
    use quotient_linalg::{FractionMatrix, LinearSystem};

    use crate::observer::{NoopObserver, RecordingObserver, Step};
    use crate::solver::solve_system;

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-6i64..6, 1i64..4).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = FractionMatrix> {
        prop::collection::vec(prop::collection::vec(small_rational(), cols), rows)
            .prop_map(|rows| FractionMatrix::from_rows(rows).unwrap())
    }

    /// `(A | A·x, x)` for a random `A` and `x`: always consistent.
    fn consistent_system() -> impl Strategy<Value = (LinearSystem, FractionMatrix)> {
        (1usize..5, 1usize..5)
            .prop_flat_map(|(rows, unknowns)| (matrix(rows, unknowns), matrix(unknowns, 1)))
            .prop_map(|(a, x)| {
                let b = a.mul(&x).unwrap();
                (LinearSystem::from_blocks(&a, &b).unwrap(), x)
            })
    }

    /// An arbitrary system, consistent or not.
    fn any_system() -> impl Strategy<Value = LinearSystem> {
        (1usize..5, 2usize..6)
            .prop_flat_map(|(rows, cols)| (matrix(rows, cols), 1..cols))
            .prop_map(|(m, width)| LinearSystem::new(m, width).unwrap())
    }

    fn apply(system: &mut LinearSystem, step: &Step) {
        match step {
            Step::RowAdd { src, dst, scalar } => system.add_scaled_row(*src, *dst, scalar),
            Step::RowScale { row, scalar } => system.scale_row(*row, scalar),
            Step::RowSwap { first, second } => system.swap_rows(*first, *second),
            Step::SystemState(_) | Step::Inconsistency { .. } => {}
        }
    }

    proptest! {
        #[test]
        fn consistent_systems_solve((mut s, x) in consistent_system()) {
            prop_assert!(solve_system(&mut s, &mut NoopObserver));
            // Row operations keep the solution set.
            prop_assert_eq!(s.coefficients().mul(&x).unwrap(), s.equality());
        }

        #[test]
        fn identity_reduction_recovers_solution((mut s, x) in consistent_system()) {
            prop_assert!(solve_system(&mut s, &mut NoopObserver));
            if let Some(solution) = s.unique_solution() {
                prop_assert_eq!(solution, x);
            }
        }

        #[test]
        fn zero_rows_end_up_at_the_bottom(mut s in any_system()) {
            if solve_system(&mut s, &mut NoopObserver) {
                let width = s.num_cols();
                let zero: Vec<bool> = (0..s.num_rows()).map(|r| s.is_zero_row(r, width)).collect();
                let first_zero = zero.iter().position(|&z| z).unwrap_or(zero.len());
                prop_assert!(zero[first_zero..].iter().all(|&z| z));
            }
        }

        #[test]
        fn observer_does_not_change_result(s in any_system()) {
            let mut silent = s.clone();
            let mut recorded = s;
            let mut recorder = RecordingObserver::new();
            let a = solve_system(&mut silent, &mut NoopObserver);
            let b = solve_system(&mut recorded, &mut recorder);
            prop_assert_eq!(a, b);
            prop_assert_eq!(silent, recorded);
        }

        #[test]
        fn replaying_operations_reproduces_snapshots(s in any_system()) {
            let mut replay = s.clone();
            let mut target = s;
            let mut recorder = RecordingObserver::new();
            solve_system(&mut target, &mut recorder);
            for step in recorder.steps() {
                apply(&mut replay, step);
                if let Step::SystemState(snapshot) = step {
                    prop_assert_eq!(&replay, snapshot);
                }
            }
        }

        #[test]
        fn inconsistency_is_reported_once(s in any_system()) {
            let mut target = s;
            let mut recorder = RecordingObserver::new();
            let solved = solve_system(&mut target, &mut recorder);
            let reports = recorder
                .steps()
                .iter()
                .filter(|step| matches!(step, Step::Inconsistency { .. }))
                .count();
            prop_assert_eq!(reports, usize::from(!solved));
            if !solved {
                let ends_with_report =
                    matches!(recorder.steps().last(), Some(Step::Inconsistency { .. }));
                prop_assert!(ends_with_report);
            }
        }
    }
}
