use std::collections::HashSet;

use gunner::{Cell, Coord, NextShot, Referee, Shooter, ShotOutcome, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn seeded_referee(seed: u64) -> Referee {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut referee = Referee::new(10, 10).unwrap();
    referee.place_random_fleet(&mut rng, &FLEET).unwrap();
    referee
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every shot lands on the board, no cell is ever shot twice, and the
    /// whole fleet goes down before the board runs out of cells.
    #[test]
    fn full_games_stay_legal_and_finish(seed in any::<u64>()) {
        let mut referee = seeded_referee(seed);
        let mut shooter = Shooter::new(10, 10, &FLEET).unwrap();

        let mut fired = HashSet::new();
        let mut target = shooter.first_shot().unwrap();
        for _ in 0..100 {
            prop_assert!((0..10).contains(&target.x) && (0..10).contains(&target.y));
            prop_assert!(fired.insert(target), "repeated shot at {}", target);

            let outcome = referee.shot(target);
            let next = shooter.report(target, outcome).unwrap();

            match outcome {
                ShotOutcome::Wound => prop_assert!(shooter.is_engaging()),
                ShotOutcome::Kill => {
                    prop_assert!(!shooter.is_engaging());
                    // the sunk ship's surroundings are all accounted for
                    for dy in -1..=1 {
                        for dx in -1..=1 {
                            let n = target + Coord::new(dx, dy);
                            if (0..10).contains(&n.x) && (0..10).contains(&n.y) {
                                prop_assert!(shooter.board().at(n) != Cell::Empty);
                            }
                        }
                    }
                }
                ShotOutcome::Miss => {}
            }

            match next {
                NextShot::Fire(next) => target = next,
                NextShot::GameOver => {
                    prop_assert!(referee.all_sunk());
                    return Ok(());
                }
            }
        }
        prop_assert!(false, "fleet not sunk within the shot limit");
    }

    /// A cell that has been marked never reads back as unknown.
    #[test]
    fn knowledge_is_monotonic(seed in any::<u64>()) {
        let mut referee = seeded_referee(seed);
        let mut shooter = Shooter::new(10, 10, &FLEET).unwrap();

        let mut known = HashSet::new();
        let mut target = shooter.first_shot().unwrap();
        for _ in 0..100 {
            let outcome = referee.shot(target);
            let next = shooter.report(target, outcome).unwrap();

            for &c in &known {
                prop_assert!(shooter.board().at(c) != Cell::Empty);
            }
            for y in 0..10 {
                for x in 0..10 {
                    let c = Coord::new(x, y);
                    if shooter.board().at(c) != Cell::Empty {
                        known.insert(c);
                    }
                }
            }

            match next {
                NextShot::Fire(next) => target = next,
                NextShot::GameOver => return Ok(()),
            }
        }
        prop_assert!(false, "fleet not sunk within the shot limit");
    }
}
