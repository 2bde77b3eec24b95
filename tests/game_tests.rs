use gunner::{run_game, Referee, Shooter, FLEET};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn driven_game_completes_and_accounts_for_every_shot() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut referee = Referee::new(10, 10).unwrap();
    referee.place_random_fleet(&mut rng, &FLEET).unwrap();
    let mut shooter = Shooter::new(10, 10, &FLEET).unwrap();

    let report = run_game(&mut shooter, &mut referee, 100).unwrap();
    assert!(report.complete);
    assert!(referee.all_sunk());
    // every non-miss shot hit a distinct segment of the 20-cell fleet
    assert_eq!(report.shots, report.misses + 20);
}

#[test]
fn shot_limit_cuts_the_game_short() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut referee = Referee::new(10, 10).unwrap();
    referee.place_random_fleet(&mut rng, &FLEET).unwrap();
    let mut shooter = Shooter::new(10, 10, &FLEET).unwrap();

    let report = run_game(&mut shooter, &mut referee, 5).unwrap();
    assert!(!report.complete);
    assert_eq!(report.shots, 5);
}
