use gunner::{run_game, Referee, Shooter, BOARD_HEIGHT, BOARD_WIDTH, FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut referee = Referee::new(BOARD_WIDTH, BOARD_HEIGHT).map_err(|e| anyhow::anyhow!(e))?;
    referee
        .place_random_fleet(&mut rng, &FLEET)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut shooter =
        Shooter::new(BOARD_WIDTH, BOARD_HEIGHT, &FLEET).map_err(|e| anyhow::anyhow!(e))?;

    let limit = (BOARD_WIDTH * BOARD_HEIGHT) as usize;
    let report = run_game(&mut shooter, &mut referee, limit).map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "seed": seed,
        "shots": report.shots,
        "misses": report.misses,
        "complete": report.complete,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
