#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use gunner::{
    transport::stdio::StdioTransport, NextShot, Referee, Shooter, ShooterNode, BOARD_HEIGHT,
    BOARD_WIDTH, FLEET,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Serve the Init/Wound/Kill/Miss line protocol on stdin/stdout.
    Stdio,
    /// Play one game against the built-in referee, printing each exchange.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gunner::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stdio => {
            let mut node = ShooterNode::new(Box::new(StdioTransport::new()));
            node.run().await?;
        }
        Commands::Local { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut referee =
                Referee::new(BOARD_WIDTH, BOARD_HEIGHT).map_err(|e| anyhow::anyhow!(e))?;
            referee
                .place_random_fleet(&mut rng, &FLEET)
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut shooter =
                Shooter::new(BOARD_WIDTH, BOARD_HEIGHT, &FLEET).map_err(|e| anyhow::anyhow!(e))?;

            let limit = (BOARD_WIDTH * BOARD_HEIGHT) as usize;
            let mut target = shooter.first_shot().map_err(|e| anyhow::anyhow!(e))?;
            let mut shots = 0;
            loop {
                shots += 1;
                if shots > limit {
                    return Err(anyhow::anyhow!("fleet not sunk within {} shots", limit));
                }
                let outcome = referee.shot(target);
                println!("{:>3}. {} -> {:?}", shots, target, outcome);
                match shooter
                    .report(target, outcome)
                    .map_err(|e| anyhow::anyhow!(e))?
                {
                    NextShot::Fire(next) => target = next,
                    NextShot::GameOver => break,
                }
            }
            println!("All ships sunk in {} shots.", shots);
        }
    }
    Ok(())
}
