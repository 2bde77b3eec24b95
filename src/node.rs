#![cfg(feature = "std")]

use crate::common::NextShot;
use crate::protocol::Command;
use crate::shooter::Shooter;
use crate::transport::Transport;

/// Serves the shooter over a transport. One node outlives many games: each
/// `Init` discards the previous engine, and an engine error ends only the
/// game it happened in, never the process.
pub struct ShooterNode {
    transport: Box<dyn Transport>,
    shooter: Option<Shooter>,
}

impl ShooterNode {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            shooter: None,
        }
    }

    /// Process commands until the referee closes the stream.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while let Some(cmd) = self.transport.recv().await? {
            match cmd {
                Command::Init {
                    width,
                    height,
                    sizes,
                } => {
                    self.shooter = None;
                    match Shooter::new(width, height, &sizes) {
                        Ok(shooter) => match shooter.first_shot() {
                            Ok(shot) => {
                                self.shooter = Some(shooter);
                                self.transport.send(shot).await?;
                            }
                            Err(e) => log::error!("no opening shot: {}", e),
                        },
                        Err(e) => log::error!("rejected Init: {}", e),
                    }
                }
                Command::Report { at, outcome } => {
                    let next = match self.shooter.as_mut() {
                        Some(shooter) => shooter.report(at, outcome),
                        None => {
                            log::warn!("outcome report with no game in progress");
                            continue;
                        }
                    };
                    match next {
                        Ok(NextShot::Fire(shot)) => self.transport.send(shot).await?,
                        Ok(NextShot::GameOver) => {
                            log::info!("all ships sunk, awaiting next game");
                            self.shooter = None;
                        }
                        Err(e) => {
                            log::error!("targeting failed: {}", e);
                            self.shooter = None;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
