#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::geom::Coord;
use crate::protocol::Command;
use crate::transport::Transport;

/// Queue-backed transport for tests, paired with a [`RefereeLink`] playing
/// the referee side.
pub struct InMemoryTransport {
    commands: Arc<Mutex<VecDeque<Command>>>,
    shots: Arc<Mutex<VecDeque<Coord>>>,
}

/// Test-side handle feeding commands in and draining shots out.
pub struct RefereeLink {
    commands: Arc<Mutex<VecDeque<Command>>>,
    shots: Arc<Mutex<VecDeque<Coord>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, RefereeLink) {
        let commands = Arc::new(Mutex::new(VecDeque::new()));
        let shots = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                commands: commands.clone(),
                shots: shots.clone(),
            },
            RefereeLink { commands, shots },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn recv(&mut self) -> anyhow::Result<Option<Command>> {
        loop {
            if let Some(cmd) = {
                let mut queue = self.commands.lock().unwrap();
                queue.pop_front()
            } {
                return Ok(Some(cmd));
            }
            if Arc::strong_count(&self.commands) == 1 {
                return Ok(None);
            }
            yield_now().await;
        }
    }

    async fn send(&mut self, shot: Coord) -> anyhow::Result<()> {
        let mut queue = self.shots.lock().unwrap();
        queue.push_back(shot);
        Ok(())
    }
}

impl RefereeLink {
    /// Queue a command for the node.
    pub fn send(&self, cmd: Command) {
        self.commands.lock().unwrap().push_back(cmd);
    }

    /// Wait for the node's next shot.
    pub async fn recv_shot(&self) -> anyhow::Result<Coord> {
        loop {
            if let Some(shot) = {
                let mut queue = self.shots.lock().unwrap();
                queue.pop_front()
            } {
                return Ok(shot);
            }
            if Arc::strong_count(&self.shots) == 1 {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}
