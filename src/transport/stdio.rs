#![cfg(feature = "std")]

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::geom::Coord;
use crate::protocol::{shot_line, Command};
use crate::transport::Transport;

/// Line transport over the process's stdin/stdout, the wire a tournament
/// referee speaks.
pub struct StdioTransport {
    reader: BufReader<Stdin>,
    writer: Stdout,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: tokio::io::stdout(),
        }
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for StdioTransport {
    async fn recv(&mut self) -> anyhow::Result<Option<Command>> {
        let mut line = String::new();
        loop {
            line.clear();
            let n = self
                .reader
                .read_line(&mut line)
                .await
                .map_err(|e| anyhow::anyhow!("Read error: {}", e))?;
            if n == 0 {
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(cmd) => return Ok(Some(cmd)),
                Err(e) => {
                    log::warn!("ignoring malformed command {:?}: {}", line.trim(), e);
                }
            }
        }
    }

    async fn send(&mut self, shot: Coord) -> anyhow::Result<()> {
        let mut out = shot_line(shot);
        out.push('\n');
        self.writer
            .write_all(out.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Write error: {}", e))?;
        self.writer
            .flush()
            .await
            .map_err(|e| anyhow::anyhow!("Write error: {}", e))?;
        Ok(())
    }
}
