use crate::geom::Coord;
use crate::protocol::Command;

/// A session with the referee, whatever carries the bytes: commands come
/// in, shots go out.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Next command, or `None` once the referee closes the stream.
    async fn recv(&mut self) -> anyhow::Result<Option<Command>>;
    /// Reply with the next shot.
    async fn send(&mut self, shot: Coord) -> anyhow::Result<()>;
}

pub mod in_memory;
pub mod stdio;
