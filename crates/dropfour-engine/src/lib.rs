pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("point is outside the board")]
    OutOfBounds,
    #[display("cell is already occupied")]
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("input stream closed")]
pub struct InputClosed;
