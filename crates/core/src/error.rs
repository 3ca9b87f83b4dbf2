use crate::Coordinate;
use thiserror::Error;

/// Contract violations that the hex algebra can report. A missing tile is
/// never an error, lookups return `None` for that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum HexError {
    /// A coordinate delta was treated as a direction, but it isn't one of the
    /// six unit offsets. This happens when asking for the direction between
    /// two tiles that aren't adjacent (or are the same tile).
    #[error("{offset} is not a unit offset of any hex direction")]
    InvalidDirection { offset: Coordinate },
}
