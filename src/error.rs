/// Errors surfaced by the game core
///
/// Contract violations (undoing a stale move, searching a finished game) are
/// caller bugs and are surfaced by debug assertions instead of a variant here.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A drop was attempted into a column with no open slot
    #[error("column {0} is full")]
    ColumnFull(usize),

    /// A difficulty tier outside the supported range was requested
    #[error("invalid difficulty {0}, expected a tier between 1 and 5")]
    InvalidDifficulty(u8),

    /// A move was requested on a board with no open column
    #[error("no legal move, the board is full")]
    BoardFull,
}
