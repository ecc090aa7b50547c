use thiserror::Error;

/// Errors raised while building or advancing a game session
///
/// Wrong guesses and the end of a session are normal outcomes and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The word pool is empty")]
    EmptyPool,
    #[error("The word pool has {available} unique words but a session needs {required}")]
    PoolTooSmall { available: usize, required: usize },
    #[error("Every word in the pool has already been used this session")]
    PoolExhausted,
    #[error("Invalid game rules: {0}")]
    InvalidRules(&'static str),
}
