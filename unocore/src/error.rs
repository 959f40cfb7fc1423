use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("The game is over")]
    GameOver,
    #[error("A colour must be chosen for the wild card first")]
    ColorSelectionPending,
    #[error("There is no wild card waiting for a colour")]
    NoColorSelectionPending,
    #[error("The deck ran out before the opening card could be turned over")]
    NoStartingCard,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
