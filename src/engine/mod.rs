//! Adversarial round engine
//!
//! The engine never commits to a secret word. After every guess it splits the
//! remaining candidates into word families and keeps the one that leaves the
//! guesser the most uncertainty.

mod dictionary;
mod error;
pub mod family;
mod round;
pub mod selection;

pub use dictionary::Dictionary;
pub use error::EngineError;
pub use family::{Families, Family, partition};
pub use round::{GuessReport, RoundConfig, RoundEngine, RoundPhase, RoundState, RoundStatus};
pub use selection::{Ranking, Selection, rank, select};
