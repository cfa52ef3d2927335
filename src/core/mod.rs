//! Pieces shared by both games: the seedable RNG and the console reader.

pub mod console;
pub mod rng;

pub use console::{Console, Reply};
pub use rng::GameRng;
