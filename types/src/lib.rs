pub mod error;
pub mod game;
pub mod player;
pub mod round;
pub mod score;

pub use error::ValidationError;
pub use game::{Game, GameStatus, DEFAULT_GAME_NAME, MIN_PLAYERS};
pub use player::Player;
pub use round::{Outcome, Round};
pub use score::Score;
