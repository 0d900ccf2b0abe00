// Round logic: validation, scoring and the controller that ties them together

pub mod controller;
pub mod rejection;
pub mod scorer;
pub mod state;
pub mod validator;

pub use controller::{Game, Submission, FALLBACK_ROOT_WORD};
pub use rejection::Rejection;
pub use scorer::Scorer;
pub use state::GameState;
pub use validator::{WordValidator, MIN_WORD_LENGTH};
