pub mod draft;
pub mod player;
pub mod session;

pub use draft::SessionDraft;
pub use player::{MAX_PLAYER_NAME_LEN, PlayerRecord};
pub use session::{GameSession, fresh_id};
