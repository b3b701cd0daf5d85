pub mod card_request;
pub mod deck_request;
pub mod deck_view;
pub mod game_request;
pub mod game_view;
pub mod payload;
pub mod player_request;
pub mod round_request;

pub use deck_view::DeckView;
pub use game_view::GameView;
pub use payload::Payload;
