pub mod card;
pub mod deck;
pub mod game;
pub mod player;
pub mod round;

pub use card::Entity as Cards;
pub use deck::Entity as Decks;
pub use game::Entity as Games;
pub use player::Entity as Players;
pub use round::Entity as Rounds;
