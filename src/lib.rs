pub mod bootstrap;
pub mod config;
pub mod dto;
pub mod entity;
pub mod errors;
pub mod handlers;
pub mod store;

pub use bootstrap::{connect_and_migrate, cors, init_tracing, load_dotenv};
pub use config::AppConfig;
pub use errors::AppError;
pub use store::Store;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};

use handlers::{cards, decks, games, players, rounds};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::invalid_shape(err.to_string()).into()),
    )
    .service(handlers::hello)
    .service(cards::create_card)
    .service(cards::get_cards)
    .service(cards::get_card)
    .service(cards::update_card)
    .service(cards::delete_card)
    .service(players::create_player)
    .service(players::get_players)
    .service(players::get_player)
    .service(players::update_player)
    .service(players::delete_player)
    .service(games::create_game)
    .service(games::get_games)
    .service(games::get_game)
    .service(games::update_game)
    .service(games::delete_game)
    .service(decks::create_deck)
    .service(decks::get_decks)
    .service(decks::get_deck)
    .service(decks::update_deck)
    .service(decks::delete_deck)
    .service(rounds::create_round)
    .service(rounds::get_rounds)
    .service(rounds::get_round)
    .service(rounds::update_round)
    .service(rounds::delete_round);
}

/// The application with its shared store and configuration, before any
/// middleware is applied.
pub fn app(
    store: Store,
    config: AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(store))
        .app_data(web::Data::new(config))
        .configure(configure_routes)
}
