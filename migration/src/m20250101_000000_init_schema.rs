use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign-key columns are plain nullable integers: references are not
        // enforced, so rows may point at parents that do not (or no longer) exist.

        // Create game table
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Game::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create round table
        manager
            .create_table(
                Table::create()
                    .table(Round::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Round::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Round::Number).integer().not_null())
                    .col(ColumnDef::new(Round::Players).integer().null())
                    .to_owned(),
            )
            .await?;

        // Create deck table
        manager
            .create_table(
                Table::create()
                    .table(Deck::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deck::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deck::Shuffled).boolean().not_null().default(false))
                    .col(ColumnDef::new(Deck::GameId).integer().null())
                    .to_owned(),
            )
            .await?;

        // Create card table
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Card::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Card::Suit).string_len(50).null())
                    .col(ColumnDef::new(Card::Rank).string_len(50).null())
                    .col(ColumnDef::new(Card::Value).integer().not_null())
                    .col(ColumnDef::new(Card::DeckId).integer().null())
                    .col(ColumnDef::new(Card::IsDrawn).boolean().not_null().default(false))
                    .to_owned(),
            )
            .await?;

        // Create player table
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Player::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Player::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Player::Score).integer().null())
                    .col(ColumnDef::new(Player::IsWinner).boolean().not_null().default(false))
                    .col(ColumnDef::new(Player::RoundId).integer().null())
                    .col(ColumnDef::new(Player::GameId).integer().null())
                    .to_owned(),
            )
            .await?;

        // Indexes backing the nested game/deck projections
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deck_game_id")
                    .table(Deck::Table)
                    .col(Deck::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_card_deck_id")
                    .table(Card::Table)
                    .col(Card::DeckId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_player_game_id")
                    .table(Player::Table)
                    .col(Player::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_player_round_id")
                    .table(Player::Table)
                    .col(Player::RoundId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping a table drops its indexes with it
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Deck::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Round::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Round {
    Table,
    Id,
    Number,
    Players,
}

#[derive(DeriveIden)]
enum Deck {
    Table,
    Id,
    Shuffled,
    GameId,
}

#[derive(DeriveIden)]
enum Card {
    Table,
    Id,
    Suit,
    Rank,
    Value,
    DeckId,
    IsDrawn,
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    Name,
    Score,
    IsWinner,
    RoundId,
    GameId,
}
