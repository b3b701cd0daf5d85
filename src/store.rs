use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder,
};

/// A persisted entity addressable by its integer primary key.
pub trait Table: EntityTrait {
    /// Resource name used in routes and error messages.
    const RESOURCE: &'static str;

    fn id_column() -> Self::Column;
}

/// Field-level changes merged into a loaded row before it is saved.
pub trait Patch<A> {
    fn apply(self, active: &mut A);
}

/// Shared handle over the relational store. Cloning is cheap: the underlying
/// connection is a pool.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert a new row; the store assigns the id.
    pub async fn create<A>(&self, active: A) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        active.insert(&self.db).await
    }

    pub async fn get_all<E: Table>(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().order_by_asc(E::id_column()).all(&self.db).await
    }

    pub async fn get_by_id<E>(&self, id: i32) -> Result<Option<E::Model>, DbErr>
    where
        E: Table,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Merge `patch` into the row with `id`. Only the columns the patch touches
    /// are written; `None` means no such row.
    pub async fn update_fields<E, P>(&self, id: i32, patch: P) -> Result<Option<E::Model>, DbErr>
    where
        E: Table,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        P: Patch<E::ActiveModel>,
    {
        let Some(current) = self.get_by_id::<E>(id).await? else {
            return Ok(None);
        };

        let mut active: E::ActiveModel = current.clone().into_active_model();
        patch.apply(&mut active);
        if !active.is_changed() {
            return Ok(Some(current));
        }

        active.update(&self.db).await.map(Some)
    }

    /// Delete by filter rather than by loaded row, so a missing id is not an error.
    pub async fn delete_by_id<E: Table>(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Point the foreign key `column` of every row in `ids` at `parent_id`.
/// Unknown ids are skipped silently, matching the unchecked foreign keys.
pub async fn attach<E, C>(
    conn: &C,
    column: E::Column,
    parent_id: i32,
    ids: &[i32],
) -> Result<u64, DbErr>
where
    E: Table,
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(0);
    }

    let result = E::update_many()
        .col_expr(column, Expr::value(parent_id))
        .filter(E::id_column().is_in(ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
