use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use postdex_core::error::RepoError;

/// Generic PostgreSQL repository: insert and keyed lookup for one entity.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    /// Find a row by primary key.
    pub async fn find_one<ID>(&self, id: ID) -> Result<Option<E::Model>, RepoError>
    where
        E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    {
        E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    /// Insert a row, returning it with database-assigned values filled in.
    pub async fn insert(&self, active_model: E::ActiveModel) -> Result<E::Model, RepoError> {
        active_model.insert(&self.db).await.map_err(map_db_err)
    }
}

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}
