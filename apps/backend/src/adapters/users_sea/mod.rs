//! SeaORM adapter for users.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
    Unchanged,
};

use crate::entities::users;

pub mod dto;

pub use dto::{UserCreate, UserUpdate};

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        fullname: Set(dto.fullname),
        role: Set(dto.role),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_user_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn update_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserUpdate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: Unchanged(dto.id),
        email: dto.email.map_or(NotSet, Set),
        password_hash: dto.password_hash.map_or(NotSet, Set),
        fullname: dto.fullname.map_or(NotSet, Set),
        role: dto.role.map_or(NotSet, Set),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };
    user_active.update(conn).await
}

/// Fails with a foreign-key error while the user still owns answers or given marks.
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<(), sea_orm::DbErr> {
    users::Entity::delete_by_id(user_id).exec(conn).await?;
    Ok(())
}
