//! SeaORM adapter for modules.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set, Unchanged};

use crate::entities::modules;

pub mod dto;

pub use dto::{ModuleCreate, ModuleUpdate};

pub async fn create_module<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ModuleCreate,
) -> Result<modules::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let module = modules::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        created_at: Set(now),
        updated_at: Set(now),
    };

    module.insert(conn).await
}

pub async fn find_module_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    module_id: i64,
) -> Result<Option<modules::Model>, sea_orm::DbErr> {
    modules::Entity::find_by_id(module_id).one(conn).await
}

pub async fn update_module<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ModuleUpdate,
) -> Result<modules::Model, sea_orm::DbErr> {
    let module = modules::ActiveModel {
        id: Unchanged(dto.id),
        name: dto.name.map_or(NotSet, Set),
        description: dto.description.map_or(NotSet, Set),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    module.update(conn).await
}

/// Delete a module. Its questions and study manuals go with it (ON DELETE CASCADE).
/// Returns the number of rows removed from `modules`.
pub async fn delete_module<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    module_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = modules::Entity::delete_by_id(module_id).exec(conn).await?;
    Ok(res.rows_affected)
}
