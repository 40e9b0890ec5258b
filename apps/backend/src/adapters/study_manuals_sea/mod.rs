//! SeaORM adapter for study manuals.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use crate::entities::study_manuals;

pub mod dto;

pub use dto::{StudyManualCreate, StudyManualUpdate};

pub async fn create_study_manual<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StudyManualCreate,
) -> Result<study_manuals::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let manual = study_manuals::ActiveModel {
        id: NotSet,
        module_id: Set(dto.module_id),
        content: Set(dto.content),
        created_at: Set(now),
        updated_at: Set(now),
    };

    manual.insert(conn).await
}

pub async fn find_study_manual_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    manual_id: i64,
) -> Result<Option<study_manuals::Model>, sea_orm::DbErr> {
    study_manuals::Entity::find_by_id(manual_id).one(conn).await
}

/// All manuals of a module, oldest first.
pub async fn find_study_manuals_by_module<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    module_id: i64,
) -> Result<Vec<study_manuals::Model>, sea_orm::DbErr> {
    study_manuals::Entity::find()
        .filter(study_manuals::Column::ModuleId.eq(module_id))
        .order_by(study_manuals::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn update_study_manual<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StudyManualUpdate,
) -> Result<study_manuals::Model, sea_orm::DbErr> {
    let manual = study_manuals::ActiveModel {
        id: Unchanged(dto.id),
        module_id: NotSet,
        content: Set(dto.content),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    manual.update(conn).await
}
