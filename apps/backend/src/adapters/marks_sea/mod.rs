//! SeaORM adapter for marks.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
    Unchanged,
};

use crate::entities::marks;

pub mod dto;

pub use dto::{MarkCreate, MarkUpdate};

/// Insert a mark. A second mark for the same answer violates `marks.answer_id` uniqueness.
pub async fn create_mark<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MarkCreate,
) -> Result<marks::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mark = marks::ActiveModel {
        id: NotSet,
        answer_id: Set(dto.answer_id),
        tutor_id: Set(dto.tutor_id),
        score: Set(dto.score),
        feedback: Set(dto.feedback),
        created_at: Set(now),
        updated_at: Set(now),
    };

    mark.insert(conn).await
}

pub async fn find_mark_by_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    answer_id: i64,
) -> Result<Option<marks::Model>, sea_orm::DbErr> {
    marks::Entity::find()
        .filter(marks::Column::AnswerId.eq(answer_id))
        .one(conn)
        .await
}

pub async fn update_mark<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MarkUpdate,
) -> Result<marks::Model, sea_orm::DbErr> {
    let mark = marks::ActiveModel {
        id: Unchanged(dto.id),
        answer_id: NotSet,
        tutor_id: NotSet,
        score: dto.score.map_or(NotSet, Set),
        feedback: dto.feedback.map_or(NotSet, Set),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    mark.update(conn).await
}
