//! SeaORM adapter for questions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use crate::entities::questions;

pub mod dto;

pub use dto::{QuestionCreate, QuestionUpdate};

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let question = questions::ActiveModel {
        id: NotSet,
        module_id: Set(dto.module_id),
        section: Set(dto.section),
        title: Set(dto.title),
        question_text: Set(dto.question_text),
        marking_schema: Set(dto.marking_schema),
        created_at: Set(now),
        updated_at: Set(now),
    };

    question.insert(conn).await
}

pub async fn find_question_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i64,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find_by_id(question_id).one(conn).await
}

/// Questions of a module ordered by section, then creation order.
pub async fn find_questions_by_module<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    module_id: i64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::ModuleId.eq(module_id))
        .order_by(questions::Column::Section, Order::Asc)
        .order_by(questions::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn update_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionUpdate,
) -> Result<questions::Model, sea_orm::DbErr> {
    let question = questions::ActiveModel {
        id: Unchanged(dto.id),
        module_id: NotSet,
        section: dto.section.map_or(NotSet, Set),
        title: dto.title.map_or(NotSet, Set),
        question_text: dto.question_text.map_or(NotSet, Set),
        marking_schema: dto.marking_schema.map_or(NotSet, Set),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    question.update(conn).await
}
