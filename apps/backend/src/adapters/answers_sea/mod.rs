//! SeaORM adapter for answers.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use crate::entities::answers;

pub mod dto;

pub use dto::{AnswerCreate, AnswerUpdate};

pub async fn create_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AnswerCreate,
) -> Result<answers::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let answer = answers::ActiveModel {
        id: NotSet,
        question_id: Set(dto.question_id),
        student_id: Set(dto.student_id),
        answer_text: Set(dto.answer_text),
        created_at: Set(now),
        updated_at: Set(now),
    };

    answer.insert(conn).await
}

pub async fn find_answer_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    answer_id: i64,
) -> Result<Option<answers::Model>, sea_orm::DbErr> {
    answers::Entity::find_by_id(answer_id).one(conn).await
}

pub async fn find_answers_by_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i64,
) -> Result<Vec<answers::Model>, sea_orm::DbErr> {
    answers::Entity::find()
        .filter(answers::Column::QuestionId.eq(question_id))
        .order_by(answers::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn update_answer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AnswerUpdate,
) -> Result<answers::Model, sea_orm::DbErr> {
    let answer = answers::ActiveModel {
        id: Unchanged(dto.id),
        question_id: NotSet,
        student_id: NotSet,
        answer_text: Set(dto.answer_text),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    answer.update(conn).await
}
