#![allow(dead_code)]

// tests/common/mod.rs
use backend::adapters::answers_sea::{self, AnswerCreate};
use backend::adapters::modules_sea::{self, ModuleCreate};
use backend::adapters::questions_sea::{self, QuestionCreate};
use backend::adapters::users_sea::{self, UserCreate};
use backend::entities::{Answer, Module, Question, QuestionSection, User, UserRole};
use backend::test_support::memory_state;
use backend::AppState;
use backend_test_support::unique_helpers::{unique_email, unique_str};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh in-memory state with the schema applied.
pub async fn fresh_state() -> AppState {
    memory_state().await.expect("bootstrap in-memory state")
}

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("state built with a database")
}

pub async fn seed_module<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Module, DbErr> {
    modules_sea::create_module(conn, ModuleCreate::new(unique_str("module"), "A test module")).await
}

pub async fn seed_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    role: UserRole,
) -> Result<User, DbErr> {
    users_sea::create_user(
        conn,
        UserCreate::new(unique_email("user"), "$argon2id$placeholder", "Test User", role),
    )
    .await
}

pub async fn seed_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    module_id: i64,
) -> Result<Question, DbErr> {
    questions_sea::create_question(
        conn,
        QuestionCreate::new(
            module_id,
            QuestionSection::A,
            unique_str("question"),
            "Explain ownership.",
            "Full marks for mentioning moves and borrows.",
        ),
    )
    .await
}

/// Module, question, student and one answer from that student.
pub struct Seeded {
    pub module: Module,
    pub question: Question,
    pub student: User,
    pub answer: Answer,
}

pub async fn seed_answer_chain<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Seeded, DbErr> {
    let module = seed_module(conn).await?;
    let question = seed_question(conn, module.id).await?;
    let student = seed_user(conn, UserRole::Student).await?;
    let answer = answers_sea::create_answer(
        conn,
        AnswerCreate::new(question.id, student.id, "Ownership moves values."),
    )
    .await?;

    Ok(Seeded {
        module,
        question,
        student,
        answer,
    })
}

/// Row count of `table`, via raw SQL so it does not depend on the entity layer.
pub async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await
        .expect("count query")
        .expect("count row");
    row.try_get("", "n").expect("count column")
}
