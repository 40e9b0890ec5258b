mod common;

use backend::adapters::modules_sea::{self, ModuleCreate};
use backend::adapters::questions_sea::{self, QuestionCreate};
use backend::entities::QuestionSection;
use backend::{with_txn, AppError, AppState};

#[tokio::test]
async fn commits_when_closure_succeeds() -> Result<(), AppError> {
    let state = common::fresh_state().await;

    let module = with_txn(&state, |txn| {
        Box::pin(async move {
            let module = modules_sea::create_module(txn, ModuleCreate::new("Txn", "ok")).await?;
            questions_sea::create_question(
                txn,
                QuestionCreate::new(module.id, QuestionSection::B, "t", "q", "m"),
            )
            .await?;
            Ok(module)
        })
    })
    .await?;

    let db = common::db(&state);
    assert!(modules_sea::find_module_by_id(db, module.id).await?.is_some());
    assert_eq!(common::count_rows(db, "questions").await, 1);
    Ok(())
}

#[tokio::test]
async fn rolls_back_when_closure_fails() -> Result<(), AppError> {
    let state = common::fresh_state().await;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            modules_sea::create_module(txn, ModuleCreate::new("Doomed", "rolled back")).await?;
            Err(AppError::internal("abort"))
        })
    })
    .await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
    assert_eq!(common::count_rows(common::db(&state), "modules").await, 0);
    Ok(())
}

#[tokio::test]
async fn constraint_failure_rolls_back_earlier_writes() -> Result<(), AppError> {
    let state = common::fresh_state().await;

    let result = with_txn(&state, |txn| {
        Box::pin(async move {
            modules_sea::create_module(txn, ModuleCreate::new("Partial", "x")).await?;
            // no module 424242: foreign-key violation
            questions_sea::create_question(
                txn,
                QuestionCreate::new(424_242, QuestionSection::A, "t", "q", "m"),
            )
            .await?;
            Ok(())
        })
    })
    .await;

    assert!(matches!(result, Err(AppError::Db { .. })));
    assert_eq!(common::count_rows(common::db(&state), "modules").await, 0);
    Ok(())
}

#[tokio::test]
async fn without_database_is_unavailable() {
    let state = AppState::new_without_db();

    let result = with_txn(&state, |_txn| Box::pin(async move { Ok(1) })).await;
    assert!(matches!(result, Err(AppError::DbUnavailable)));
}
