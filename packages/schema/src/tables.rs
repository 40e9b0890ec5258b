use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sea_orm_migration::sea_query::extension::postgres::{Type as PgType, TypeCreateStatement};
use sea_orm_migration::sea_query::{
    ColumnDef, Expr, ForeignKeyAction, Index, IndexCreateStatement, Table, TableCreateStatement,
};

// ----- Iden enums for tables & columns -----
#[derive(Iden, Clone, Copy)]
pub(crate) enum Modules {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub(crate) enum StudyManuals {
    Table,
    Id,
    ModuleId,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub(crate) enum Questions {
    Table,
    Id,
    ModuleId,
    Section,
    Title,
    QuestionText,
    MarkingSchema,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub(crate) enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Fullname,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub(crate) enum Answers {
    Table,
    Id,
    QuestionId,
    StudentId,
    AnswerText,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub(crate) enum Marks {
    Table,
    Id,
    AnswerId,
    TutorId,
    Score,
    Feedback,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
enum UserRoleEnum {
    #[iden = "user_role"]
    Type,
}

#[derive(Iden, Clone, Copy)]
enum QuestionSectionEnum {
    #[iden = "question_section"]
    Type,
}

pub(crate) const USER_ROLE_VALUES: [&str; 4] = ["superadmin", "admin", "tutor", "student"];
pub(crate) const QUESTION_SECTION_VALUES: [&str; 2] = ["A", "B"];

pub(crate) const MARK_SCORE_MIN: i32 = 0;
pub(crate) const MARK_SCORE_MAX: i32 = 100;

fn id_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn timestamp_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

/// Postgres gets the native enum type; SQLite stores text guarded by a CHECK.
fn enum_col<C, T>(backend: DatabaseBackend, col: C, ty: T, values: &[&'static str]) -> ColumnDef
where
    C: Iden + Copy + 'static,
    T: Iden + 'static,
{
    let mut def = ColumnDef::new(col);
    match backend {
        DatabaseBackend::Postgres => {
            def.custom(ty);
        }
        _ => {
            def.string()
                .check(Expr::col(col).is_in(values.iter().copied()));
        }
    }
    def.not_null().to_owned()
}

async fn enum_exists(manager: &SchemaManager<'_>, enum_name: &str) -> Result<bool, DbErr> {
    let result = manager
        .get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT 1 FROM pg_type WHERE typname = $1",
            [enum_name.into()],
        ))
        .await?;
    Ok(result.is_some())
}

/// Postgres enum types, as `(type name, statement)`.
pub(crate) fn enum_type_statements() -> [(&'static str, TypeCreateStatement); 2] {
    [
        (
            "user_role",
            PgType::create()
                .as_enum(UserRoleEnum::Type)
                .values(USER_ROLE_VALUES)
                .to_owned(),
        ),
        (
            "question_section",
            PgType::create()
                .as_enum(QuestionSectionEnum::Type)
                .values(QUESTION_SECTION_VALUES)
                .to_owned(),
        ),
    ]
}

pub(crate) async fn create_enum_types(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    match manager.get_database_backend() {
        DatabaseBackend::Postgres => {
            for (name, stmt) in enum_type_statements() {
                if !enum_exists(manager, name).await? {
                    manager.create_type(stmt).await?;
                }
            }
            Ok(())
        }
        // stored as TEXT + CHECK
        DatabaseBackend::Sqlite => Ok(()),
        _ => Err(DbErr::Custom("Unsupported database backend".into())),
    }
}

/// Every table, parents first.
pub(crate) fn table_statements(backend: DatabaseBackend) -> Vec<TableCreateStatement> {
    vec![
        // modules
        Table::create()
            .table(Modules::Table)
            .if_not_exists()
            .col(id_col(Modules::Id))
            .col(ColumnDef::new(Modules::Name).string().not_null())
            .col(ColumnDef::new(Modules::Description).text().not_null())
            .col(timestamp_col(Modules::CreatedAt))
            .col(timestamp_col(Modules::UpdatedAt))
            .to_owned(),
        // study_manuals
        Table::create()
            .table(StudyManuals::Table)
            .if_not_exists()
            .col(id_col(StudyManuals::Id))
            .col(
                ColumnDef::new(StudyManuals::ModuleId)
                    .big_integer()
                    .not_null(),
            )
            .col(ColumnDef::new(StudyManuals::Content).text().not_null())
            .col(timestamp_col(StudyManuals::CreatedAt))
            .col(timestamp_col(StudyManuals::UpdatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_study_manuals_module_id")
                    .from(StudyManuals::Table, StudyManuals::ModuleId)
                    .to(Modules::Table, Modules::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned(),
        // questions
        Table::create()
            .table(Questions::Table)
            .if_not_exists()
            .col(id_col(Questions::Id))
            .col(ColumnDef::new(Questions::ModuleId).big_integer().not_null())
            .col(enum_col(
                backend,
                Questions::Section,
                QuestionSectionEnum::Type,
                &QUESTION_SECTION_VALUES,
            ))
            .col(ColumnDef::new(Questions::Title).string().not_null())
            .col(ColumnDef::new(Questions::QuestionText).text().not_null())
            .col(ColumnDef::new(Questions::MarkingSchema).text().not_null())
            .col(timestamp_col(Questions::CreatedAt))
            .col(timestamp_col(Questions::UpdatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_questions_module_id")
                    .from(Questions::Table, Questions::ModuleId)
                    .to(Modules::Table, Modules::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned(),
        // users
        Table::create()
            .table(Users::Table)
            .if_not_exists()
            .col(id_col(Users::Id))
            .col(
                ColumnDef::new(Users::Email)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Users::PasswordHash).string().not_null())
            .col(ColumnDef::new(Users::Fullname).string().not_null())
            .col(enum_col(
                backend,
                Users::Role,
                UserRoleEnum::Type,
                &USER_ROLE_VALUES,
            ))
            .col(timestamp_col(Users::CreatedAt))
            .col(timestamp_col(Users::UpdatedAt))
            .to_owned(),
        // answers
        Table::create()
            .table(Answers::Table)
            .if_not_exists()
            .col(id_col(Answers::Id))
            .col(ColumnDef::new(Answers::QuestionId).big_integer().not_null())
            .col(ColumnDef::new(Answers::StudentId).big_integer().not_null())
            .col(ColumnDef::new(Answers::AnswerText).text().not_null())
            .col(timestamp_col(Answers::CreatedAt))
            .col(timestamp_col(Answers::UpdatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_answers_question_id")
                    .from(Answers::Table, Answers::QuestionId)
                    .to(Questions::Table, Questions::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_answers_student_id")
                    .from(Answers::Table, Answers::StudentId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned(),
        // marks: one per answer, score bounded by check
        Table::create()
            .table(Marks::Table)
            .if_not_exists()
            .col(id_col(Marks::Id))
            .col(
                ColumnDef::new(Marks::AnswerId)
                    .big_integer()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Marks::TutorId).big_integer().not_null())
            .col(
                ColumnDef::new(Marks::Score).integer().not_null().check(
                    Expr::col(Marks::Score)
                        .gte(MARK_SCORE_MIN)
                        .and(Expr::col(Marks::Score).lte(MARK_SCORE_MAX)),
                ),
            )
            .col(ColumnDef::new(Marks::Feedback).text().not_null())
            .col(timestamp_col(Marks::CreatedAt))
            .col(timestamp_col(Marks::UpdatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_marks_answer_id")
                    .from(Marks::Table, Marks::AnswerId)
                    .to(Answers::Table, Answers::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_marks_tutor_id")
                    .from(Marks::Table, Marks::TutorId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned(),
    ]
}

pub(crate) async fn create_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for stmt in table_statements(manager.get_database_backend()) {
        manager.create_table(stmt).await?;
    }
    Ok(())
}

pub(crate) fn index_statements() -> [IndexCreateStatement; 5] {
    [
        Index::create()
            .if_not_exists()
            .name("ix_study_manuals_module_id")
            .table(StudyManuals::Table)
            .col(StudyManuals::ModuleId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("ix_questions_module_id")
            .table(Questions::Table)
            .col(Questions::ModuleId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("ix_answers_question_id")
            .table(Answers::Table)
            .col(Answers::QuestionId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("ix_answers_student_id")
            .table(Answers::Table)
            .col(Answers::StudentId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("ix_marks_tutor_id")
            .table(Marks::Table)
            .col(Marks::TutorId)
            .to_owned(),
    ]
}

pub(crate) async fn create_indexes(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for stmt in index_statements() {
        manager.create_index(stmt).await?;
    }
    Ok(())
}
