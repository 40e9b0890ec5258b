pub mod answers;
pub mod marks;
pub mod modules;
pub mod questions;
pub mod study_manuals;
pub mod users;

pub use answers::Entity as Answers;
pub use answers::Model as Answer;
pub use marks::Entity as Marks;
pub use marks::Model as Mark;
pub use modules::Entity as Modules;
pub use modules::Model as Module;
pub use questions::Entity as Questions;
pub use questions::Model as Question;
pub use questions::QuestionSection;
pub use study_manuals::Entity as StudyManuals;
pub use study_manuals::Model as StudyManual;
pub use users::Entity as Users;
pub use users::Model as User;
pub use users::UserRole;
