pub mod direct_messages;
pub mod messages;
pub mod models;
pub mod users;

pub use direct_messages::DirectMessageRepository;
pub use messages::MessageRepository;
pub use models::{DirectMessageRow, MessageRow, OnlineUser, User};
pub use users::UserRepository;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
