//! Domain entities

pub mod task;
pub mod user;

pub use task::Task;
pub use user::User;
