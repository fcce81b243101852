pub mod entries;
pub mod health;
pub mod session;
pub mod vocabulary;
