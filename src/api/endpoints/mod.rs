pub mod chat;
pub mod health;
pub mod interactions;
pub mod plants;
pub mod symptoms;
