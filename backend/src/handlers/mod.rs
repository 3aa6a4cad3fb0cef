pub mod admin;
pub mod blog;
pub mod calendar;
pub mod contact;
pub mod donations;
pub mod events;
pub mod health;
