pub mod about;
pub mod admin;
pub mod donate;
pub mod home;
pub mod news;
pub mod not_found;
pub mod programs;
