pub mod calendar;
pub mod event_card;
pub mod footer;
pub mod header;
