pub mod club;
pub mod club_event;
pub mod health;
pub mod session;
pub mod user;
