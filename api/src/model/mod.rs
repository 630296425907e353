pub mod club;
pub mod club_event;
pub mod session;
pub mod user;
