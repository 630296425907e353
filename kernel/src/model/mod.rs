pub mod club;
pub mod club_event;
pub mod id;
pub mod role;
pub mod session;
pub mod user;
