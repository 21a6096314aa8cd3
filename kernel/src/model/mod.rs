pub mod auth;
pub mod id;
pub mod reservation;
pub mod resource;
pub mod role;
pub mod room;
pub mod site;
pub mod user;
