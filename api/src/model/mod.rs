pub mod auth;
pub mod reservation;
pub mod resource;
pub mod room;
pub mod site;
pub mod user;
