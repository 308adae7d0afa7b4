pub mod handlers;
pub mod routes;
pub mod search;
pub mod select;

pub use routes::create_router;
