pub mod actions;
pub mod builder;
pub mod layout;
pub mod resolve;
pub mod router;
