pub mod catalog;
pub mod locale;
pub mod money;
pub mod product;
pub mod purchase;
pub mod store;
pub mod user;
