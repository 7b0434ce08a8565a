pub mod collection;
pub mod fallback;
pub mod health;
