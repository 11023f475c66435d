//! `SeaORM` entity definitions.

pub mod products;
pub mod users;
