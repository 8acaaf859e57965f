//! Domain value types.

mod date;

pub use date::Date;
