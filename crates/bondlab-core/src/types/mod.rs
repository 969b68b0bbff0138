//! Domain types shared by the pricing crates.

mod date;
mod frequency;

pub use date::Date;
pub use frequency::Frequency;
