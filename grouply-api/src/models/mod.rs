mod group;
mod member;

pub use group::*;
pub use member::*;

pub type Id = i32;
