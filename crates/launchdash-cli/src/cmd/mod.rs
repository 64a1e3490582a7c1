pub mod inspect;
pub mod pie;
pub mod scatter;
