pub mod emit;
pub mod identity;
