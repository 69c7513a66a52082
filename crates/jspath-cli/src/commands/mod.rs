pub mod dump;
pub mod encode;
pub mod loader;
pub mod mutable;
pub mod print;
pub mod wire;
