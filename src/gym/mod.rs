pub mod catch5;

pub use catch5::Catch5;
