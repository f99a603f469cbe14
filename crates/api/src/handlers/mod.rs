pub mod fold;
pub mod result;
