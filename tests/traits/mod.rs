pub mod chain;
pub mod result_ext;
