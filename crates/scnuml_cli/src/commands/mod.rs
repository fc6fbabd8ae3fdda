pub mod diagram;
pub mod records;
pub mod tree;
