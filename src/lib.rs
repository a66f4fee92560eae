pub mod angle;
pub mod point;
pub mod vector;
