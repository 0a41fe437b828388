pub mod arc;
pub mod rotate;
