pub mod art;
pub mod plane;
