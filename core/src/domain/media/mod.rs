pub mod entities;
pub mod port;
