pub mod entities;
pub mod reqwest;
