pub mod entities;
pub mod mongo;
