pub mod common;
pub mod health;
pub mod media;
pub mod post;
pub mod subreddit;
pub mod user;
