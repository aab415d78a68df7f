pub mod avcan;
pub mod handler;
