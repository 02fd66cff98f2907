pub mod config;
pub mod demo;
pub mod entities;
pub mod error;
pub mod printer;
