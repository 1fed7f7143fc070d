pub mod add;
pub mod codec;
pub mod config;
pub mod del;
pub mod duration;
pub mod edit;
pub mod export;
pub mod games;
pub mod history;
pub mod import;
pub mod log;
pub mod transfer;
pub mod validate;
