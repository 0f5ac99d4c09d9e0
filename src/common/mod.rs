pub mod context;
pub mod db;
pub mod env;
pub mod error;
pub mod ids;
pub mod init;
pub mod state;

#[cfg(test)]
pub mod testing;
