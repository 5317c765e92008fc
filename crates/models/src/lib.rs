pub mod db;
pub mod task;
pub mod user;
