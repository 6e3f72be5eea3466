pub mod config_io;
pub mod script_io;
