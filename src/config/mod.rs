pub mod clients;
pub mod loader;
pub mod proc_loader;
pub mod settings;
