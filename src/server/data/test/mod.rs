mod application;
mod file_store;
