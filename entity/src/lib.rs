pub mod prelude;

pub mod application;
