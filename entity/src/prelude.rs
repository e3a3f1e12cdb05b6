pub use super::application::Entity as Application;
