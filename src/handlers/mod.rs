pub mod home;
pub mod health;

pub use home::*;
pub use health::*;
