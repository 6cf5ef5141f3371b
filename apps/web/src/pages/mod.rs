//! Page Components

mod home;

pub use home::Home;
