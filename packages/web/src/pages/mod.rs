//! Pages

mod home;

pub use home::*;
