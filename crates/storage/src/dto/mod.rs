pub mod common;
pub mod contact;
pub mod footprint;
pub mod game;
