pub mod console;
pub mod controller;
pub mod launcher;
