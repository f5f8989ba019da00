pub mod board;
pub mod core;
pub mod game;
pub mod rendering;
pub mod ui;
pub mod wallet;
