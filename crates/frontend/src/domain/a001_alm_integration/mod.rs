pub mod bootstrap;
pub mod panels;
pub mod state;
pub mod tabs;
pub mod ui;
