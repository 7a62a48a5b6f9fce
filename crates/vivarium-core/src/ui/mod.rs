pub mod options;
pub mod panel;
pub mod style;
pub mod tabs;
