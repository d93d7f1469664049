mod apps;
mod boot;
mod desktop;
mod matrix;
mod taskbar;
mod window_frame;

pub use desktop::Desktop;
