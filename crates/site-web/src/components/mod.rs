//! UI Components

mod announcement_bar;
mod code;
mod hero;

pub use announcement_bar::AnnouncementBar;
pub use code::Code;
pub use hero::Hero;
