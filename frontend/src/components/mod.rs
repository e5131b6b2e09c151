pub mod card;
pub mod fade_in;
pub mod nav_bar;
pub mod portfolio;
pub mod profile_header;
pub mod section_content;

pub use portfolio::Portfolio;
