//! Section registry, active section tracking and static profile content for
//! the one-page profile. Target independent; the Yew frontend supplies the
//! DOM-backed [`Viewport`].

pub mod config;
pub mod error;
pub mod navigation;
pub mod profile;
pub mod section;
pub mod tracker;

pub use config::{EntranceConfig, LogLevel, PortfolioConfig, ScrollMode};
pub use error::{PortfolioError, PortfolioResult};
pub use navigation::{request_scroll, NavigationOutcome, Viewport};
pub use profile::{ContactInfo, ExperienceEntry, LanguageSkill, Profile, TextSpan, PROFILE};
pub use section::{Section, SectionId, SECTIONS};
pub use tracker::{ActiveSection, ScrollSample};
