//! This crate contains the shared site UI and the page interaction controller.

pub mod config;
pub use config::{use_site_config, SiteConfig};

pub mod dom;

mod i18n;
pub use i18n::{toggle_aria_label, Lang, LocalizationSwitcher, SwitchMode};

mod nav;
pub use nav::NavDisclosure;

mod reveal;
pub use reveal::{visible_fraction, Intersection, RevealMonitor, RevealOptions};

mod anchor;
pub use anchor::{fragment_id, scroll_destination, AnchorNavigator, AnchorOutcome};

mod controller;
pub use controller::{Action, Binding, InteractionController};

#[cfg(target_arch = "wasm32")]
mod live;

mod interactions;
pub use interactions::use_interactions;

pub mod content;

mod theme;
pub use theme::SiteTheme;

mod header;
pub use header::SiteHeader;

mod hero;
pub use hero::Hero;

mod sections;
pub use sections::{About, Contact, Services, SiteFooter};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
