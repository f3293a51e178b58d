use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::SiteConfig;

#[cfg(target_arch = "wasm32")]
type Installed = crate::live::LiveInteractions;
#[cfg(not(target_arch = "wasm32"))]
type Installed = ();

/// Install the page interaction controller once the calling page is mounted.
///
/// The controller lives as long as the component; unmounting detaches it.
pub fn use_interactions() {
    let config = crate::use_site_config();
    let installed = use_hook(|| Rc::new(RefCell::new(None::<Installed>)));

    use_effect(move || {
        let mut slot = installed.borrow_mut();
        if slot.is_none() {
            *slot = install(&config);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn install(config: &SiteConfig) -> Option<Installed> {
    crate::live::install(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: &SiteConfig) -> Option<Installed> {
    tracing::debug!(
        "no browser DOM on this target, {:?} switcher not installed",
        config.languages.switcher
    );
    None
}
