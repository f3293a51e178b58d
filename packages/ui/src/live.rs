//! Wires an [`InteractionController`] to the browser: one click listener per
//! binding and an `IntersectionObserver` feeding the reveal monitor.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::web::WebDocument;
use crate::{Binding, InteractionController, Intersection, SiteConfig};

type SharedController = Rc<RefCell<InteractionController<Element>>>;

/// Installed page interactions. Dropping this detaches every listener.
pub struct LiveInteractions {
    _controller: SharedController,
    _listeners: Vec<ClickListener>,
    _reveals: Option<RevealObserver>,
}

struct ClickListener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(config: &SiteConfig) -> Option<LiveInteractions> {
    let doc = WebDocument::current()?;
    let controller: SharedController =
        Rc::new(RefCell::new(InteractionController::install(&doc, config)));

    let bindings = controller.borrow().bindings().to_vec();
    let listeners = bindings
        .into_iter()
        .filter_map(|binding| listen(&doc, &controller, binding))
        .collect();
    let reveals = observe_reveals(&doc, &controller);

    Some(LiveInteractions {
        _controller: controller,
        _listeners: listeners,
        _reveals: reveals,
    })
}

fn listen(doc: &WebDocument, controller: &SharedController, binding: Binding<Element>) -> Option<ClickListener> {
    let Binding { trigger, action } = binding;
    let callback = Closure::<dyn FnMut(Event)>::new({
        let doc = doc.clone();
        let controller = Rc::clone(controller);
        let trigger = trigger.clone();
        move |event: Event| {
            if action.prevents_default() {
                event.prevent_default();
            }
            if let Ok(mut controller) = controller.try_borrow_mut() {
                controller.dispatch(&doc, &trigger, action);
            }
        }
    });
    trigger
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .ok()?;
    Some(ClickListener {
        target: trigger,
        callback,
    })
}

fn observe_reveals(doc: &WebDocument, controller: &SharedController) -> Option<RevealObserver> {
    let (targets, options) = {
        let controller = controller.borrow();
        let reveal = controller.reveal();
        (reveal.pending().to_vec(), reveal.options())
    };
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
        let doc = doc.clone();
        let controller = Rc::clone(controller);
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            let Ok(mut controller) = controller.try_borrow_mut() else {
                return;
            };
            for target in controller.reveal_mut().record(&doc, entries) {
                observer.unobserve(&target);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    for target in &targets {
        observer.observe(target);
    }

    tracing::debug!("observing {} reveal targets", targets.len());
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
