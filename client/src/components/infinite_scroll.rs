//! Invisible sentinel that asks for the next page when scrolled into view.
//!
//! DESIGN
//! ======
//! One `IntersectionObserver` per mounted sentinel. The observer and its JS
//! callback live in a local `StoredValue` so teardown can disconnect the
//! observer and drop the closure together; nothing fires after unmount.
//!
//! The observer only reports changes in intersection, so it records the
//! latest visibility in a signal instead of requesting pages directly. An
//! effect over `visible && enabled` then asks again whenever a page lands
//! while the sentinel is still on screen.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Pre-fetch distance below the viewport.
const ROOT_MARGIN: &str = "200px";

#[component]
pub fn InfiniteScrollSentinel(
    /// Called while the sentinel is visible and `enabled` is true, again on
    /// every change of either.
    on_visible: Callback<()>,
    #[prop(into)] enabled: Signal<bool>,
) -> impl IntoView {
    let sentinel = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<(web_sys::IntersectionObserver, ObserverCallback)>);
        let visible = RwSignal::new(false);
        Effect::new(move || {
            if visible.get() && enabled.get() {
                on_visible.run(());
            }
        });
        Effect::new(move || {
            let Some(element) = sentinel.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                if let Some(entry) = entries.iter().last() {
                    visible.try_set(entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                }
            }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(ROOT_MARGIN);
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(obs) => {
                    obs.observe(&element);
                    observer.set_value(Some((obs, callback)));
                }
                Err(e) => leptos::logging::warn!("intersection observer unavailable: {e:?}"),
            }
        });
        on_cleanup(move || {
            observer.update_value(|slot| {
                if let Some((obs, _callback)) = slot.take() {
                    obs.disconnect();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (on_visible, enabled, ROOT_MARGIN);
    }

    view! { <div class="infinite-scroll__sentinel" node_ref=sentinel aria-hidden="true"></div> }
}
