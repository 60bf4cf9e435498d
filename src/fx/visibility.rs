//! One-shot viewport-intersection observation.

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverSlot = Option<(
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
)>;

/// Observes `anchor` and flips the returned signal to `true` the first time
/// it intersects the viewport at the given threshold. Fires at most once per
/// mounted instance: the observer disconnects itself on transition, and is
/// also disconnected on component teardown.
pub fn once_visible<E>(anchor: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let (entered, set_entered) = signal(false);
    let slot: StoredValue<ObserverSlot, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move || {
        if slot.with_value(|s| s.is_some()) {
            return;
        }
        let Some(node) = anchor.get() else {
            return;
        };
        let element: web_sys::Element = node.unchecked_into();

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if intersecting {
                    let _ = set_entered.try_set(true);
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let Ok(observer) =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
        else {
            return;
        };
        observer.observe(&element);
        slot.set_value(Some((observer, on_intersect)));
    });

    on_cleanup(move || {
        let _ = slot.try_update_value(|s| {
            if let Some((observer, _)) = s.take() {
                observer.disconnect();
            }
        });
    });

    entered
}
