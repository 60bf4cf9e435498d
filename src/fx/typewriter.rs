//! Character-by-character text reveal.

use std::time::Duration;

use leptos::prelude::*;

/// Reveals `text` one character per `tick_ms` once `trigger` flips to `true`.
/// Returns the visible prefix; empty until triggered, the full string once
/// complete. The interval stops when the text is fully shown and on
/// component teardown.
pub fn typewriter(trigger: ReadSignal<bool>, text: String, tick_ms: u64) -> Memo<String> {
    let total = text.chars().count();
    let (shown, set_shown) = signal(0usize);
    let handle: StoredValue<Option<IntervalHandle>, LocalStorage> = StoredValue::new_local(None);

    let stop = move || {
        if let Some(h) = handle.get_value() {
            h.clear();
            handle.set_value(None);
        }
    };

    Effect::new(move || {
        if !trigger.get() || handle.with_value(|h| h.is_some()) || shown.get_untracked() >= total {
            return;
        }
        let started = set_interval_with_handle(
            move || {
                set_shown.update(|n| *n = (*n + 1).min(total));
                if shown.get_untracked() >= total {
                    stop();
                }
            },
            Duration::from_millis(tick_ms),
        );
        if let Ok(h) = started {
            handle.set_value(Some(h));
        }
    });

    on_cleanup(stop);

    Memo::new(move |_| text.chars().take(shown.get()).collect())
}
