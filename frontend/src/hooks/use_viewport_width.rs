use gloo::events::EventListener;
use shared::carousel::TABLET_BREAKPOINT;
use web_sys::window;
use yew::prelude::*;

/// Current `window.innerWidth`, kept up to date by a resize listener.
///
/// The listener is registered on mount and removed when the component
/// unmounts.
#[hook]
pub fn use_viewport_width() -> u32 {
    let width = use_state(current_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    width.set(current_width());
                })
            });

            move || drop(listener)
        });
    }

    *width
}

/// Falls back to a desktop width when there is no window to measure
fn current_width() -> u32 {
    window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .map(|value| value as u32)
        .unwrap_or(TABLET_BREAKPOINT)
}
