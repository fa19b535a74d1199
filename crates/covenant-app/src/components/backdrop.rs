//! Animated orb backdrop rendered behind every page.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const NUM_ORBS: u32 = 40;

#[component]
pub fn Backdrop() -> impl IntoView {
    // Populate after mount; the container has to exist first.
    spawn_local(async move {
        TimeoutFuture::new(100).await;

        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(d) => d,
            None => return,
        };
        if let Some(element) = document.get_element_by_id("backdrop") {
            if let Some(container) = element.dyn_ref::<HtmlElement>() {
                spawn_orbs(&document, container);
            }
        }
    });

    view! {
        <div class="backdrop" id="backdrop"></div>
    }
}

fn spawn_orbs(document: &Document, container: &HtmlElement) {
    for _ in 0..NUM_ORBS {
        let orb = match document.create_element("div") {
            Ok(el) => el,
            Err(_) => return,
        };
        orb.set_class_name("orb");

        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 6.0;
        let size = js_sys::Math::random() * 3.0 + 2.0;

        // A few larger, brighter orbs for depth (roughly one in five).
        let style = if js_sys::Math::random() > 0.8 {
            let halo = size * 3.0;
            format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px; \
                 box-shadow: 0 0 {}px rgba(94, 234, 212, 0.8);",
                left, top, delay, size, size, halo
            )
        } else {
            format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px;",
                left, top, delay, size, size
            )
        };

        let _ = orb.set_attribute("style", &style);
        let _ = container.append_child(&orb);
    }
}
