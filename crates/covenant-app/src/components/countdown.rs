//! Ticking deadline readout for commitment rows.

use leptos::*;

/// Renders the time left until `deadline`, re-deriving whenever the
/// shared `now` signal ticks. Past deadlines read "Expired".
#[component]
pub fn Countdown(deadline: u64, now: ReadSignal<u64>) -> impl IntoView {
    let class = move || {
        if deadline <= now.get() {
            "countdown countdown-expired"
        } else {
            "countdown"
        }
    };

    view! {
        <span class=class>
            {move || covenant::format::format_time_remaining(deadline, now.get())}
        </span>
    }
}
