//! Landing page hero.

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">"Escrow your promises on-chain"</h1>
            <p class="hero-subtitle">
                "Covenant locks CVT behind every DAO commitment. Funds release \
                 when the work lands and return when it does not, with the \
                 whole ledger public on Base Sepolia."
            </p>
            <div class="hero-actions">
                <a href="/dao" class="btn btn-primary">"Open the DAO Dashboard"</a>
                <a
                    href="https://github.com/covenant-protocol/covenant-web"
                    target="_blank"
                    class="btn btn-secondary"
                >
                    "Read the Source"
                </a>
            </div>
        </section>
    }
}
