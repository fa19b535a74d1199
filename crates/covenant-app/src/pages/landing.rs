//! Marketing landing page.

use leptos::*;

use crate::components::Hero;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page landing">
            <Hero />

            <section class="features">
                <div class="feature-card">
                    <h3>"Lock"</h3>
                    <p>
                        "A proposer funds a commitment with CVT. The deposit sits \
                         in the escrow contract, visible to every member."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"Deliver"</h3>
                    <p>
                        "The beneficiary submits the deliverable before the \
                         deadline. Late submissions leave the deposit clawable."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"Settle"</h3>
                    <p>
                        "Members confirm completion and the contract pays out. \
                         Every settlement is a public transaction."
                    </p>
                </div>
            </section>

            <section class="info-section" id="how-it-works">
                <h2>"How it works"</h2>
                <ol class="steps">
                    <li>"Connect a wallet on Base Sepolia"</li>
                    <li>"Approve the escrow contract to pull your CVT"</li>
                    <li>"Fund a commitment with an amount and a deadline"</li>
                    <li>"The beneficiary delivers and marks it submitted"</li>
                    <li>"The DAO settles; the contract releases the deposit"</li>
                </ol>
            </section>

            <section class="cta">
                <h2>"Your treasury, kept honest"</h2>
                <p>"Track live commitments, deadlines, and settlements in one place."</p>
                <a href="/dao" class="btn btn-primary">"Launch Dashboard"</a>
            </section>
        </div>
    }
}
