use covenant::{Address, ChainConfig};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

mod allowance;
mod components;
mod mock;
mod pages;
mod payment;
mod rpc;
mod wallet;

/// App state for the wallet connection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletState {
    pub connected: bool,
    pub address: Option<Address>,
    pub chain_id: Option<String>,
}

impl WalletState {
    /// Chain id the wallet should report, as `eth_chainId` formats it.
    pub fn expected_chain_id() -> String {
        format!("0x{:x}", covenant::CHAIN_ID)
    }

    /// True when the wallet is connected to Base Sepolia.
    pub fn on_expected_chain(&self) -> bool {
        match &self.chain_id {
            Some(id) => id.eq_ignore_ascii_case(&Self::expected_chain_id()),
            None => false,
        }
    }
}

/// Wallet context shared by every page.
pub type WalletSignal = (ReadSignal<WalletState>, WriteSignal<WalletState>);

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (wallet, set_wallet) = create_signal(WalletState::default());
    provide_context((wallet, set_wallet));

    view! {
        <Html lang="en" />
        <Meta charset="utf-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Title text="Covenant - Token Escrow for DAOs" />
        <Stylesheet href="/style.css" />

        <Router>
            <main class="container">
                <components::Backdrop />
                <Header />
                <Routes>
                    <Route path="/" view=pages::LandingPage />
                    <Route path="/dao" view=pages::DaoPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
                <Footer />
            </main>
        </Router>
    }
}

/// Header with navigation and wallet connection
#[component]
fn Header() -> impl IntoView {
    let (wallet, set_wallet) = expect_context::<WalletSignal>();

    view! {
        <header class="header">
            <nav class="nav">
                <a href="/" class="logo">"Covenant"</a>
                <div class="nav-links">
                    <a href="/">"Protocol"</a>
                    <a href="/dao">"DAO"</a>
                    <a href="https://github.com/covenant-protocol/covenant-web" target="_blank">"GitHub"</a>
                </div>
                <WalletButtons wallet=wallet set_wallet=set_wallet />
            </nav>
        </header>
    }
}

/// Wallet connect/disconnect buttons
#[component]
fn WalletButtons(
    wallet: ReadSignal<WalletState>,
    set_wallet: WriteSignal<WalletState>,
) -> impl IntoView {
    let (connecting, set_connecting) = create_signal(false);

    let connect = move |_| {
        set_connecting.set(true);
        spawn_local(async move {
            match wallet::connect().await {
                Ok(state) => set_wallet.set(state),
                Err(e) => {
                    web_sys::console::error_1(&format!("Wallet error: {}", e).into());
                }
            }
            set_connecting.set(false);
        });
    };

    let disconnect = move |_| {
        set_wallet.set(WalletState::default());
    };

    view! {
        <Show
            when=move || wallet.get().connected
            fallback=move || view! {
                <div class="wallet-buttons">
                    <button
                        class="btn btn-primary"
                        on:click=connect
                        disabled=move || connecting.get()
                    >
                        {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                </div>
            }
        >
            {move || {
                let w = wallet.get();
                let short = w
                    .address
                    .map(|a| covenant::format::short_address(&a))
                    .unwrap_or_default();
                let wrong_network = !w.on_expected_chain();
                view! {
                    <div class="wallet-info">
                        <Show when=move || wrong_network fallback=|| ()>
                            <span class="wallet-network-warning">"Wrong network"</span>
                        </Show>
                        <span class="wallet-address">{short}</span>
                        <button class="btn btn-secondary" on:click=disconnect>
                            "Disconnect"
                        </button>
                    </div>
                }
            }}
        </Show>
    }
}

/// Footer
#[component]
fn Footer() -> impl IntoView {
    let explorer = ChainConfig::default().explorer_base;
    view! {
        <footer class="footer">
            <p>
                "Covenant locks CVT on Base Sepolia. "
                <a href=explorer target="_blank">"Block Explorer"</a>
            </p>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"404 - Not Found"</h1>
            <p><a href="/">"Go home"</a></p>
        </div>
    }
}

/// Initialize the app
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_chain_id_is_hex() {
        assert_eq!(WalletState::expected_chain_id(), "0x14a34");
    }

    #[test]
    fn test_on_expected_chain_ignores_case() {
        let mut state = WalletState::default();
        assert!(!state.on_expected_chain());

        state.chain_id = Some("0x14A34".to_string());
        assert!(state.on_expected_chain());

        state.chain_id = Some("0x1".to_string());
        assert!(!state.on_expected_chain());
    }
}
