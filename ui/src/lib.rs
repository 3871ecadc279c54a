// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use components::pico::Container;
use components::pico::Grid;
use hooks::use_provider_status::ProviderConnectionStatus;
use screens::account::AccountPanel;
use screens::block::BlockPanel;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .app-main-container {
        padding: 1rem;
    }

    .app-main-container header {
        padding: 0 1rem;
        margin-bottom: 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .network-badge {
        color: var(--pico-muted-color);
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
        padding: 0.1rem 0.5rem;
        font-size: 0.85rem;
    }

    .provider-offline {
        color: var(--pico-del-color);
        margin-bottom: 0;
    }

    .input-error {
        color: var(--pico-del-color);
    }

    .label-value-row {
        display: flex;
        flex-direction: row;
        justify-content: space-between;
        gap: 1rem;
        padding: 0.15rem 0;
    }

    .label-value-row .label {
        color: var(--pico-muted-color);
        flex-shrink: 0;
    }

    .label-value-row span:last-child {
        overflow-wrap: anywhere;
        text-align: right;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Processed on the server before the initial page is delivered. A
    // missing provider API key or a bad network name fails here, not on
    // the first data fetch.
    let initial_data_future = use_server_future(move || async move { api::network().await })?;

    let body = match &*initial_data_future.read() {
        Some(Ok(network)) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*network),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when startup
/// data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    let network = app_state.network;

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Shared provider-connection status, written by the fetch hooks and
    // read by the header banner.
    let status_signal = use_context_provider(|| Signal::new(ProviderConnectionStatus::Connected));

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Block Explorer"
                                }
                            }
                        }
                        ul {
                            li {
                                span {
                                    class: "network-badge",
                                    "{network}"
                                }
                            }
                        }
                    }
                    if let ProviderConnectionStatus::Disconnected(reason) = &*status_signal.read() {
                        p {
                            class: "provider-offline",
                            "Provider unreachable: {reason}"
                        }
                    }
                }
                div {
                    class: "content",
                    Grid {
                        BlockPanel {}
                        AccountPanel {}
                    }
                }
            }
        }
    }
}
