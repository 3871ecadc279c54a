//=============================================================================
// File: src/screens/account.rs
//=============================================================================
use dioxus::prelude::*;
use eth_types::address::Address;

use crate::components::pico::Card;
use crate::AppState;

#[component]
pub fn AccountPanel() -> Element {
    let network = use_context::<AppState>().network;

    // Signal to hold the value of the text input.
    let mut address_input = use_signal(String::new);
    let mut input_error = use_signal(|| None::<String>);
    // The last successfully validated submission; `None` before the
    // first one, so nothing is fetched.
    let mut lookup_address = use_signal(|| None::<Address>);

    let mut balance_resource = use_resource(move || async move {
        match lookup_address() {
            Some(address) => api::account_balance(address).await.map(Some),
            None => Ok(None),
        }
    });

    rsx! {
        Card {
            h3 {
                "Account Details"
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();

                    let input_str = address_input.read().trim().to_string();
                    if input_str.is_empty() {
                        return;
                    }
                    match input_str.parse::<Address>() {
                        Ok(address) => {
                            input_error.set(None);
                            if lookup_address.peek().as_ref() == Some(&address) {
                                // Same address again: force a fresh lookup.
                                balance_resource.restart();
                            } else {
                                lookup_address.set(Some(address));
                            }
                        }
                        Err(e) => {
                            dioxus_logger::tracing::warn!("rejected account address input: {}", e);
                            input_error.set(Some(e.to_string()));
                        }
                    }
                },
                label {
                    "Input Account Address:"
                }
                // Use Pico's group role for a compact input/button layout
                div {
                    role: "group",
                    input {
                        r#type: "text",
                        placeholder: "0x...",
                        oninput: move |event| address_input.set(event.value()),
                    }
                    button {
                        r#type: "submit",
                        "Get Balance"
                    }
                }
            }
            if let Some(err) = input_error() {
                p {
                    class: "input-error",
                    "{err}"
                }
            }
            match &*balance_resource.read() {
                Some(Ok(Some(balance))) => rsx! {
                    p {
                        "Balance: {balance.display_truncated()} {network.currency_code()}"
                    }
                },
                Some(Ok(None)) => rsx! {},
                Some(Err(e)) => rsx! {
                    p {
                        "Balance lookup failed: {e}"
                    }
                    button {
                        onclick: move |_| balance_resource.restart(),
                        "Retry"
                    }
                },
                None => rsx! {
                    if lookup_address.read().is_some() {
                        p {
                            "Looking up balance..."
                        }
                        progress {}
                    }
                },
            }
        }
    }
}
