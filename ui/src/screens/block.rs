//=============================================================================
// File: src/screens/block.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;
use eth_types::block_height::BlockHeight;
use eth_types::block_info::BlockInfo;

use crate::compat;
use crate::components::label_value::LabelValue;
use crate::components::pico::Card;
use crate::hooks::use_provider_status::use_provider_status;

/// How often the chain tip is re-read. Mainnet produces a block roughly
/// every 12 seconds; polling faster only burns provider quota.
const TIP_POLL_INTERVAL: Duration = Duration::from_secs(12);

/// Labels for the transaction rows: `#001`, `#002`, ... in payload order.
fn tx_row_label(index: usize) -> String {
    format!("#{:03}", index + 1)
}

/// The fixed label/value rows shown for a block, in display order. Labels
/// match the provider's JSON field names; a `None` renders as a blank
/// cell.
fn block_detail_rows(info: &BlockInfo) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("hash", info.hash.clone()),
        ("parentHash", Some(info.parent_hash.clone())),
        ("number", info.height.map(|h| h.to_string())),
        ("timestamp", Some(info.timestamp.standard_format())),
        ("nonce", info.nonce.clone()),
        ("difficulty", Some(info.difficulty.clone())),
        ("gasLimit", Some(info.gas_limit.to_string())),
        ("gasUsed", Some(info.gas_used.to_string())),
        ("miner", Some(info.miner.to_string())),
        ("extraData", Some(info.extra_data.clone())),
        (
            "baseFeePerGas",
            info.base_fee_per_gas.as_ref().map(|fee| fee.to_string()),
        ),
    ]
}

#[component]
pub fn BlockPanel() -> Element {
    let mut tip_height = use_signal(|| None::<BlockHeight>);
    let mut show_transactions = use_signal(|| false);
    let mut checker = use_provider_status();

    // Bounded tip polling: one request in flight at a time, fixed
    // interval, stops when this component unmounts and the coroutine is
    // dropped.
    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let mut interval = compat::interval::Interval::new(TIP_POLL_INTERVAL);
        loop {
            let result = api::latest_block_number().await;
            if let Some(height) = checker.check(result) {
                // Only a changed tip wakes the block-detail resource.
                if tip_height.peek().as_ref() != Some(&height) {
                    tip_height.set(Some(height));
                }
            }
            interval.tick().await;
        }
    });

    // Refetches exactly when the observed tip height changes. The block
    // returned is whatever "latest" resolves to at that moment, which can
    // already be past the height that triggered the fetch.
    let mut block_resource = use_resource(move || async move {
        match tip_height() {
            Some(_) => api::latest_block().await,
            None => Ok(None),
        }
    });

    rsx! {
        match &*block_resource.read() {
            None | Some(Ok(None)) => rsx! {
                Card {
                    h3 {
                        "Block and Transaction"
                    }
                    p {
                        "Waiting for the latest block..."
                    }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 {
                        "Block and Transaction"
                    }
                    p {
                        "Failed to load the latest block: {e}"
                    }
                    button {
                        onclick: move |_| block_resource.restart(),
                        "Retry"
                    }
                }
            },
            Some(Ok(Some(info))) => rsx! {
                Card {
                    h3 {
                        "Block and Transaction"
                    }
                    if let Some(height) = info.height {
                        h4 {
                            "Block Number: {height}"
                        }
                    }
                    for (label, value) in block_detail_rows(info) {
                        LabelValue {
                            label,
                            value,
                        }
                    }
                    LabelValue {
                        label: "transactions",
                        value: Some(info.tx_count().to_string()),
                        on_value_click: move |_key: String| show_transactions.toggle(),
                    }
                }
                if show_transactions() {
                    Card {
                        h4 {
                            "Transactions Detail"
                        }
                        for (index, tx) in info.transactions.iter().enumerate() {
                            LabelValue {
                                label: tx_row_label(index),
                                value: Some(tx.hash.clone()),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eth_types::address::Address;
    use eth_types::timestamp::Timestamp;
    use eth_types::block_info::TxSummary;
    use eth_types::wei_amount::WeiAmount;

    fn sample_info() -> BlockInfo {
        BlockInfo {
            hash: Some("0xaa".to_string()),
            parent_hash: "0xbb".to_string(),
            height: Some(BlockHeight::from(17_000_000)),
            timestamp: Timestamp::from_secs(0),
            nonce: None,
            difficulty: "0".to_string(),
            gas_limit: 30_000_000,
            gas_used: 1,
            miner: Address::from_bytes([0u8; 20]),
            extra_data: "0x".to_string(),
            base_fee_per_gas: Some(WeiAmount::from(7u128)),
            transactions: vec![
                TxSummary { hash: "0x01".into() },
                TxSummary { hash: "0x02".into() },
                TxSummary { hash: "0x03".into() },
            ],
        }
    }

    #[test]
    fn transaction_rows_are_labeled_in_order() {
        assert_eq!(tx_row_label(0), "#001");
        assert_eq!(tx_row_label(1), "#002");
        assert_eq!(tx_row_label(2), "#003");
        assert_eq!(tx_row_label(999), "#1000");
    }

    #[test]
    fn detail_rows_keep_their_display_order() {
        let rows = block_detail_rows(&sample_info());
        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "hash",
                "parentHash",
                "number",
                "timestamp",
                "nonce",
                "difficulty",
                "gasLimit",
                "gasUsed",
                "miner",
                "extraData",
                "baseFeePerGas",
            ]
        );
    }

    #[test]
    fn absent_fields_come_through_as_none() {
        let mut info = sample_info();
        info.nonce = None;
        info.base_fee_per_gas = None;

        let rows = block_detail_rows(&info);
        let nonce = rows.iter().find(|(label, _)| *label == "nonce").unwrap();
        let base_fee = rows
            .iter()
            .find(|(label, _)| *label == "baseFeePerGas")
            .unwrap();
        assert_eq!(nonce.1, None);
        assert_eq!(base_fee.1, None);
    }

    #[test]
    fn base_fee_row_shows_raw_wei() {
        let rows = block_detail_rows(&sample_info());
        let base_fee = rows
            .iter()
            .find(|(label, _)| *label == "baseFeePerGas")
            .unwrap();
        assert_eq!(base_fee.1.as_deref(), Some("7"));
    }
}
