//! Chain data types shared by the client UI and the server-side provider
//! adapter. Everything here is serde-clean and safe on both native and
//! wasm targets.

pub mod address;
pub mod block_height;
pub mod block_info;
pub mod network;
pub mod timestamp;
pub mod wei_amount;
