//! CLI Commands

pub mod ext_peer;
pub mod key;
pub mod network;
pub mod node;
pub mod peers;
