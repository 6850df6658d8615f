#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod error;
pub mod ip;
pub(crate) mod socket_address;
pub mod util;

pub use socket_address::{AddressFamily, SocketAddress};
