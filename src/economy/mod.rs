//! Gold and the shop.

pub mod shop;

pub use shop::{Listing, Shop, Ware};
