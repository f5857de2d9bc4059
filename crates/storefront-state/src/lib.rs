//! storefront-state: application-side entity stores for the storefront
//! client. Stores are plain values mutated only by explicit actions; the
//! view layer owns them through [`application::app_state::AppState`].

pub mod application;

pub use storefront_types::{domain, forms, ports};
