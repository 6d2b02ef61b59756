//! SmartStudy browser client.
//!
//! The session and authentication core (transport, session store, login and
//! registration flows, the session gate and route table) is plain Rust that
//! builds on every target. The Leptos views on top of it only build for
//! `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
