//! Server-rendered pages.
//!
//! ARCHITECTURE
//! ============
//! Pages are Leptos components rendered to strings with SSR. None of them
//! hydrate, so no WASM bundle is built or served.

pub mod welcome;
