//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and talk to storage through the
//! `PlayerStore` trait so route handlers stay focused on HTTP translation.

pub mod player;
