//! birdspy-ui - Shared UI components for BirdSpy
//!
//! Contains pure view components used by the BirdSpy web frontend.

pub mod components;

pub use components::*;
