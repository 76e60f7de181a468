//! Debug Panel
//!
//! A headless model of the tweak panel: sliders bound to scene parameters
//! and buttons that switch the actor's clip. Interactions return
//! [`PanelEvent`]s instead of invoking callbacks, and the [`Stage`](crate::stage::Stage)
//! applies them.

pub mod panel;

pub use panel::{Control, DebugPanel, NumberControl, PanelEvent};
