//! Component-scoped view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with transition methods. Components wrap them in `RwSignal`
//! and forward DOM events; nothing here touches the browser, so every rule is
//! testable on the host.

pub mod carousel;
pub mod contact;
pub mod header;
pub mod product;
pub mod toast;
