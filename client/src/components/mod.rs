//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections top to bottom and forward DOM events
//! into the state types under `crate::state`.

pub mod banner;
pub mod contact;
pub mod footer;
pub mod header;
pub mod icons;
pub mod product;
pub mod product_mobile;
pub mod progress_ring;
pub mod toast_container;
