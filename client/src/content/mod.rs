//! Static site copy and media references.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page renders that is not view state lives here, so
//! components only decide layout and state modules only decide behavior.

pub mod site;
pub mod videos;
