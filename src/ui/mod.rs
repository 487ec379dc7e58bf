//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: the interaction loop that turns key presses into session
//!   operations and applies model replies as they arrive.
//! - [`renderer`], [`sidebar`], and [`layout`]: frame composition.
//! - [`notice`]: the blocking screen shown when no API key is configured.
//! - [`theme`]: colors, agent accents, and glyphs.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the conversation and the turn state machine.

pub mod chat_loop;
pub mod layout;
pub mod notice;
pub mod renderer;
pub mod sidebar;
pub mod theme;
pub mod view_state;
