//! Carenav is a terminal front desk for a hospital information system.
//!
//! Every patient utterance goes to a single Gemini call that both routes the
//! request to one of five specialist agents and writes that agent's reply.
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the agent registry, the conversation, the model client,
//!   and the per-turn session state machine.
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//! - [`api`] defines the `generateContent` payloads and the structured reply.
//! - [`cli`] parses arguments and dispatches subcommands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
