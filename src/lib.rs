//! # Flowcraft - Flow Definition Compiler
//!
//! **Flowcraft** turns author-facing, multi-screen flow definitions into the JSON a
//! flow-hosting platform accepts. Authored flows only describe layout; the compiler
//! adds the data wiring that lets values entered on one screen reach the actions of
//! later screens.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Screens**: Deserialize stored flow JSON into [`flow::Screen`]s, or
//!     implement [`flow::IntoScreens`] for your own record type.
//! 2.  **Validate**: The flow must have screens, and only the last screen may carry a
//!     `complete` action. Invalid flows are rejected before anything is rewritten.
//! 3.  **Rewrite**: Identifiers are sanitized to `[A-Za-z_]`, ids are stripped from
//!     components that may not carry one, earlier fields are declared in each later
//!     screen's `data` block, and `navigate`/`complete` payloads are synthesized.
//! 4.  **Submit**: Wrap the screens with the stored schema version into a
//!     [`flow::FlowDocument`] and hand it to your platform client.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowcraft::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let screens = vec![
//!         Screen::new(
//!             "SCREEN_1",
//!             vec![
//!                 Component::new(ComponentKind::TextInput).with_name("full_name").into(),
//!                 Component::new(ComponentKind::Footer)
//!                     .with_action(Action::navigate("SCREEN_2"))
//!                     .into(),
//!             ],
//!         ),
//!         Screen::new(
//!             "SCREEN_2",
//!             vec![Component::new(ComponentKind::Footer).with_action(Action::complete()).into()],
//!         ),
//!     ];
//!
//!     let compiled = Compiler::builder(screens).build().compile()?;
//!     assert_eq!(compiled.screens[0].id, "SCREEN_A");
//!     assert_eq!(compiled.screens[1].terminal, Some(true));
//!
//!     let document = compiled.into_document("6.3");
//!     println!("{}", document.to_json_string()?);
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod error;
pub mod flow;
pub mod prelude;
