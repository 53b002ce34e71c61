//! Game rules solved by the trainer.
//!
//! ## Available Games
//!
//! - [`kuhn`]: Kuhn Poker - 3-card poker with a known family of Nash equilibria

pub mod kuhn;
