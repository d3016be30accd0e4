//! # autodeck-engine: Automated Deck-Building Match Core
//!
//! A deterministic two-player deck-building simulation. Both seats are driven
//! by the same purchasing strategy: play every cryptocurrency card, buy the
//! best affordable Automation card, and fall back to cryptocurrency. The match
//! ends once the Framework stack is bought out, and the player holding more
//! APs wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card kinds, the fixed catalog, and card instances
//! - [`supply`] - Shared per-kind stacks of purchasable cards
//! - [`deck`] - The four card zones and their transitions
//! - [`player`] - Seat identity, AP counter, and scoring
//! - [`strategy`] - Purchasing decision for one buy phase
//! - [`game`] - Phases, turn rotation, and match outcome types
//! - [`engine`] - Match orchestration from setup to final score
//! - [`events`] - Event stream emitted to presentation layers
//! - [`logger`] - MatchRecord serialization (JSONL)
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use autodeck_engine::engine::Engine;
//! use autodeck_engine::events::MatchEvent;
//! use autodeck_engine::game::Outcome;
//!
//! let mut engine = Engine::new(42);
//! let mut events: Vec<MatchEvent> = Vec::new();
//! let result = engine.run(&mut events).expect("zones stay consistent");
//!
//! match result.outcome {
//!     Outcome::Winner(p) => println!("{} wins", p),
//!     Outcome::Tie => println!("tie"),
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every shuffle and random choice is drawn from one ChaCha20 generator, so a
//! seed reproduces the whole match:
//!
//! ```rust
//! use autodeck_engine::engine::Engine;
//! use autodeck_engine::events::MatchEvent;
//!
//! let mut a: Vec<MatchEvent> = Vec::new();
//! let mut b: Vec<MatchEvent> = Vec::new();
//! Engine::new(7).run(&mut a).unwrap();
//! Engine::new(7).run(&mut b).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod logger;
pub mod player;
pub mod strategy;
pub mod supply;
