//! Core engine for the genealogy reconstruction puzzle.
//!
//! A level ships a fixed cast of people, a stack of historical
//! documents, and an obfuscated answer key. The player asserts couple
//! and parent-child relationships; this crate decodes the key
//! ([`decode_solution`]) and scores the player's graph against it
//! ([`validate`]). Both are pure functions; [`Session`] wires them to a
//! working [`GameState`] with snapshot undo/redo for a front end to
//! drive.

pub mod codec;
pub mod model;
pub mod session;
pub mod state;
pub mod validator;

pub use codec::{decode_solution, encode_solution, DecodeError};
pub use model::{
    ChildRelationship, ChildType, CoupleRelationship, CoupleType, Difficulty, Document,
    DocumentKind, Gender, Level, PairKey, ParentLink, Person, Point, Solution, ValidationRules,
};
pub use session::Session;
pub use state::{AdmissionError, GameState, UpsertOutcome};
pub use validator::{validate, ValidationReport};
