//! A single play-through of a level.
//!
//! Owns the level, the decoded answer key, the player's working graph,
//! and a snapshot-based undo/redo history. Every edit commits a fresh
//! [`GameState`] snapshot; undo and redo just move a cursor over the
//! snapshot vec, so the validator always sees an immutable value.

use crate::codec::{decode_solution, DecodeError};
use crate::model::{ChildRelationship, ChildType, CoupleRelationship, CoupleType, Level, ParentLink, Solution};
use crate::state::{AdmissionError, GameState, UpsertOutcome};
use crate::validator::{validate, ValidationReport};

/// One player session on one level
pub struct Session {
    level: Level,
    solution: Solution,
    state: GameState,
    history: Vec<GameState>,
    cursor: usize,
    completed: bool,
    next_id: u64,
}

impl Session {
    /// Start a session by decoding the level's embedded solution.
    /// A payload that fails to decode makes the level unloadable.
    pub fn new(level: Level) -> Result<Self, DecodeError> {
        let solution = decode_solution(&level.solution_encoded)?;
        Ok(Self {
            level,
            solution,
            state: GameState::new(),
            history: vec![GameState::new()],
            cursor: 0,
            completed: false,
            next_id: 0,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether this level has been solved at any point in the session.
    /// Latched: editing or undoing after the win does not clear it.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Score the current snapshot against the solution
    pub fn validation(&self) -> ValidationReport {
        validate(self.state.couples(), self.state.children(), &self.solution)
    }

    /// Connect two people with a union of the given type.
    ///
    /// Connecting an already-linked pair retypes it in place (same type
    /// is a no-op); see [`GameState::upsert_couple`].
    pub fn connect_couple(
        &mut self,
        couple_type: CoupleType,
        person1_id: &str,
        person2_id: &str,
    ) -> Result<UpsertOutcome, AdmissionError> {
        self.require_person(person1_id)?;
        self.require_person(person2_id)?;

        let couple = CoupleRelationship {
            id: self.mint_id("couple"),
            couple_type,
            person1_id: person1_id.to_string(),
            person2_id: person2_id.to_string(),
        };

        let mut next = self.state.clone();
        let outcome = next.upsert_couple(couple);
        if outcome != UpsertOutcome::Unchanged {
            self.commit(next);
        }
        Ok(outcome)
    }

    /// Declare a person the child of a union
    pub fn connect_child_of_couple(
        &mut self,
        couple_id: &str,
        child_id: &str,
        child_type: ChildType,
    ) -> Result<(), AdmissionError> {
        self.require_person(child_id)?;
        let child = ChildRelationship {
            id: self.mint_id("child"),
            parent: ParentLink::Couple {
                couple_id: couple_id.to_string(),
            },
            child_id: child_id.to_string(),
            child_type,
        };
        self.commit_child(child)
    }

    /// Declare a person the child of a single named parent
    pub fn connect_child_of_person(
        &mut self,
        parent_id: &str,
        child_id: &str,
        child_type: ChildType,
    ) -> Result<(), AdmissionError> {
        self.require_person(parent_id)?;
        self.require_person(child_id)?;
        let child = ChildRelationship {
            id: self.mint_id("child"),
            parent: ParentLink::Person {
                parent_id: parent_id.to_string(),
            },
            child_id: child_id.to_string(),
            child_type,
        };
        self.commit_child(child)
    }

    /// Delete a couple and the children hanging off it
    pub fn delete_couple(&mut self, couple_id: &str) -> bool {
        let mut next = self.state.clone();
        if !next.remove_couple(couple_id) {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn delete_child(&mut self, child_id: &str) -> bool {
        let mut next = self.state.clone();
        if !next.remove_child(child_id) {
            return false;
        }
        self.commit(next);
        true
    }

    /// Remove every asserted relationship in one undoable step
    pub fn clear_all(&mut self) {
        if self.state.is_empty() {
            return;
        }
        self.commit(GameState::new());
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.state = self.history[self.cursor].clone();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.state = self.history[self.cursor].clone();
        true
    }

    /// Throw away the graph and its history, as when re-entering the
    /// level from the menu. The completed latch survives.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.history = vec![GameState::new()];
        self.cursor = 0;
    }

    fn commit_child(&mut self, child: ChildRelationship) -> Result<(), AdmissionError> {
        let mut next = self.state.clone();
        next.add_child(child)?;
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, next: GameState) {
        self.history.truncate(self.cursor + 1);
        self.history.push(next.clone());
        self.cursor += 1;
        self.state = next;
        if self.validation().is_win() {
            self.completed = true;
        }
    }

    fn require_person(&self, person_id: &str) -> Result<(), AdmissionError> {
        if self.level.person(person_id).is_none() {
            return Err(AdmissionError::UnknownPerson(person_id.to_string()));
        }
        Ok(())
    }

    fn mint_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{}", prefix, self.next_id)
    }
}
