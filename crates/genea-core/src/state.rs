//! The player's working graph and the rules for admitting edits to it.
//!
//! `GameState` is a plain value: cheap to clone, compared structurally,
//! and handed to the validator as an immutable snapshot. The undo/redo
//! history in [`crate::session`] is just a vec of these snapshots.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::{ChildRelationship, CoupleRelationship, PairKey, ParentLink};

/// Edit rejected before admission to the graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("person {0} cannot be their own parent")]
    OwnParent(String),
    #[error("person {person_id} is a member of couple {couple_id} and cannot be its child")]
    ChildOfOwnCouple {
        person_id: String,
        couple_id: String,
    },
    #[error("person {0} is not part of this level")]
    UnknownPerson(String),
}

/// What an upsert did to the couple set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// New pair, appended
    Added,
    /// Existing pair retyped in place, id preserved
    Retyped,
    /// Existing pair already had this type, nothing changed
    Unchanged,
}

/// The player's current set of asserted relationships.
///
/// Couples are keyed by their unordered person pair: a pair can carry at
/// most one couple relationship at a time. Iteration order is insertion
/// order for both collections, which the validator's greedy claiming
/// relies on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    couples: Vec<CoupleRelationship>,
    children: Vec<ChildRelationship>,
    pair_index: HashMap<PairKey, usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn couples(&self) -> &[CoupleRelationship] {
        &self.couples
    }

    pub fn children(&self) -> &[ChildRelationship] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.couples.is_empty() && self.children.is_empty()
    }

    /// Total relationships the player is currently asserting
    pub fn asserted_count(&self) -> usize {
        self.couples.len() + self.children.len()
    }

    /// Add or replace the couple relationship for an unordered pair.
    ///
    /// Connecting an already-linked pair with the same type is a no-op;
    /// with a different type it retypes the existing relationship in
    /// place, preserving its id and its slot in iteration order.
    pub fn upsert_couple(&mut self, couple: CoupleRelationship) -> UpsertOutcome {
        let key = couple.pair_key();
        match self.pair_index.get(&key) {
            Some(&i) => {
                let existing = &mut self.couples[i];
                if existing.couple_type == couple.couple_type {
                    UpsertOutcome::Unchanged
                } else {
                    existing.couple_type = couple.couple_type;
                    UpsertOutcome::Retyped
                }
            }
            None => {
                self.pair_index.insert(key, self.couples.len());
                self.couples.push(couple);
                UpsertOutcome::Added
            }
        }
    }

    /// Admit a child relationship.
    ///
    /// Rejects a person being their own parent and rejects declaring a
    /// couple member a child of that same couple. A couple id that does
    /// not resolve is admitted anyway: dangling links are playable state,
    /// they simply never match the solution.
    pub fn add_child(&mut self, child: ChildRelationship) -> Result<(), AdmissionError> {
        match &child.parent {
            ParentLink::Person { parent_id } => {
                if *parent_id == child.child_id {
                    return Err(AdmissionError::OwnParent(child.child_id.clone()));
                }
            }
            ParentLink::Couple { couple_id } => {
                if let Some(couple) = self.couple_by_id(couple_id) {
                    if couple.has_member(&child.child_id) {
                        return Err(AdmissionError::ChildOfOwnCouple {
                            person_id: child.child_id.clone(),
                            couple_id: couple_id.clone(),
                        });
                    }
                }
            }
        }
        self.children.push(child);
        Ok(())
    }

    pub fn couple_by_id(&self, id: &str) -> Option<&CoupleRelationship> {
        self.couples.iter().find(|c| c.id == id)
    }

    /// Remove a couple and every child linked to it
    pub fn remove_couple(&mut self, id: &str) -> bool {
        let Some(pos) = self.couples.iter().position(|c| c.id == id) else {
            return false;
        };
        let removed = self.couples.remove(pos);
        self.children
            .retain(|child| child.parent.couple_id() != Some(removed.id.as_str()));
        self.rebuild_index();
        true
    }

    pub fn remove_child(&mut self, id: &str) -> bool {
        let Some(pos) = self.children.iter().position(|c| c.id == id) else {
            return false;
        };
        self.children.remove(pos);
        true
    }

    /// Discard every asserted relationship
    pub fn clear(&mut self) {
        self.couples.clear();
        self.children.clear();
        self.pair_index.clear();
    }

    fn rebuild_index(&mut self) {
        self.pair_index = self
            .couples
            .iter()
            .enumerate()
            .map(|(i, c)| (c.pair_key(), i))
            .collect();
    }
}
