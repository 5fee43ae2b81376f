//! Level and relationship types shared across the engine.
//!
//! Field names serialize in camelCase so these types read and write the
//! level JSON files produced by the authoring tools unchanged.

use serde::{Deserialize, Serialize};

/// Gender of a person, as given by the level data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// Layout hint for where a person node starts on the board.
/// Irrelevant to validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A person in the family tree. The set of people is fixed per level:
/// players connect them but never create or destroy them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub known_facts: Vec<String>,
    pub position: Point,
    pub gender: Gender,
}

/// Kind of union between two people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoupleType {
    Married,
    Partnership,
    Affair,
    Divorced,
}

impl std::fmt::Display for CoupleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoupleType::Married => write!(f, "married"),
            CoupleType::Partnership => write!(f, "partnership"),
            CoupleType::Affair => write!(f, "affair"),
            CoupleType::Divorced => write!(f, "divorced"),
        }
    }
}

/// Canonical form of an unordered person pair. Two couples connecting the
/// same two people produce the same key regardless of field order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            PairKey(a.to_string(), b.to_string())
        } else {
            PairKey(b.to_string(), a.to_string())
        }
    }
}

/// An undirected, typed edge between two people representing a union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleRelationship {
    pub id: String,
    #[serde(rename = "type")]
    pub couple_type: CoupleType,
    pub person1_id: String,
    pub person2_id: String,
}

impl CoupleRelationship {
    /// Key for the unordered person pair
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.person1_id, &self.person2_id)
    }

    /// Couple equivalence: same union type and same unordered person pair.
    /// Ids are deliberately ignored; player and solution mint ids
    /// independently.
    pub fn is_equivalent(&self, other: &CoupleRelationship) -> bool {
        self.couple_type == other.couple_type && self.pair_key() == other.pair_key()
    }

    /// Whether the given person is one of the couple's two members
    pub fn has_member(&self, person_id: &str) -> bool {
        self.person1_id == person_id || self.person2_id == person_id
    }
}

/// Kind of parent-child link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildType {
    #[default]
    Biological,
    Adopted,
}

impl std::fmt::Display for ChildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChildType::Biological => write!(f, "biological"),
            ChildType::Adopted => write!(f, "adopted"),
        }
    }
}

/// The parent side of a child link: either a union or a single named
/// parent. Exactly one of `coupleId`/`parentId` appears in the JSON form,
/// which this enum makes unrepresentable to get wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentLink {
    Couple {
        #[serde(rename = "coupleId")]
        couple_id: String,
    },
    Person {
        #[serde(rename = "parentId")]
        parent_id: String,
    },
}

impl ParentLink {
    pub fn couple_id(&self) -> Option<&str> {
        match self {
            ParentLink::Couple { couple_id } => Some(couple_id),
            ParentLink::Person { .. } => None,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match self {
            ParentLink::Couple { .. } => None,
            ParentLink::Person { parent_id } => Some(parent_id),
        }
    }
}

/// A directed edge from a parent (person or union) to a child.
/// A missing `type` field in JSON decodes as biological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRelationship {
    pub id: String,
    #[serde(flatten)]
    pub parent: ParentLink,
    pub child_id: String,
    #[serde(rename = "type", default)]
    pub child_type: ChildType,
}

/// The level author's answer key: the full set of unions and child links
/// the player is expected to reconstruct. Shipped obfuscated inside level
/// data and decoded by [`crate::codec::decode_solution`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub couples: Vec<CoupleRelationship>,
    pub children: Vec<ChildRelationship>,
}

/// Kind of historical document shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    BirthCertificate,
    MarriageCertificate,
    Newspaper,
    Census,
    Photo,
    Audio,
    Other,
}

/// A historical document. Presentation-only: the engine never inspects
/// content, it just carries the record for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Difficulty tier of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Authoring metadata carried alongside the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    pub required_relationships: usize,
    pub total_points: usize,
}

/// A complete level as shipped in level JSON: people, documents, and the
/// encoded answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub timeframe: String,
    pub documents: Vec<Document>,
    pub initial_people: Vec<Person>,
    pub solution_encoded: String,
    pub validation_rules: ValidationRules,
}

impl Level {
    /// Parse a level from its JSON representation
    pub fn from_json(json: &str) -> Result<Level, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a person by id
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.initial_people.iter().find(|p| p.id == id)
    }
}
