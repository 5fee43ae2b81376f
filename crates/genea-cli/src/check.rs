//! Consistency checks for authored level files.
//!
//! A level that passes here is playable: its solution decodes, every id
//! it references resolves, and the answer key scores 100% against
//! itself.

use genea_core::{validate, Level, ParentLink, Solution};

/// Outcome of checking one level file
pub struct CheckReport {
    pub couples: usize,
    pub children: usize,
    pub issues: Vec<String>,
}

impl CheckReport {
    /// Relationship total, the fixed denominator players play against
    pub fn total(&self) -> usize {
        self.couples + self.children
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a level's solution against its cast of people
pub fn check_level(level: &Level, solution: &Solution) -> CheckReport {
    let mut issues = Vec::new();

    let known = |id: &str| level.person(id).is_some();

    for couple in &solution.couples {
        for person_id in [&couple.person1_id, &couple.person2_id] {
            if !known(person_id) {
                issues.push(format!(
                    "couple {}: unknown person {}",
                    couple.id, person_id
                ));
            }
        }
        if couple.person1_id == couple.person2_id {
            issues.push(format!(
                "couple {}: connects {} to themselves",
                couple.id, couple.person1_id
            ));
        }
    }

    for child in &solution.children {
        if !known(&child.child_id) {
            issues.push(format!("child {}: unknown person {}", child.id, child.child_id));
        }
        match &child.parent {
            ParentLink::Person { parent_id } => {
                if !known(parent_id) {
                    issues.push(format!("child {}: unknown parent {}", child.id, parent_id));
                }
                if *parent_id == child.child_id {
                    issues.push(format!(
                        "child {}: {} is their own parent",
                        child.id, child.child_id
                    ));
                }
            }
            ParentLink::Couple { couple_id } => {
                match solution.couples.iter().find(|c| &c.id == couple_id) {
                    None => issues.push(format!(
                        "child {}: couple {} does not exist in the solution",
                        child.id, couple_id
                    )),
                    Some(couple) => {
                        if couple.has_member(&child.child_id) {
                            issues.push(format!(
                                "child {}: {} is a member of couple {}",
                                child.id, child.child_id, couple_id
                            ));
                        }
                    }
                }
            }
        }
    }

    let expected = level.validation_rules.required_relationships;
    let total = solution.couples.len() + solution.children.len();
    if expected != total {
        issues.push(format!(
            "validationRules.requiredRelationships is {} but the solution has {} relationships",
            expected, total
        ));
    }

    // The answer key must score 100% against itself; anything less means
    // the level cannot be won.
    let report = validate(&solution.couples, &solution.children, solution);
    if !report.is_win() {
        issues.push(format!(
            "solution does not win against itself: {}/{} matched, {} incorrect",
            report.matched, report.total, report.incorrect
        ));
    }

    CheckReport {
        couples: solution.couples.len(),
        children: solution.children.len(),
        issues,
    }
}
