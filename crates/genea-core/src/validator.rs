//! Scoring of the player's graph against the decoded answer key.
//!
//! Pure and total: any combination of player relationships (including
//! dangling couple references) is a valid input, it just fails to match.
//! The full report is recomputed from scratch on every call; graphs are
//! small enough that incremental bookkeeping would only add risk.

use std::collections::HashSet;

use crate::model::{ChildRelationship, CoupleRelationship, ParentLink, Solution};

/// Result of comparing the player's graph against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Solution relationships claimed by a player relationship
    pub matched: usize,
    /// Relationship count of the solution, the fixed denominator
    pub total: usize,
    /// Player relationships that failed to claim anything
    pub incorrect: usize,
}

impl ValidationReport {
    /// Percentage of the solution matched, rounded to the nearest
    /// integer. An empty solution is vacuously 100% complete.
    pub fn progress(&self) -> u8 {
        if self.total == 0 {
            100
        } else {
            ((self.matched as f64 / self.total as f64) * 100.0).round() as u8
        }
    }

    /// The level is won only when the whole solution is matched AND the
    /// player holds no extra relationships. Progress alone can reach 100
    /// with stray incorrect edges still on the board.
    pub fn is_win(&self) -> bool {
        self.matched == self.total && self.incorrect == 0
    }
}

/// Compare the player's relationships against the solution.
///
/// Matching is greedy first-fit in array order: each player relationship
/// claims the first unclaimed solution relationship it is equivalent to,
/// and each solution relationship can be claimed at most once. Duplicate
/// equivalent player relationships beyond the first therefore count as
/// incorrect.
pub fn validate(
    player_couples: &[CoupleRelationship],
    player_children: &[ChildRelationship],
    solution: &Solution,
) -> ValidationReport {
    let total = solution.couples.len() + solution.children.len();
    let mut matched = 0;

    let mut claimed_couples: HashSet<usize> = HashSet::new();
    for player in player_couples {
        for (i, candidate) in solution.couples.iter().enumerate() {
            if claimed_couples.contains(&i) {
                continue;
            }
            if player.is_equivalent(candidate) {
                matched += 1;
                claimed_couples.insert(i);
                break;
            }
        }
    }

    let mut claimed_children: HashSet<usize> = HashSet::new();
    for player in player_children {
        for (i, candidate) in solution.children.iter().enumerate() {
            if claimed_children.contains(&i) {
                continue;
            }
            if children_match(player, candidate, player_couples, &solution.couples) {
                matched += 1;
                claimed_children.insert(i);
                break;
            }
        }
    }

    // Claiming guarantees matched never exceeds the asserted count.
    let incorrect = player_couples.len() + player_children.len() - matched;

    ValidationReport {
        matched,
        total,
        incorrect,
    }
}

/// Whether a player child link satisfies a solution child link.
///
/// Single-parent links compare parent ids exactly. Couple links resolve
/// each side's couple id in its own collection and compare the resolved
/// couples for equivalence; a dangling id never matches.
fn children_match(
    player: &ChildRelationship,
    candidate: &ChildRelationship,
    player_couples: &[CoupleRelationship],
    solution_couples: &[CoupleRelationship],
) -> bool {
    if player.child_id != candidate.child_id {
        return false;
    }
    if player.child_type != candidate.child_type {
        return false;
    }

    match &candidate.parent {
        ParentLink::Person { parent_id } => player.parent.parent_id() == Some(parent_id.as_str()),
        ParentLink::Couple { couple_id } => {
            let Some(player_couple_id) = player.parent.couple_id() else {
                return false;
            };
            let Some(player_couple) = player_couples.iter().find(|c| c.id == player_couple_id)
            else {
                return false;
            };
            let Some(solution_couple) = solution_couples.iter().find(|c| &c.id == couple_id)
            else {
                return false;
            };
            player_couple.is_equivalent(solution_couple)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChildType, CoupleType};

    fn couple(id: &str, couple_type: CoupleType, a: &str, b: &str) -> CoupleRelationship {
        CoupleRelationship {
            id: id.to_string(),
            couple_type,
            person1_id: a.to_string(),
            person2_id: b.to_string(),
        }
    }

    fn couple_child(id: &str, couple_id: &str, child_id: &str) -> ChildRelationship {
        ChildRelationship {
            id: id.to_string(),
            parent: ParentLink::Couple {
                couple_id: couple_id.to_string(),
            },
            child_id: child_id.to_string(),
            child_type: ChildType::Biological,
        }
    }

    fn person_child(id: &str, parent_id: &str, child_id: &str) -> ChildRelationship {
        ChildRelationship {
            id: id.to_string(),
            parent: ParentLink::Person {
                parent_id: parent_id.to_string(),
            },
            child_id: child_id.to_string(),
            child_type: ChildType::Biological,
        }
    }

    fn one_family_solution() -> Solution {
        Solution {
            couples: vec![couple("c1", CoupleType::Married, "anna", "bert")],
            children: vec![couple_child("k1", "c1", "carl")],
        }
    }

    #[test]
    fn test_empty_solution_is_vacuously_won() {
        let report = validate(&[], &[], &Solution::default());
        assert_eq!(
            report,
            ValidationReport {
                matched: 0,
                total: 0,
                incorrect: 0
            }
        );
        assert_eq!(report.progress(), 100);
        assert!(report.is_win());
    }

    #[test]
    fn test_empty_player_state_scores_zero() {
        let report = validate(&[], &[], &one_family_solution());
        assert_eq!(
            report,
            ValidationReport {
                matched: 0,
                total: 2,
                incorrect: 0
            }
        );
        assert_eq!(report.progress(), 0);
        assert!(!report.is_win());
    }

    #[test]
    fn test_exact_match_with_swapped_pair_and_different_ids() {
        let solution = one_family_solution();
        let player_couples = vec![couple("pc1", CoupleType::Married, "bert", "anna")];
        let player_children = vec![couple_child("pk1", "pc1", "carl")];

        let report = validate(&player_couples, &player_children, &solution);
        assert_eq!(
            report,
            ValidationReport {
                matched: 2,
                total: 2,
                incorrect: 0
            }
        );
        assert_eq!(report.progress(), 100);
        assert!(report.is_win());
    }

    #[test]
    fn test_extra_relationship_blocks_win_at_full_progress() {
        let solution = one_family_solution();
        let player_couples = vec![
            couple("pc1", CoupleType::Married, "bert", "anna"),
            couple("pc2", CoupleType::Affair, "anna", "dora"),
        ];
        let player_children = vec![couple_child("pk1", "pc1", "carl")];

        let report = validate(&player_couples, &player_children, &solution);
        assert_eq!(
            report,
            ValidationReport {
                matched: 2,
                total: 2,
                incorrect: 1
            }
        );
        assert_eq!(report.progress(), 100);
        assert!(!report.is_win());
    }

    #[test]
    fn test_couple_type_mismatch_does_not_match() {
        let solution = one_family_solution();
        let player_couples = vec![couple("pc1", CoupleType::Divorced, "anna", "bert")];

        let report = validate(&player_couples, &[], &solution);
        assert_eq!(report.matched, 0);
        assert_eq!(report.incorrect, 1);
    }

    #[test]
    fn test_duplicate_couples_claim_a_solution_slot_only_once() {
        let solution = Solution {
            couples: vec![couple("c1", CoupleType::Married, "anna", "bert")],
            children: vec![],
        };
        let player_couples = vec![
            couple("pc1", CoupleType::Married, "anna", "bert"),
            couple("pc2", CoupleType::Married, "bert", "anna"),
        ];

        let report = validate(&player_couples, &[], &solution);
        assert_eq!(
            report,
            ValidationReport {
                matched: 1,
                total: 1,
                incorrect: 1
            }
        );
    }

    #[test]
    fn test_identical_solution_couples_are_claimed_in_order() {
        // Two structurally identical solution entries: each player copy
        // claims its own slot under greedy order-based claiming.
        let solution = Solution {
            couples: vec![
                couple("c1", CoupleType::Married, "anna", "bert"),
                couple("c2", CoupleType::Married, "anna", "bert"),
            ],
            children: vec![],
        };
        let player_couples = vec![
            couple("pc1", CoupleType::Married, "anna", "bert"),
            couple("pc2", CoupleType::Married, "bert", "anna"),
        ];

        let report = validate(&player_couples, &[], &solution);
        assert_eq!(report.matched, 2);
        assert_eq!(report.incorrect, 0);
        assert!(report.is_win());
    }

    #[test]
    fn test_single_parent_child_requires_exact_parent_id() {
        let solution = Solution {
            couples: vec![],
            children: vec![person_child("k1", "anna", "carl")],
        };

        let hit = validate(&[], &[person_child("pk1", "anna", "carl")], &solution);
        assert_eq!(hit.matched, 1);

        let miss = validate(&[], &[person_child("pk1", "bert", "carl")], &solution);
        assert_eq!(miss.matched, 0);
        assert_eq!(miss.incorrect, 1);
    }

    #[test]
    fn test_couple_child_does_not_match_single_parent_child() {
        let solution = Solution {
            couples: vec![],
            children: vec![person_child("k1", "anna", "carl")],
        };
        let player_couples = vec![couple("pc1", CoupleType::Married, "anna", "bert")];
        let player_children = vec![couple_child("pk1", "pc1", "carl")];

        let report = validate(&player_couples, &player_children, &solution);
        assert_eq!(report.matched, 0);
        assert_eq!(report.incorrect, 2);
    }

    #[test]
    fn test_child_type_mismatch_does_not_match() {
        let solution = Solution {
            couples: vec![],
            children: vec![person_child("k1", "anna", "carl")],
        };
        let mut adopted = person_child("pk1", "anna", "carl");
        adopted.child_type = ChildType::Adopted;

        let report = validate(&[], &[adopted], &solution);
        assert_eq!(report.matched, 0);
    }

    #[test]
    fn test_dangling_player_couple_id_never_matches() {
        let solution = one_family_solution();
        // Child references a player couple that does not exist.
        let player_children = vec![couple_child("pk1", "ghost", "carl")];

        let report = validate(&[], &player_children, &solution);
        assert_eq!(report.matched, 0);
        assert_eq!(report.incorrect, 1);
    }

    #[test]
    fn test_dangling_solution_couple_id_never_matches() {
        let solution = Solution {
            couples: vec![],
            children: vec![couple_child("k1", "ghost", "carl")],
        };
        let player_couples = vec![couple("pc1", CoupleType::Married, "anna", "bert")];
        let player_children = vec![couple_child("pk1", "pc1", "carl")];

        let report = validate(&player_couples, &player_children, &solution);
        assert_eq!(report.matched, 0);
    }

    #[test]
    fn test_couple_child_matches_through_equivalent_couples() {
        // Player couple has a different id and swapped members; the child
        // link still matches because the resolved couples are equivalent.
        let solution = Solution {
            couples: vec![couple("c9", CoupleType::Partnership, "anna", "bert")],
            children: vec![couple_child("k1", "c9", "carl")],
        };
        let player_couples = vec![couple("pc1", CoupleType::Partnership, "bert", "anna")];
        let player_children = vec![couple_child("pk1", "pc1", "carl")];

        let report = validate(&player_couples, &player_children, &solution);
        assert_eq!(report.matched, 2);
        assert!(report.is_win());
    }

    #[test]
    fn test_couple_child_mismatched_couple_type_does_not_match() {
        let solution = one_family_solution();
        let player_couples = vec![couple("pc1", CoupleType::Divorced, "anna", "bert")];
        let player_children = vec![couple_child("pk1", "pc1", "carl")];

        let report = validate(&player_couples, &player_children, &solution);
        // Neither the couple nor the child can match.
        assert_eq!(report.matched, 0);
        assert_eq!(report.incorrect, 2);
    }

    #[test]
    fn test_progress_rounds_to_nearest() {
        let report = ValidationReport {
            matched: 1,
            total: 3,
            incorrect: 0,
        };
        assert_eq!(report.progress(), 33);

        let report = ValidationReport {
            matched: 2,
            total: 3,
            incorrect: 0,
        };
        assert_eq!(report.progress(), 67);
    }
}
