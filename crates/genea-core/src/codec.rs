//! Obfuscating codec for the answer key.
//!
//! Levels ship their solution as a base64-wrapped JSON string so the
//! answer is not readable at a glance in the level file. This is
//! obfuscation, not security: anyone who wants to cheat can decode it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::model::Solution;

/// Failure to decode an embedded solution. Fatal for the level load:
/// there is no partial solution to fall back on.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("solution payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("solution payload is not a valid solution: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Encode a solution for embedding in level data. Used by authoring
/// tools, not at play time.
pub fn encode_solution(solution: &Solution) -> String {
    let json = serde_json::to_vec(solution).expect("solution serializes to JSON");
    STANDARD.encode(json)
}

/// Decode an embedded solution string. Inverse of [`encode_solution`]:
/// `decode_solution(&encode_solution(s))` yields a value equal to `s`.
pub fn decode_solution(encoded: &str) -> Result<Solution, DecodeError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let solution = serde_json::from_slice(&bytes)?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChildRelationship, ChildType, CoupleRelationship, CoupleType, ParentLink};

    fn sample_solution() -> Solution {
        Solution {
            couples: vec![CoupleRelationship {
                id: "c1".to_string(),
                couple_type: CoupleType::Married,
                person1_id: "anna".to_string(),
                person2_id: "bert".to_string(),
            }],
            children: vec![
                ChildRelationship {
                    id: "k1".to_string(),
                    parent: ParentLink::Couple {
                        couple_id: "c1".to_string(),
                    },
                    child_id: "carl".to_string(),
                    child_type: ChildType::Biological,
                },
                ChildRelationship {
                    id: "k2".to_string(),
                    parent: ParentLink::Person {
                        parent_id: "anna".to_string(),
                    },
                    child_id: "dora".to_string(),
                    child_type: ChildType::Adopted,
                },
            ],
        }
    }

    #[test]
    fn test_round_trip() {
        let solution = sample_solution();
        let encoded = encode_solution(&solution);
        let decoded = decode_solution(&encoded).unwrap();
        assert_eq!(decoded, solution);
    }

    #[test]
    fn test_round_trip_empty_solution() {
        let solution = Solution::default();
        let decoded = decode_solution(&encode_solution(&solution)).unwrap();
        assert_eq!(decoded, solution);
    }

    #[test]
    fn test_encoded_form_is_not_plain_json() {
        let encoded = encode_solution(&sample_solution());
        assert!(!encoded.contains("anna"));
        assert!(!encoded.contains('{'));
    }

    #[test]
    fn test_decode_rejects_garbage_base64() {
        let err = decode_solution("not base64 at all!!!").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_decode_rejects_valid_base64_of_garbage() {
        let encoded = STANDARD.encode(b"{\"couples\": 7}");
        let err = decode_solution(&encoded).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let encoded = format!("  {}\n", encode_solution(&sample_solution()));
        assert!(decode_solution(&encoded).is_ok());
    }

    #[test]
    fn test_decodes_hand_written_payload_with_omitted_child_type() {
        // Level authors may omit the child type; it defaults to biological.
        let payload = r#"{"couples":[],"children":[{"id":"k1","parentId":"anna","childId":"bert"}]}"#;
        let encoded = STANDARD.encode(payload);
        let solution = decode_solution(&encoded).unwrap();
        assert_eq!(solution.children[0].child_type, ChildType::Biological);
    }
}
