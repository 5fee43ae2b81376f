//! Basic example of playing a level against the engine

use genea_core::{
    encode_solution, ChildRelationship, ChildType, CoupleRelationship, CoupleType, Difficulty,
    Gender, Level, ParentLink, Person, Point, Session, Solution, ValidationRules,
};

fn person(id: &str, name: &str, x: f64, y: f64, gender: Gender) -> Person {
    Person {
        id: id.to_string(),
        display_name: name.to_string(),
        known_facts: vec![],
        position: Point { x, y },
        gender,
    }
}

fn main() {
    // Author a tiny level: Anna and Bert are married, Carl is their son.
    let solution = Solution {
        couples: vec![CoupleRelationship {
            id: "c1".to_string(),
            couple_type: CoupleType::Married,
            person1_id: "anna".to_string(),
            person2_id: "bert".to_string(),
        }],
        children: vec![ChildRelationship {
            id: "k1".to_string(),
            parent: ParentLink::Couple {
                couple_id: "c1".to_string(),
            },
            child_id: "carl".to_string(),
            child_type: ChildType::Biological,
        }],
    };

    let level = Level {
        level_id: "demo".to_string(),
        title: "The Demo Family".to_string(),
        difficulty: Difficulty::Easy,
        timeframe: "1900-1950".to_string(),
        documents: vec![],
        initial_people: vec![
            person("anna", "Anna", 100.0, 50.0, Gender::Female),
            person("bert", "Bert", 300.0, 50.0, Gender::Male),
            person("carl", "Carl", 200.0, 200.0, Gender::Male),
        ],
        solution_encoded: encode_solution(&solution),
        validation_rules: ValidationRules {
            required_relationships: 2,
            total_points: 100,
        },
    };

    println!("Encoded solution: {}\n", level.solution_encoded);

    // Play it.
    let mut session = Session::new(level).expect("demo solution decodes");

    println!("Connecting Bert and Anna as married...");
    session
        .connect_couple(CoupleType::Married, "bert", "anna")
        .expect("both people exist");
    let report = session.validation();
    println!("Progress: {}% ({}/{})", report.progress(), report.matched, report.total);

    println!("Making Carl a child of that couple...");
    let couple_id = session.state().couples()[0].id.clone();
    session
        .connect_child_of_couple(&couple_id, "carl", ChildType::Biological)
        .expect("carl exists and is not a member of the couple");

    let report = session.validation();
    println!(
        "Progress: {}% ({}/{}), win: {}",
        report.progress(),
        report.matched,
        report.total,
        report.is_win()
    );

    // A wrong extra edge keeps progress at 100 but blocks the win.
    println!("\nAdding a stray affair between Anna and Carl's spots...");
    session
        .connect_couple(CoupleType::Affair, "anna", "carl")
        .expect("both people exist");
    let report = session.validation();
    println!(
        "Progress: {}%, incorrect: {}, win: {}",
        report.progress(),
        report.incorrect,
        report.is_win()
    );

    println!("Undoing it...");
    session.undo();
    let report = session.validation();
    println!("Win: {}", report.is_win());
}
