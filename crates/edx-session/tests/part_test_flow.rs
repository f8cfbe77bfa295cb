//! End-to-end Part Test flow: exam → subject → topic → subtopic → plan.

use edx_catalog::catalog;
use edx_session::{PartTestPlan, TopicSelection};

#[test]
fn neet_biology_flow_reaches_confirmation() {
    // Select exam "neet".
    let exam = catalog().get("neet").expect("neet is a built-in exam");

    // Part Test mode: cascade through the three selectors.
    let mut selection = TopicSelection::new(&exam.syllabus);
    assert!(!selection.is_complete());

    selection.set_subject(Some("Biology"));
    assert!(selection.available_topics().contains(&"Botany"));

    selection.set_topic(Some("Botany"));
    assert!(selection.available_subtopics().contains(&"Plant Kingdom"));

    selection.set_subtopic(Some("Plant Kingdom"));

    // Confirmation shows the exact path and the start gate is open.
    assert!(selection.is_complete());
    assert_eq!(
        selection.summary_path().as_deref(),
        Some("Biology / Botany / Plant Kingdom")
    );

    let plan = PartTestPlan::from_selection(&exam.summary.id, &selection)
        .expect("complete selection yields a plan");
    assert_eq!(plan.to_string(), "Biology / Botany / Plant Kingdom");
    assert_eq!(plan.exam_id.as_str(), "neet");
}

#[test]
fn revisiting_subject_reopens_the_gate() {
    let exam = catalog().get("neet").unwrap();
    let mut selection = TopicSelection::new(&exam.syllabus);

    selection.set_subject(Some("Biology"));
    selection.set_topic(Some("Botany"));
    selection.set_subtopic(Some("Plant Kingdom"));
    assert!(selection.is_complete());

    // Re-choosing an ancestor is the only "back" transition.
    selection.set_subject(Some("Physics"));
    assert!(!selection.is_complete());
    assert!(PartTestPlan::from_selection(&exam.summary.id, &selection).is_none());
}
