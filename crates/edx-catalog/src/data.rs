//! The built-in exam content: card metadata and full syllabi for the three
//! supported examinations.
//!
//! Everything here is reference data transcribed verbatim; ordering is
//! significant and rendered as-is by the selection screens.

use edx_model::{ExamId, ExamSummary, SubjectSyllabus, Syllabus, TopicSyllabus};

use crate::catalog::ExamEntry;

fn subject(name: &str, topics: Vec<TopicSyllabus>) -> SubjectSyllabus {
    SubjectSyllabus {
        name: name.to_string(),
        topics,
    }
}

fn topic(name: &str, subtopics: &[&str]) -> TopicSyllabus {
    TopicSyllabus {
        name: name.to_string(),
        subtopics: subtopics.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn summary(
    id: &str,
    name: &str,
    description: &str,
    subjects: &[&str],
    duration_label: &str,
    question_count: u32,
    emblem: &str,
) -> ExamSummary {
    ExamSummary {
        id: ExamId::new(id).expect("builtin exam id"),
        name: name.to_string(),
        description: description.to_string(),
        subjects: subjects.iter().map(|s| (*s).to_string()).collect(),
        duration_label: duration_label.to_string(),
        question_count,
        emblem: emblem.to_string(),
    }
}

fn jee_main() -> ExamEntry {
    ExamEntry {
        summary: summary(
            "jee-main",
            "JEE Main",
            "Joint Entrance Examination for engineering admissions",
            &["Physics", "Chemistry", "Mathematics"],
            "3 hours",
            90,
            "🎯",
        ),
        syllabus: Syllabus {
            subjects: vec![
                subject(
                    "Physics",
                    vec![
                        topic(
                            "Mechanics",
                            &[
                                "Kinematics",
                                "Laws of Motion",
                                "Work Power Energy",
                                "Rotational Motion",
                            ],
                        ),
                        topic(
                            "Thermodynamics",
                            &["First Law", "Second Law", "Kinetic Theory", "Heat Transfer"],
                        ),
                        topic(
                            "Electricity",
                            &[
                                "Electrostatics",
                                "Current Electricity",
                                "Magnetism",
                                "Electromagnetic Induction",
                            ],
                        ),
                    ],
                ),
                subject(
                    "Chemistry",
                    vec![
                        topic(
                            "Physical Chemistry",
                            &[
                                "Atomic Structure",
                                "Chemical Bonding",
                                "Thermodynamics",
                                "Equilibrium",
                            ],
                        ),
                        topic(
                            "Organic Chemistry",
                            &[
                                "Hydrocarbons",
                                "Biomolecules",
                                "Polymers",
                                "Chemistry in Everyday Life",
                            ],
                        ),
                        topic(
                            "Inorganic Chemistry",
                            &[
                                "Periodic Table",
                                "s-Block Elements",
                                "p-Block Elements",
                                "d-Block Elements",
                            ],
                        ),
                    ],
                ),
                subject(
                    "Mathematics",
                    vec![
                        topic(
                            "Algebra",
                            &[
                                "Complex Numbers",
                                "Quadratic Equations",
                                "Sequences & Series",
                                "Permutations & Combinations",
                            ],
                        ),
                        topic(
                            "Calculus",
                            &["Limits", "Derivatives", "Integrals", "Differential Equations"],
                        ),
                        topic(
                            "Coordinate Geometry",
                            &["Straight Lines", "Circles", "Parabola", "Ellipse & Hyperbola"],
                        ),
                    ],
                ),
            ],
        },
    }
}

fn neet() -> ExamEntry {
    ExamEntry {
        summary: summary(
            "neet",
            "NEET",
            "National Eligibility cum Entrance Test for medical admissions",
            &["Physics", "Chemistry", "Biology"],
            "3 hours 20 min",
            180,
            "🏥",
        ),
        syllabus: Syllabus {
            subjects: vec![
                subject(
                    "Physics",
                    vec![
                        topic(
                            "Mechanics",
                            &[
                                "Kinematics",
                                "Laws of Motion",
                                "Work Power Energy",
                                "Gravitation",
                            ],
                        ),
                        topic(
                            "Thermodynamics",
                            &["First Law", "Second Law", "Kinetic Theory"],
                        ),
                        topic(
                            "Optics",
                            &["Ray Optics", "Wave Optics", "Optical Instruments"],
                        ),
                    ],
                ),
                subject(
                    "Chemistry",
                    vec![
                        topic(
                            "Physical Chemistry",
                            &["Atomic Structure", "Chemical Bonding", "States of Matter"],
                        ),
                        topic(
                            "Organic Chemistry",
                            &["Basic Principles", "Hydrocarbons", "Biomolecules"],
                        ),
                        topic(
                            "Inorganic Chemistry",
                            &["Periodic Table", "Chemical Bonding", "Coordination Compounds"],
                        ),
                    ],
                ),
                subject(
                    "Biology",
                    vec![
                        topic(
                            "Botany",
                            &["Plant Kingdom", "Morphology", "Anatomy", "Reproduction"],
                        ),
                        topic(
                            "Zoology",
                            &[
                                "Animal Kingdom",
                                "Human Physiology",
                                "Reproduction",
                                "Genetics",
                            ],
                        ),
                        topic(
                            "Ecology",
                            &["Ecosystem", "Environment", "Biodiversity", "Evolution"],
                        ),
                    ],
                ),
            ],
        },
    }
}

fn eamcet() -> ExamEntry {
    ExamEntry {
        summary: summary(
            "eamcet",
            "EAMCET",
            "Engineering, Agriculture & Medical Common Entrance Test",
            &["Physics", "Chemistry", "Mathematics/Biology"],
            "3 hours",
            160,
            "🎓",
        ),
        syllabus: Syllabus {
            subjects: vec![
                subject(
                    "Physics",
                    vec![
                        topic(
                            "Mechanics",
                            &[
                                "Motion in One Dimension",
                                "Motion in Two Dimensions",
                                "Laws of Motion",
                            ],
                        ),
                        topic(
                            "Heat & Thermodynamics",
                            &["Thermal Properties", "Kinetic Theory", "First Law"],
                        ),
                        topic(
                            "Electricity",
                            &["Electrostatics", "Current Electricity", "Magnetic Effects"],
                        ),
                    ],
                ),
                subject(
                    "Chemistry",
                    vec![
                        topic(
                            "Physical Chemistry",
                            &["Atomic Structure", "Chemical Bonding", "Gaseous State"],
                        ),
                        topic(
                            "Organic Chemistry",
                            &["Basic Principles", "Hydrocarbons", "Halogen Derivatives"],
                        ),
                        topic(
                            "Inorganic Chemistry",
                            &[
                                "Periodic Classification",
                                "s-Block Elements",
                                "p-Block Elements",
                            ],
                        ),
                    ],
                ),
                subject(
                    "Mathematics",
                    vec![
                        topic(
                            "Algebra",
                            &["Functions", "Mathematical Induction", "Complex Numbers"],
                        ),
                        topic(
                            "Trigonometry",
                            &["Trigonometric Functions", "Inverse Functions", "Equations"],
                        ),
                        topic(
                            "Calculus",
                            &["Limits & Continuity", "Differentiation", "Integration"],
                        ),
                    ],
                ),
            ],
        },
    }
}

/// All built-in exams in home-page display order.
pub(crate) fn builtin_exams() -> Vec<ExamEntry> {
    vec![jee_main(), neet(), eamcet()]
}
