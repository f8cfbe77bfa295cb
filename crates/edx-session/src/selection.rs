//! Cascading subject → topic → subtopic selection for a Part Test.
//!
//! Each slot only ever holds a value valid for its ancestors: re-choosing a
//! subject clears the topic and subtopic, re-choosing a topic clears the
//! subtopic. Option lists are always derived from the syllabus, so an
//! invalid value cannot be submitted through the intended interface and the
//! setters do not validate against it.

use edx_model::Syllabus;

/// Three dependent selection slots over a borrowed syllabus.
#[derive(Debug, Clone)]
pub struct TopicSelection<'a> {
    syllabus: &'a Syllabus,
    subject: Option<String>,
    topic: Option<String>,
    subtopic: Option<String>,
}

impl<'a> TopicSelection<'a> {
    pub fn new(syllabus: &'a Syllabus) -> Self {
        Self {
            syllabus,
            subject: None,
            topic: None,
            subtopic: None,
        }
    }

    pub fn syllabus(&self) -> &'a Syllabus {
        self.syllabus
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn subtopic(&self) -> Option<&str> {
        self.subtopic.as_deref()
    }

    /// Assign the subject slot. Always clears topic and subtopic, whatever
    /// their previous values.
    pub fn set_subject(&mut self, subject: Option<&str>) {
        self.subject = subject.map(str::to_string);
        self.topic = None;
        self.subtopic = None;
    }

    /// Assign the topic slot. Ignored while no subject is chosen; clears the
    /// subtopic.
    pub fn set_topic(&mut self, topic: Option<&str>) {
        if self.subject.is_none() {
            return;
        }
        self.topic = topic.map(str::to_string);
        self.subtopic = None;
    }

    /// Assign the subtopic slot. Ignored while no topic is chosen.
    pub fn set_subtopic(&mut self, subtopic: Option<&str>) {
        if self.topic.is_none() {
            return;
        }
        self.subtopic = subtopic.map(str::to_string);
    }

    /// Ordered topic options under the current subject.
    ///
    /// The returned names borrow the syllabus, not the selection, so callers
    /// may feed one straight back into a setter.
    pub fn available_topics(&self) -> Vec<&'a str> {
        match &self.subject {
            Some(subject) => self.syllabus.topics_of(subject),
            None => Vec::new(),
        }
    }

    /// Ordered subtopic options under the current subject + topic.
    pub fn available_subtopics(&self) -> Vec<&'a str> {
        match (&self.subject, &self.topic) {
            (Some(subject), Some(topic)) => self.syllabus.subtopics_of(subject, topic),
            _ => Vec::new(),
        }
    }

    /// True exactly when all three slots are set. This is the sole gate for
    /// the start action.
    pub fn is_complete(&self) -> bool {
        self.subject.is_some() && self.topic.is_some() && self.subtopic.is_some()
    }

    /// The confirmed path, e.g. "Biology / Botany / Plant Kingdom".
    pub fn summary_path(&self) -> Option<String> {
        match (&self.subject, &self.topic, &self.subtopic) {
            (Some(subject), Some(topic), Some(subtopic)) => {
                Some(format!("{subject} / {topic} / {subtopic}"))
            }
            _ => None,
        }
    }
}
