use crate::domain::a001_course::CourseId;

/// Selection of courses to quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteRequest {
    pub course_ids: Vec<CourseId>,
}

impl QuoteRequest {
    /// The selected ids with duplicates removed, preserving order.
    pub fn unique_course_ids(&self) -> Vec<CourseId> {
        let mut seen = Vec::new();
        for id in &self.course_ids {
            if !seen.contains(id) {
                seen.push(*id);
            }
        }
        seen
    }
}
