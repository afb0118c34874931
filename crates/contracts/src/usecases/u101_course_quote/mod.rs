//! Course quote calculation.
//!
//! Given a selection of courses, produce an itemised quote with the
//! multi-course discount and VAT applied. Pure arithmetic; the frontend
//! owns the selection state and the presentation.

pub mod request;
pub mod response;

pub use request::QuoteRequest;
pub use response::{QuoteLine, QuoteResponse};

use crate::domain::a001_course::find_course;
use crate::usecases::common::UseCaseMetadata;

/// Multi-course discount rate for a given number of selected courses.
///
/// One course earns no discount; two earn 5%, three 10%, more than three 15%.
pub fn discount_rate(course_count: usize) -> f64 {
    match course_count {
        0 | 1 => 0.0,
        2 => 0.05,
        3 => 0.10,
        _ => 0.15,
    }
}

/// VAT rate applied to the discounted subtotal.
pub const VAT_RATE: f64 = 0.15;

/// Calculate a quote for the selection.
///
/// Duplicate ids are counted once; ids not present in the catalogue are
/// ignored. Total function: an empty selection yields an all-zero quote.
pub fn calculate(request: &QuoteRequest) -> QuoteResponse {
    let mut lines: Vec<QuoteLine> = Vec::new();
    for id in request.unique_course_ids() {
        if let Some(course) = find_course(id) {
            lines.push(QuoteLine {
                course_id: course.id.as_string(),
                name: course.name.to_string(),
                fee: course.fee,
            });
        }
    }

    let subtotal: f64 = lines.iter().map(|line| line.fee).sum();
    let rate = discount_rate(lines.len());
    let discount = subtotal * rate;
    let discounted = subtotal - discount;
    let vat = discounted * VAT_RATE;
    let total = discounted + vat;

    QuoteResponse {
        lines,
        subtotal,
        discount_rate: rate,
        discount,
        vat,
        total,
    }
}

pub struct CourseQuote;

impl UseCaseMetadata for CourseQuote {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "course_quote"
    }

    fn display_name() -> &'static str {
        "Request a Quote"
    }

    fn description() -> &'static str {
        "Itemised fee quote for a selection of training courses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_course::catalog;

    fn ids_of(codes: &[&str]) -> QuoteRequest {
        let course_ids = catalog()
            .iter()
            .filter(|c| codes.contains(&c.code))
            .map(|c| c.id)
            .collect();
        QuoteRequest { course_ids }
    }

    #[test]
    fn test_discount_tiers() {
        assert_eq!(discount_rate(0), 0.0);
        assert_eq!(discount_rate(1), 0.0);
        assert_eq!(discount_rate(2), 0.05);
        assert_eq!(discount_rate(3), 0.10);
        assert_eq!(discount_rate(4), 0.15);
        assert_eq!(discount_rate(7), 0.15);
    }

    #[test]
    fn test_single_course_has_no_discount() {
        let quote = calculate(&ids_of(&["first-aid"]));
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.subtotal, 1500.0);
        assert_eq!(quote.discount, 0.0);
        assert_eq!(quote.vat, 225.0);
        assert_eq!(quote.total, 1725.0);
    }

    #[test]
    fn test_two_courses_get_five_percent_off() {
        let quote = calculate(&ids_of(&["first-aid", "cooking"]));
        assert_eq!(quote.subtotal, 2250.0);
        assert_eq!(quote.discount_rate, 0.05);
        assert_eq!(quote.discount, 112.5);
        // VAT applies to the discounted amount.
        assert_eq!(quote.vat, (2250.0 - 112.5) * 0.15);
        assert_eq!(quote.total, (2250.0 - 112.5) * 1.15);
    }

    #[test]
    fn test_more_than_three_courses_get_fifteen_percent_off() {
        let quote = calculate(&ids_of(&["first-aid", "sewing", "cooking", "child-minding"]));
        assert_eq!(quote.lines.len(), 4);
        assert_eq!(quote.discount_rate, 0.15);
    }

    #[test]
    fn test_duplicates_and_unknown_ids_are_ignored() {
        let mut request = ids_of(&["sewing"]);
        let id = request.course_ids[0];
        request.course_ids.push(id);
        request
            .course_ids
            .push(crate::domain::a001_course::CourseId(uuid::Uuid::nil()));

        let quote = calculate(&request);
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.subtotal, 1500.0);
    }

    #[test]
    fn test_empty_selection_yields_zero_quote() {
        let quote = calculate(&QuoteRequest { course_ids: vec![] });
        assert!(quote.lines.is_empty());
        assert_eq!(quote.total, 0.0);
    }

    #[test]
    fn test_usecase_full_name() {
        assert_eq!(CourseQuote::full_name(), "u101_course_quote");
    }
}
