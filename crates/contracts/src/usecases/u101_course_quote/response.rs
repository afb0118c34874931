use serde::{Deserialize, Serialize};

/// One line of an itemised quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    #[serde(rename = "courseId")]
    pub course_id: String,
    pub name: String,
    pub fee: f64,
}

/// An itemised quote with discount and VAT applied.
///
/// All amounts are in rand; rounding happens at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub lines: Vec<QuoteLine>,
    pub subtotal: f64,
    #[serde(rename = "discountRate")]
    pub discount_rate: f64,
    pub discount: f64,
    pub vat: f64,
    pub total: f64,
}
