use uuid::{uuid, Uuid};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CourseId)
            .map_err(|e| format!("Invalid course id: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Duration class of a programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseDuration {
    SixMonths,
    SixWeeks,
}

impl CourseDuration {
    pub fn display_name(&self) -> &'static str {
        match self {
            CourseDuration::SixMonths => "6-month learnership",
            CourseDuration::SixWeeks => "6-week short course",
        }
    }
}

/// One training programme in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub code: &'static str,
    pub name: &'static str,
    pub duration: CourseDuration,
    /// Course fee in rand.
    pub fee: f64,
    pub summary: &'static str,
}

const SIX_MONTH_FEE: f64 = 1500.0;
const SIX_WEEK_FEE: f64 = 750.0;

const CATALOG: [Course; 7] = [
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a01")),
        code: "first-aid",
        name: "First Aid",
        duration: CourseDuration::SixMonths,
        fee: SIX_MONTH_FEE,
        summary: "First aid awareness and basic life support.",
    },
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a02")),
        code: "sewing",
        name: "Sewing",
        duration: CourseDuration::SixMonths,
        fee: SIX_MONTH_FEE,
        summary: "Alterations and new garment tailoring skills.",
    },
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a03")),
        code: "landscaping",
        name: "Landscaping",
        duration: CourseDuration::SixMonths,
        fee: SIX_MONTH_FEE,
        summary: "Landscaping services for new and established gardens.",
    },
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a04")),
        code: "life-skills",
        name: "Life Skills",
        duration: CourseDuration::SixMonths,
        fee: SIX_MONTH_FEE,
        summary: "Skills to navigate basic life necessities.",
    },
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a05")),
        code: "child-minding",
        name: "Child Minding",
        duration: CourseDuration::SixWeeks,
        fee: SIX_WEEK_FEE,
        summary: "Birth to six-month, seven-month to one-year and toddler care.",
    },
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a06")),
        code: "cooking",
        name: "Cooking",
        duration: CourseDuration::SixWeeks,
        fee: SIX_WEEK_FEE,
        summary: "Nutritious family meals, planned and prepared.",
    },
    Course {
        id: CourseId(uuid!("5f1c9b04-8a6e-4a0f-9d2c-1a6f3f0b9a07")),
        code: "garden-maintenance",
        name: "Garden Maintenance",
        duration: CourseDuration::SixWeeks,
        fee: SIX_WEEK_FEE,
        summary: "Watering, pruning and planting in a domestic garden.",
    },
];

/// The full catalogue, in display order.
pub fn catalog() -> &'static [Course] {
    &CATALOG
}

/// Look a course up by id.
pub fn find_course(id: CourseId) -> Option<&'static Course> {
    CATALOG.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_courses_with_unique_ids() {
        let courses = catalog();
        assert_eq!(courses.len(), 7);
        for (i, a) in courses.iter().enumerate() {
            for b in &courses[i + 1..] {
                assert_ne!(a.id, b.id, "{} and {} share an id", a.code, b.code);
            }
        }
    }

    #[test]
    fn test_fees_match_duration_class() {
        for course in catalog() {
            match course.duration {
                CourseDuration::SixMonths => assert_eq!(course.fee, 1500.0),
                CourseDuration::SixWeeks => assert_eq!(course.fee, 750.0),
            }
        }
    }

    #[test]
    fn test_find_course_by_id() {
        let sewing = catalog().iter().find(|c| c.code == "sewing").unwrap();
        assert_eq!(find_course(sewing.id), Some(sewing));
    }

    #[test]
    fn test_course_id_string_round_trip() {
        let id = catalog()[0].id;
        let parsed = CourseId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(CourseId::from_string("not-a-uuid").is_err());
    }
}
