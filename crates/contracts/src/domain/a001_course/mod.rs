//! Course catalogue domain module.
//!
//! The training programmes offered on the site: six-month learnerships and
//! six-week short courses. The catalogue is a compile-time constant set.

pub mod aggregate;

pub use aggregate::{catalog, find_course, Course, CourseDuration, CourseId};
