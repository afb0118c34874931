pub mod u101_course_quote;
