/// UseCase metadata for identification and documentation
pub trait UseCaseMetadata {
    /// UseCase index (for example "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (for example "course_quote")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u101_course_quote"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
