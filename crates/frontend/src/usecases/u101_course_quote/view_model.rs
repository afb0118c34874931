use contracts::domain::a001_course::CourseId;
use contracts::usecases::u101_course_quote::{calculate, QuoteRequest, QuoteResponse};
use leptos::prelude::*;

/// Selection and result state for the quote form.
#[derive(Clone, Copy)]
pub struct QuoteViewModel {
    pub selected: RwSignal<Vec<CourseId>>,
    pub result: RwSignal<Option<QuoteResponse>>,
    pub is_loading: RwSignal<bool>,
    /// Toggles the result reveal animation; reset on every recalculation.
    pub revealed: RwSignal<bool>,
}

impl QuoteViewModel {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(Vec::new()),
            result: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            revealed: RwSignal::new(false),
        }
    }

    pub fn toggle(&self, id: CourseId, checked: bool) {
        self.selected.update(|selection| {
            if checked {
                if !selection.contains(&id) {
                    selection.push(id);
                }
            } else {
                selection.retain(|selected| *selected != id);
            }
        });
    }

    pub fn is_selected(&self, id: CourseId) -> bool {
        self.selected.with(|selection| selection.contains(&id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.with_untracked(|selection| selection.len())
    }

    pub fn calculate(&self) -> QuoteResponse {
        calculate(&QuoteRequest {
            course_ids: self.selected.get_untracked(),
        })
    }

    pub fn clear(&self) {
        self.selected.set(Vec::new());
        self.result.set(None);
        self.revealed.set(false);
    }
}

impl Default for QuoteViewModel {
    fn default() -> Self {
        Self::new()
    }
}
