//! Debounced multi-field book search.
//!
//! DESIGN
//! ======
//! [`SearchController`] is a pure state machine. Each event goes through
//! [`SearchController::apply`], which returns a [`Transition`] naming the
//! timer work and the search (if any) to dispatch. The browser driver in
//! `util::debounce` owns the actual timer and the fetch; tests drive the
//! machine with a fake clock.
//!
//! Armed timers are stamped with a generation. A fire whose generation is
//! no longer current is ignored, so at most one timer is ever live even if
//! the driver cannot cancel a sleeping task.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One of the three free-text filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub const ALL: [Self; 3] = [Self::Title, Self::Author, Self::Genre];

    /// Query parameter name understood by `GET /books`.
    pub fn param(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Search by title...",
            Self::Author => "Search by author...",
            Self::Genre => "Search by genre...",
        }
    }
}

/// Filter values. An empty (or whitespace-only) field imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl SearchFilters {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Genre => &self.genre,
        }
    }

    pub fn set(&mut self, field: SearchField, value: String) {
        match field {
            SearchField::Title => self.title = value,
            SearchField::Author => self.author = value,
            SearchField::Genre => self.genre = value,
        }
    }

    /// Whether at least one field narrows the result set.
    pub fn has_constraint(&self) -> bool {
        SearchField::ALL.iter().any(|f| !self.get(*f).trim().is_empty())
    }

    /// Query pairs for the constrained fields only, values trimmed.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        SearchField::ALL
            .iter()
            .map(|f| (f.param(), self.get(*f).trim()))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}

/// Where the controller is in the edit -> search cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search is active and no timer is armed.
    #[default]
    Idle,
    /// The user is typing and a timer is armed. `active` records whether the
    /// results on screen come from an earlier filtered search.
    TypingPending { active: bool },
    /// The last search was dispatched and its values are the baseline.
    Settled,
    /// All fields went empty and the unfiltered search was sent. Further
    /// empty edits are ignored until a field becomes nonempty.
    ResetIssued,
}

impl SearchPhase {
    fn has_active_search(self) -> bool {
        matches!(self, Self::Settled | Self::TypingPending { active: true })
    }
}

/// Input to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    Edit { field: SearchField, value: String },
    Clear,
    TimerFired { generation: u64 },
    ForceTrigger,
}

/// Timer work requested by a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerCommand {
    #[default]
    Keep,
    /// Replace any armed timer with one firing `generation` after `delay`.
    Arm { generation: u64, delay: Duration },
    Cancel,
}

/// Output of one [`SearchController::apply`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub timer: TimerCommand,
    /// Filters to hand to `on_search` right now.
    pub search: Option<SearchFilters>,
}

impl Transition {
    fn timer(timer: TimerCommand) -> Self {
        Self { timer, search: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchController {
    filters: SearchFilters,
    baseline: SearchFilters,
    phase: SearchPhase,
    generation: u64,
    delay: Duration,
}

impl SearchController {
    /// Construction never dispatches; call [`Self::force_trigger`] to replay
    /// restored filters.
    pub fn new(delay: Duration, initial: SearchFilters) -> Self {
        Self { baseline: initial.clone(), filters: initial, phase: SearchPhase::Idle, generation: 0, delay }
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Values of the last dispatched search.
    #[cfg(test)]
    pub fn baseline(&self) -> &SearchFilters {
        &self.baseline
    }

    #[cfg(test)]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn has_active_search(&self) -> bool {
        self.phase.has_active_search()
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.phase, SearchPhase::TypingPending { .. })
    }

    pub fn update(&mut self, field: SearchField, value: impl Into<String>) -> Transition {
        self.apply(SearchEvent::Edit { field, value: value.into() })
    }

    pub fn clear(&mut self) -> Transition {
        self.apply(SearchEvent::Clear)
    }

    pub fn timer_fired(&mut self, generation: u64) -> Transition {
        self.apply(SearchEvent::TimerFired { generation })
    }

    pub fn force_trigger(&mut self) -> Transition {
        self.apply(SearchEvent::ForceTrigger)
    }

    pub fn apply(&mut self, event: SearchEvent) -> Transition {
        match event {
            SearchEvent::Edit { field, value } => {
                if self.filters.get(field) == value {
                    return Transition::default();
                }
                self.filters.set(field, value);
                self.after_edit(false)
            }
            SearchEvent::Clear => {
                self.filters = SearchFilters::default();
                self.after_edit(true)
            }
            SearchEvent::TimerFired { generation } => {
                if generation != self.generation || !self.is_typing() || !self.filters.has_constraint() {
                    return Transition::default();
                }
                self.phase = SearchPhase::Settled;
                Transition { timer: TimerCommand::Keep, search: Some(self.commit()) }
            }
            SearchEvent::ForceTrigger => {
                if !self.filters.has_constraint() {
                    return Transition::default();
                }
                let timer = self.disarm();
                self.phase = SearchPhase::Settled;
                Transition { timer, search: Some(self.commit()) }
            }
        }
    }

    /// Shared path for keystrokes and explicit clears. `reset_guard_cleared`
    /// lets an explicit clear issue the reset even after an earlier one.
    fn after_edit(&mut self, reset_guard_cleared: bool) -> Transition {
        let active = self.phase.has_active_search();

        if self.filters.has_constraint() {
            self.generation += 1;
            self.phase = SearchPhase::TypingPending { active };
            return Transition::timer(TimerCommand::Arm { generation: self.generation, delay: self.delay });
        }

        let timer = self.disarm();
        let reset_issued = self.phase == SearchPhase::ResetIssued && !reset_guard_cleared;
        if active && !reset_issued {
            self.phase = SearchPhase::ResetIssued;
            return Transition { timer, search: Some(self.commit()) };
        }
        if !reset_issued {
            self.phase = SearchPhase::Idle;
        }
        Transition::timer(timer)
    }

    fn disarm(&mut self) -> TimerCommand {
        if self.is_typing() {
            self.generation += 1;
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        }
    }

    fn commit(&mut self) -> SearchFilters {
        self.baseline = self.filters.clone();
        self.filters.clone()
    }
}
