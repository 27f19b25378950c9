use super::*;

const DELAY: Duration = Duration::from_millis(500);

/// Drives a controller the way the browser driver does, with a manual clock.
///
/// Armed timers are never cancelled here so stale generations still fire;
/// the controller has to ignore them on its own.
struct Harness {
    controller: SearchController,
    now_ms: u64,
    timers: Vec<(u64, u64)>,
    searches: Vec<SearchFilters>,
}

impl Harness {
    fn new(initial: SearchFilters) -> Self {
        Self { controller: SearchController::new(DELAY, initial), now_ms: 0, timers: Vec::new(), searches: Vec::new() }
    }

    fn empty() -> Self {
        Self::new(SearchFilters::default())
    }

    fn record(&mut self, transition: Transition) {
        if let TimerCommand::Arm { generation, delay } = transition.timer {
            let due = self.now_ms + u64::try_from(delay.as_millis()).unwrap();
            self.timers.push((due, generation));
        }
        if let Some(filters) = transition.search {
            self.searches.push(filters);
        }
    }

    fn update(&mut self, field: SearchField, value: &str) {
        let t = self.controller.update(field, value);
        self.record(t);
    }

    fn clear(&mut self) {
        let t = self.controller.clear();
        self.record(t);
    }

    fn force_trigger(&mut self) {
        let t = self.controller.force_trigger();
        self.record(t);
    }

    fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        let now = self.now_ms;
        let (due, pending): (Vec<_>, Vec<_>) = self.timers.drain(..).partition(|(at, _)| *at <= now);
        self.timers = pending;
        for (_, generation) in due {
            let t = self.controller.timer_fired(generation);
            self.record(t);
        }
    }
}

fn filters(title: &str, author: &str, genre: &str) -> SearchFilters {
    SearchFilters { title: title.to_owned(), author: author.to_owned(), genre: genre.to_owned() }
}

// =============================================================
// SearchFilters
// =============================================================

#[test]
fn whitespace_only_fields_impose_no_constraint() {
    assert!(!filters("  ", "", "\t").has_constraint());
    assert!(filters("", "Herbert", "").has_constraint());
}

#[test]
fn query_pairs_skip_empty_fields_and_trim() {
    let f = filters(" Dune ", "", "sci-fi");
    assert_eq!(f.query_pairs(), vec![("title", "Dune"), ("genre", "sci-fi")]);
    assert!(SearchFilters::default().query_pairs().is_empty());
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn single_edit_dispatches_after_delay() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.advance(499);
    assert!(h.searches.is_empty());
    h.advance(1);
    assert_eq!(h.searches, vec![filters("Dune", "", "")]);
    assert_eq!(h.controller.phase(), SearchPhase::Settled);
    assert_eq!(h.controller.baseline(), &filters("Dune", "", ""));
}

#[test]
fn rapid_edits_coalesce_into_last_values() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "D");
    h.advance(100);
    h.update(SearchField::Title, "Du");
    h.advance(100);
    h.update(SearchField::Author, "Her");
    h.advance(100);
    h.update(SearchField::Title, "Dune");
    h.advance(2_000);
    assert_eq!(h.searches, vec![filters("Dune", "Her", "")]);
}

#[test]
fn stale_generation_is_ignored() {
    let mut c = SearchController::new(DELAY, SearchFilters::default());
    let first = c.update(SearchField::Title, "D");
    let TimerCommand::Arm { generation: stale, .. } = first.timer else {
        panic!("expected arm, got {first:?}");
    };
    c.update(SearchField::Title, "Du");
    assert_eq!(c.timer_fired(stale), Transition::default());
    assert!(c.is_typing());
}

#[test]
fn identical_value_is_a_no_op() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.advance(500);
    assert_eq!(h.controller.phase(), SearchPhase::Settled);

    let t = h.controller.update(SearchField::Title, "Dune");
    assert_eq!(t, Transition::default());
    assert!(!h.controller.is_typing());
    assert_eq!(h.controller.phase(), SearchPhase::Settled);
}

#[test]
fn identical_value_while_idle_does_not_arm() {
    let mut c = SearchController::new(DELAY, SearchFilters::default());
    assert_eq!(c.update(SearchField::Genre, ""), Transition::default());
    assert_eq!(c.phase(), SearchPhase::Idle);
}

#[test]
fn deleting_before_first_search_cancels_without_dispatch() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "D");
    let t = h.controller.update(SearchField::Title, "");
    assert_eq!(t.timer, TimerCommand::Cancel);
    assert_eq!(t.search, None);
    h.advance(1_000);
    assert!(h.searches.is_empty());
    assert_eq!(h.controller.phase(), SearchPhase::Idle);
}

// =============================================================
// Immediate reset
// =============================================================

#[test]
fn emptying_fields_after_search_resets_immediately() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.advance(500);
    h.update(SearchField::Title, "");
    assert_eq!(h.searches, vec![filters("Dune", "", ""), SearchFilters::default()]);
    assert!(!h.controller.has_active_search());
    assert_eq!(h.controller.phase(), SearchPhase::ResetIssued);
}

#[test]
fn reset_while_typing_cancels_pending_timer() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.advance(500);
    h.update(SearchField::Title, "Dunes");
    let t = h.controller.update(SearchField::Title, "");
    assert_eq!(t.timer, TimerCommand::Cancel);
    assert_eq!(t.search, Some(SearchFilters::default()));
    h.record(t);
    h.advance(1_000);
    assert_eq!(h.searches.len(), 2);
}

#[test]
fn empty_no_op_edits_do_not_repeat_reset() {
    let mut h = Harness::empty();
    h.update(SearchField::Author, "Asimov");
    h.advance(500);
    h.update(SearchField::Author, "");
    assert_eq!(h.searches.len(), 2);

    h.update(SearchField::Author, "");
    h.update(SearchField::Title, "   ");
    h.update(SearchField::Title, "");
    h.advance(1_000);
    assert_eq!(h.searches.len(), 2);
    assert_eq!(h.controller.phase(), SearchPhase::ResetIssued);
}

#[test]
fn reset_guard_clears_once_a_field_is_nonempty() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.advance(500);
    h.update(SearchField::Title, "");
    h.update(SearchField::Title, "Emma");
    h.advance(500);
    h.update(SearchField::Title, "");
    assert_eq!(
        h.searches,
        vec![filters("Dune", "", ""), SearchFilters::default(), filters("Emma", "", ""), SearchFilters::default()]
    );
}

// =============================================================
// clear()
// =============================================================

#[test]
fn clear_after_search_dispatches_exactly_one_empty_search() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Foundation");
    h.update(SearchField::Author, "Asimov");
    h.update(SearchField::Genre, "Science Fiction");
    h.advance(500);
    assert_eq!(h.searches.len(), 1);

    h.clear();
    h.advance(1_000);
    assert_eq!(h.searches.len(), 2);
    assert_eq!(h.searches[1], SearchFilters::default());
    assert_eq!(h.controller.filters(), &SearchFilters::default());
}

#[test]
fn clear_without_active_search_is_silent() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.clear();
    h.advance(1_000);
    assert!(h.searches.is_empty());
    assert_eq!(h.controller.phase(), SearchPhase::Idle);
}

#[test]
fn clear_after_reset_does_not_dispatch_again() {
    let mut h = Harness::empty();
    h.update(SearchField::Title, "Dune");
    h.advance(500);
    h.clear();
    h.clear();
    assert_eq!(h.searches.len(), 2);
}

// =============================================================
// Construction and force_trigger
// =============================================================

#[test]
fn construction_with_initial_filters_does_not_dispatch() {
    let mut h = Harness::new(filters("Asimov", "", ""));
    h.advance(10_000);
    assert!(h.searches.is_empty());
    assert_eq!(h.controller.filters(), &filters("Asimov", "", ""));
    assert_eq!(h.controller.phase(), SearchPhase::Idle);
}

#[test]
fn force_trigger_replays_initial_filters_immediately() {
    let mut h = Harness::new(filters("Asimov", "", ""));
    h.force_trigger();
    assert_eq!(h.searches, vec![filters("Asimov", "", "")]);
    assert!(h.controller.has_active_search());
}

#[test]
fn force_trigger_with_empty_filters_is_a_no_op() {
    let mut c = SearchController::new(DELAY, SearchFilters::default());
    assert_eq!(c.force_trigger(), Transition::default());
    assert!(!c.has_active_search());
}

#[test]
fn force_trigger_supersedes_pending_timer() {
    let mut h = Harness::empty();
    h.update(SearchField::Genre, "Fantasy");
    h.force_trigger();
    h.advance(1_000);
    assert_eq!(h.searches, vec![filters("", "", "Fantasy")]);
}

#[test]
fn restored_filters_reset_after_force_trigger() {
    let mut h = Harness::new(filters("Asimov", "", ""));
    h.force_trigger();
    h.update(SearchField::Title, "");
    assert_eq!(h.searches, vec![filters("Asimov", "", ""), SearchFilters::default()]);
}
