//! Temporal query primitives
//!
//! The queries every rule is built from, as a second `impl` block on
//! [`PriorEvents`]: existence, cardinality, and date-ordered selection.
//! All of them are pure reads over the filtered view; evaluating the same
//! view twice always gives the same answer, so views are safe to share
//! across threads.

use chrono::NaiveDate;
use clinrisk_types::CodedEvent;

use crate::accessor::PriorEvents;

impl<'a, E: CodedEvent, F: Fn(&E) -> bool> PriorEvents<'a, E, F> {
    /// True when at least one event matches the view
    pub fn exists(&self) -> bool {
        self.iter().next().is_some()
    }

    /// Number of matching events
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// The matching event with the greatest date
    ///
    /// `None` when nothing matches. Among events sharing the greatest date,
    /// the one appearing latest in history order wins.
    pub fn most_recent(&self) -> Option<&'a E> {
        self.iter().max_by_key(|event| event.date())
    }

    /// The matching event with the smallest date
    ///
    /// `None` when nothing matches. Among events sharing the smallest date,
    /// the one appearing earliest in history order wins.
    pub fn earliest(&self) -> Option<&'a E> {
        self.iter().min_by_key(|event| event.date())
    }

    /// Date of the most recent matching event
    pub fn most_recent_date(&self) -> Option<NaiveDate> {
        self.most_recent().map(CodedEvent::date)
    }

    /// Date of the earliest matching event
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.earliest().map(CodedEvent::date)
    }

    /// The matching event at zero-based rank `n` in ascending date order
    ///
    /// `nth_earliest(0)` is the earliest matching event. Events sharing a
    /// date keep their history order.
    pub fn nth_earliest(&self, n: usize) -> Option<&'a E> {
        let mut matching: Vec<&'a E> = self.iter().collect();
        matching.sort_by_key(|event| event.date());
        matching.get(n).copied()
    }

    /// Category label of the most recent matching event
    ///
    /// `None` when nothing matches or the code set carries no category for
    /// the event's code.
    pub fn most_recent_category(&self) -> Option<&'a str> {
        self.most_recent()
            .and_then(|event| self.code_set().category_of(event.code()))
    }
}
