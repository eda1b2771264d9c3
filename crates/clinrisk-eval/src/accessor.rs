//! Filtered views over a patient's event history
//!
//! Every temporal query starts the same way: restrict one of the patient's
//! event streams to events coded in a given code set and dated on or before
//! the reference date. [`PriorEvents`] captures that restriction once; rules
//! layer window and value predicates on top with [`PriorEvents::filtered`].

use chrono::NaiveDate;
use clinrisk_types::{ClinicalEvent, CodeSet, CodedEvent, MedicationEvent, Patient};

/// A lazily filtered view over one patient's event stream
///
/// Holds the stream, the code set, the reference date, and an extra
/// predicate; nothing is scanned until a query primitive consumes
/// [`PriorEvents::iter`]. The view never looks past the reference date and
/// never mutates the underlying history.
pub struct PriorEvents<'a, E, F = fn(&E) -> bool> {
    events: &'a [E],
    code_set: &'a CodeSet,
    reference: NaiveDate,
    extra: F,
}

impl<'a, E: CodedEvent> PriorEvents<'a, E> {
    /// View of `events` restricted to `code_set` members dated on or before `reference`
    pub fn of(events: &'a [E], code_set: &'a CodeSet, reference: NaiveDate) -> Self {
        Self {
            events,
            code_set,
            reference,
            extra: |_| true,
        }
    }
}

impl<'a> PriorEvents<'a, ClinicalEvent> {
    /// The patient's clinical events coded in `code_set`, on or before `reference`
    pub fn clinical(patient: &'a Patient, code_set: &'a CodeSet, reference: NaiveDate) -> Self {
        Self::of(&patient.clinical_events, code_set, reference)
    }
}

impl<'a> PriorEvents<'a, MedicationEvent> {
    /// The patient's medication events coded in `code_set`, on or before `reference`
    pub fn medications(patient: &'a Patient, code_set: &'a CodeSet, reference: NaiveDate) -> Self {
        Self::of(&patient.medications, code_set, reference)
    }
}

impl<'a, E: CodedEvent, F: Fn(&E) -> bool> PriorEvents<'a, E, F> {
    /// Restrict the view further with an additional predicate
    ///
    /// Predicates compose: the returned view matches events satisfying both
    /// the existing restriction and `pred`.
    pub fn filtered<G>(self, pred: G) -> PriorEvents<'a, E, impl Fn(&E) -> bool>
    where
        G: Fn(&E) -> bool,
    {
        let extra = self.extra;
        PriorEvents {
            events: self.events,
            code_set: self.code_set,
            reference: self.reference,
            extra: move |event: &E| extra(event) && pred(event),
        }
    }

    /// Iterate over the matching events in history order
    ///
    /// Lazy and restartable; calling it again replays the same view.
    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.events.iter().filter(move |event| self.matches(event))
    }

    /// The code set this view matches against
    pub fn code_set(&self) -> &'a CodeSet {
        self.code_set
    }

    fn matches(&self, event: &E) -> bool {
        event.date() <= self.reference
            && self.code_set.contains(event.code())
            && (self.extra)(event)
    }
}
