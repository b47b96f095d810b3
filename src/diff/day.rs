//! Day differencer.
//!
//! Aligns two atomic days by period index. For shared periods, every
//! subject is classified against the other side; periods beyond the
//! shorter day are reported whole as added or removed.
//!
//! # Matching
//! Subjects are matched with a [`SubjectMatcher`]; with duplicates, the
//! first candidate in list order wins unless an identical one exists.
//! Removed subjects follow the compare subjects, in base order.

use super::matcher::ByName;
use super::{ChangedField, ChangedFields, PeriodDiff, PeriodKind, SubjectDiff, SubjectMatcher};
use crate::models::{AtomicSlot, ClassAssignment};

/// Diffs one weekday, matching subjects by name.
///
/// Both inputs are ordered by period. Returns one entry per period of the
/// longer side; an empty day on both sides yields no entries.
pub fn diff_day(base: &[AtomicSlot], compare: &[AtomicSlot]) -> Vec<PeriodDiff> {
    diff_day_with(&ByName, base, compare)
}

/// Diffs one weekday with a custom subject matcher.
pub fn diff_day_with<M: SubjectMatcher + ?Sized>(
    matcher: &M,
    base: &[AtomicSlot],
    compare: &[AtomicSlot],
) -> Vec<PeriodDiff> {
    let shared = base.len().min(compare.len());
    let mut entries = Vec::with_capacity(base.len().max(compare.len()));

    for (index, (b, c)) in base.iter().zip(compare).enumerate() {
        entries.push(PeriodDiff::single(
            PeriodKind::Default,
            period_number(index),
            diff_subjects(matcher, &b.assignments, &c.assignments),
        ));
    }

    // Only one side can be longer; the other contributes nothing here.
    let (kind, extra) = if compare.len() > base.len() {
        (PeriodKind::Added, compare)
    } else {
        (PeriodKind::Removed, base)
    };

    for (index, slot) in extra.iter().enumerate().skip(shared) {
        let subjects = slot
            .assignments
            .iter()
            .cloned()
            .map(SubjectDiff::unchanged)
            .collect();
        entries.push(PeriodDiff::single(kind, period_number(index), subjects));
    }

    entries
}

/// Classifies the subjects of one shared period.
pub fn diff_subjects<M: SubjectMatcher + ?Sized>(
    matcher: &M,
    base: &[ClassAssignment],
    compare: &[ClassAssignment],
) -> Vec<SubjectDiff> {
    let mut subjects: Vec<SubjectDiff> = compare
        .iter()
        .map(|c| match find_counterpart(matcher, base, c) {
            None => SubjectDiff::new_subject(c.clone()),
            Some(b) => {
                let changed = changed_fields(b, c);
                if changed.is_empty() {
                    SubjectDiff::unchanged(c.clone())
                } else {
                    SubjectDiff::updated(c.clone(), changed)
                }
            }
        })
        .collect();

    subjects.extend(
        base.iter()
            .filter(|b| !compare.iter().any(|c| matcher.is_same_subject(b, c)))
            .cloned()
            .map(SubjectDiff::removed),
    );

    subjects
}

/// Base counterpart of a compare assignment.
///
/// Among same-subject candidates an identical assignment wins, otherwise
/// the first in list order. Without the identical-first pass, a period
/// holding the same subject twice would compare unequal to itself.
fn find_counterpart<'a, M: SubjectMatcher + ?Sized>(
    matcher: &M,
    base: &'a [ClassAssignment],
    compare: &ClassAssignment,
) -> Option<&'a ClassAssignment> {
    base.iter()
        .find(|b| matcher.is_same_subject(b, compare) && *b == compare)
        .or_else(|| base.iter().find(|b| matcher.is_same_subject(b, compare)))
}

/// Room and teacher differences as `[compare, base]` pairs.
fn changed_fields(base: &ClassAssignment, compare: &ClassAssignment) -> ChangedFields {
    let mut changed = ChangedFields::new();
    if base.room != compare.room {
        changed.insert(
            ChangedField::Room,
            [compare.room.clone(), base.room.clone()],
        );
    }
    if base.teacher != compare.teacher {
        changed.insert(
            ChangedField::Teacher,
            [compare.teacher.clone(), base.teacher.clone()],
        );
    }
    changed
}

/// 1-based period number for an atomic index.
#[inline]
fn period_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::SubjectChange;

    fn a(name: &str, teacher: &str, room: &str) -> ClassAssignment {
        ClassAssignment::new(name, teacher, room)
    }

    fn slots(periods: Vec<Vec<ClassAssignment>>) -> Vec<AtomicSlot> {
        periods
            .into_iter()
            .enumerate()
            .map(|(i, assignments)| AtomicSlot::new(i as u32 + 1, assignments))
            .collect()
    }

    #[test]
    fn test_identical_days_are_all_unchanged() {
        let day = slots(vec![
            vec![a("Math", "Dr. X", "101")],
            vec![a("Art", "Ms. A", "B2"), a("Music", "Mr. M", "A1")],
        ]);
        let entries = diff_day(&day, &day);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.kind == PeriodKind::Default));
        assert!(entries
            .iter()
            .flat_map(|e| &e.subjects)
            .all(SubjectDiff::is_unchanged));
        assert_eq!(entries[1].periods, vec![2]);
    }

    #[test]
    fn test_updated_teacher_and_room() {
        let base = slots(vec![vec![a("Math", "Dr. X", "101")]]);
        let compare = slots(vec![vec![a("Math", "Dr. Y", "102")]]);

        let entries = diff_day(&base, &compare);
        let subject = &entries[0].subjects[0];
        assert_eq!(subject.kind(), "updated");
        assert_eq!(subject.data.teacher, "Dr. Y");

        let fields = subject.changed_fields().unwrap();
        assert_eq!(
            fields[&ChangedField::Teacher],
            ["Dr. Y".to_string(), "Dr. X".to_string()]
        );
        assert_eq!(
            fields[&ChangedField::Room],
            ["102".to_string(), "101".to_string()]
        );
    }

    #[test]
    fn test_removed_subject_inside_default_period() {
        // Chemistry dropped from period 2, Math stays
        let base = slots(vec![
            vec![a("Math", "Dr. X", "101")],
            vec![a("Math", "Dr. X", "101"), a("Chemistry", "Dr. C", "Lab")],
        ]);
        let compare = slots(vec![
            vec![a("Math", "Dr. X", "101")],
            vec![a("Math", "Dr. X", "101")],
        ]);

        let entries = diff_day(&base, &compare);
        let period2 = &entries[1];
        assert_eq!(period2.kind, PeriodKind::Default);
        assert_eq!(period2.periods, vec![2]);
        assert_eq!(period2.subjects.len(), 2);
        assert!(period2.subjects[0].is_unchanged());
        assert_eq!(period2.subjects[1].change, SubjectChange::Removed);
        assert_eq!(period2.subjects[1].data.name, "Chemistry");
    }

    #[test]
    fn test_new_subject_and_removed_order() {
        let base = slots(vec![vec![
            a("Bio", "B", "1"),
            a("Math", "M", "2"),
            a("Geo", "G", "3"),
        ]]);
        let compare = slots(vec![vec![a("Math", "M", "2"), a("Art", "A", "4")]]);

        let entries = diff_day(&base, &compare);
        let kinds: Vec<(&str, &str)> = entries[0]
            .subjects
            .iter()
            .map(|s| (s.kind(), s.data.name.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("unchanged", "Math"),
                ("new", "Art"),
                ("removed", "Bio"),
                ("removed", "Geo"),
            ]
        );
    }

    #[test]
    fn test_rename_is_removed_plus_new() {
        let base = slots(vec![vec![a("Physics", "Dr. P", "201")]]);
        let compare = slots(vec![vec![a("Physics II", "Dr. P", "201")]]);

        let entries = diff_day(&base, &compare);
        let subjects = &entries[0].subjects;
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].change, SubjectChange::New);
        assert_eq!(subjects[1].change, SubjectChange::Removed);
    }

    #[test]
    fn test_extra_period_in_compare_is_added() {
        let five = vec![vec![a("Math", "Dr. X", "101")]; 5];
        let mut six = five.clone();
        six.push(vec![a("Sport", "Mr. S", "Gym")]);

        let entries = diff_day(&slots(five), &slots(six));
        assert_eq!(entries.len(), 6);
        let last = &entries[5];
        assert_eq!(last.kind, PeriodKind::Added);
        assert_eq!(last.periods, vec![6]);
        assert_eq!(last.subjects, vec![SubjectDiff::unchanged(a("Sport", "Mr. S", "Gym"))]);
    }

    #[test]
    fn test_missing_period_in_compare_is_removed() {
        let base = slots(vec![vec![a("Math", "Dr. X", "101")], vec![a("Art", "A", "B2")]]);
        let compare = slots(vec![vec![a("Math", "Dr. X", "101")]]);

        let entries = diff_day(&base, &compare);
        assert_eq!(entries[1].kind, PeriodKind::Removed);
        assert_eq!(entries[1].periods, vec![2]);
        assert!(entries[1].subjects[0].is_unchanged());
    }

    #[test]
    fn test_empty_days() {
        assert!(diff_day(&[], &[]).is_empty());
    }

    #[test]
    fn test_duplicate_names_match_first() {
        let base = slots(vec![vec![a("Math", "Dr. X", "101"), a("Math", "Dr. Z", "103")]]);
        let compare = slots(vec![vec![a("Math", "Dr. X", "101")]]);

        let entries = diff_day(&base, &compare);
        let subjects = &entries[0].subjects;
        // Both base entries have a same-named counterpart: nothing removed.
        assert_eq!(subjects.len(), 1);
        assert!(subjects[0].is_unchanged());
    }

    #[test]
    fn test_duplicate_names_prefer_identical_entry() {
        let period = vec![a("Math", "Dr. X", "101"), a("Math", "Dr. Y", "102")];
        let day = slots(vec![period]);

        let entries = diff_day(&day, &day);
        let subjects = &entries[0].subjects;
        assert!(subjects.iter().all(SubjectDiff::is_unchanged));

        let changed = slots(vec![vec![a("Math", "Dr. X", "101"), a("Math", "Dr. Z", "102")]]);
        let entries = diff_day(&day, &changed);
        let subjects = &entries[0].subjects;
        // No identical candidate for Dr. Z: first same-named entry is used.
        assert_eq!(subjects[1].kind(), "updated");
        assert_eq!(
            subjects[1].changed_fields().unwrap().keys().copied().collect::<Vec<_>>(),
            vec![ChangedField::Room, ChangedField::Teacher]
        );
    }

    #[derive(Debug)]
    struct ByRoom;

    impl SubjectMatcher for ByRoom {
        fn name(&self) -> &'static str {
            "by-room"
        }

        fn is_same_subject(&self, base: &ClassAssignment, compare: &ClassAssignment) -> bool {
            base.room == compare.room
        }
    }

    #[test]
    fn test_custom_matcher() {
        let base = slots(vec![vec![a("Physics", "Dr. P", "201")]]);
        let compare = slots(vec![vec![a("Physics II", "Dr. Q", "201")]]);

        let entries = diff_day_with(&ByRoom, &base, &compare);
        let subjects = &entries[0].subjects;
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].kind(), "updated");
    }
}
