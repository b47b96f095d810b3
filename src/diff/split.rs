//! Slot splitting and re-merging.
//!
//! Two plans may group the same periods differently (periods 3-4 merged in
//! one, split in the other after a partial change). Comparing merged slots
//! directly would treat a regrouping as a wholesale change, so both sides
//! are expanded to one slot per period first.

use crate::models::{AtomicSlot, DaySchedule, MergedSlot};

/// Expands a day into one atomic slot per period.
///
/// Every atomic slot carries a copy of its merged slot's assignments.
/// Total for any day; slot order is preserved.
pub fn split(day: &DaySchedule) -> Vec<AtomicSlot> {
    day.slots
        .iter()
        .flat_map(|slot| {
            slot.periods
                .iter()
                .map(move |&period| AtomicSlot::new(period, slot.assignments.clone()))
        })
        .collect()
}

/// Compacts atomic slots into storage form.
///
/// Consecutive periods with identical assignment lists (same order) share
/// one merged slot. Inverse of [`split`] for days already in canonical
/// merged form.
pub fn merge(slots: &[AtomicSlot]) -> DaySchedule {
    let merged = slots.iter().fold(Vec::<MergedSlot>::new(), |mut acc, slot| {
        match acc.last_mut() {
            Some(last)
                if last.assignments == slot.assignments
                    && last.last_period().and_then(|p| p.checked_add(1)) == Some(slot.period) =>
            {
                last.periods.push(slot.period);
            }
            _ => acc.push(MergedSlot::single(slot.period, slot.assignments.clone())),
        }
        acc
    });

    DaySchedule { slots: merged }
}
