// Splits availability blocks into fixed-duration candidate slots.
//
// Responsibilities
// - Walk each block from its own start in steps of the slot duration.
// - Emit a slot only when it fits entirely inside its block; a shorter trailing remainder is dropped.
// - Never merge blocks, even when they touch or overlap.
//
// Boundaries
// - Pure function, no input or output.

use chrono::TimeDelta;

use crate::modules::scheduling::core::time_slot::TimeSlot;

/// Output is in block order, then chronological within a block. A non-positive duration yields
/// no slots.
pub fn partition_into_slots(blocks: &[TimeSlot], duration_minutes: i64) -> Vec<TimeSlot> {
    let Some(step) = TimeDelta::try_minutes(duration_minutes).filter(|step| *step > TimeDelta::zero())
    else {
        return Vec::new();
    };

    blocks
        .iter()
        .flat_map(|block| partition_block(block, step))
        .collect()
}

fn partition_block(block: &TimeSlot, step: TimeDelta) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut current = block.start_time();

    while let Some(slot_end) = current.checked_add_signed(step) {
        if slot_end > block.end_time() {
            break;
        }
        slots.push(TimeSlot::from_ordered(current, slot_end));
        current = slot_end;
    }

    slots
}
