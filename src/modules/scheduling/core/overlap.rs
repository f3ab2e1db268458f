use crate::modules::scheduling::core::time_slot::TimeSlot;

/// Keeps the candidates that overlap no booked interval, preserving candidate order.
pub fn remove_booked(candidates: Vec<TimeSlot>, booked: &[TimeSlot]) -> Vec<TimeSlot> {
    candidates
        .into_iter()
        .filter(|candidate| !booked.iter().any(|interval| candidate.overlaps(interval)))
        .collect()
}

#[cfg(test)]
mod overlap_tests {
    use super::*;
    use crate::modules::scheduling::core::partition::partition_into_slots;
    use crate::tests::fixtures::calendar_events::{at, slot};
    use rstest::rstest;

    #[rstest]
    fn it_should_remove_every_slot_touched_by_a_booking() {
        let candidates = partition_into_slots(&[slot(at(0, 9, 0), at(0, 10, 0))], 30);
        let booked = vec![slot(at(0, 9, 15), at(0, 9, 45))];
        assert!(remove_booked(candidates, &booked).is_empty());
    }

    #[rstest]
    fn it_should_keep_slots_adjacent_to_a_booking() {
        let candidates = partition_into_slots(&[slot(at(0, 9, 0), at(0, 11, 0))], 30);
        let booked = vec![slot(at(0, 10, 0), at(0, 10, 30))];
        assert_eq!(
            remove_booked(candidates, &booked),
            vec![
                slot(at(0, 9, 0), at(0, 9, 30)),
                slot(at(0, 9, 30), at(0, 10, 0)),
                slot(at(0, 10, 30), at(0, 11, 0)),
            ]
        );
    }

    #[rstest]
    fn it_should_return_every_candidate_without_bookings() {
        let candidates = partition_into_slots(&[slot(at(0, 9, 0), at(0, 10, 0))], 20);
        assert_eq!(remove_booked(candidates.clone(), &[]), candidates);
    }

    #[rstest]
    fn it_should_never_return_a_slot_overlapping_a_booking() {
        let candidates = partition_into_slots(&[slot(at(0, 8, 0), at(0, 18, 0))], 25);
        let booked = vec![
            slot(at(0, 8, 40), at(0, 9, 10)),
            slot(at(0, 12, 0), at(0, 13, 30)),
            slot(at(0, 17, 55), at(0, 19, 0)),
        ];
        let free = remove_booked(candidates, &booked);
        assert!(!free.is_empty());
        for candidate in &free {
            for interval in &booked {
                assert!(
                    !(candidate.start_time() < interval.end_time()
                        && candidate.end_time() > interval.start_time())
                );
            }
        }
        assert!(free.windows(2).all(|pair| pair[0].start_time() < pair[1].start_time()));
    }
}
