use crate::error::SeatError;

/// Occupancy of one screening. Seat `i` is booked iff `seats[i]` is true.
///
/// Bookings are permanent: nothing ever flips a seat back to free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTable {
    seats: Vec<bool>,
}

impl SeatTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            seats: vec![false; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// True iff the seat exists and nobody holds it yet.
    pub fn is_available(&self, seat: usize) -> bool {
        matches!(self.seats.get(seat), Some(false))
    }

    pub fn is_booked(&self, seat: usize) -> bool {
        matches!(self.seats.get(seat), Some(true))
    }

    // Booking a seat twice is a no-op
    pub fn book(&mut self, seat: usize) -> Result<(), SeatError> {
        let capacity = self.capacity();
        let slot = self
            .seats
            .get_mut(seat)
            .ok_or(SeatError::OutOfRange { seat, capacity })?;
        *slot = true;
        Ok(())
    }

    /// Books every seat or none of them.
    pub fn book_all(&mut self, seats: &[usize]) -> Result<(), SeatError> {
        let capacity = self.capacity();
        if let Some(&seat) = seats.iter().find(|&&seat| seat >= capacity) {
            return Err(SeatError::OutOfRange { seat, capacity });
        }
        for &seat in seats {
            self.seats[seat] = true;
        }
        Ok(())
    }

    /// Booked seat numbers in ascending order.
    pub fn booked(&self) -> impl Iterator<Item = usize> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(seat, &taken)| taken.then_some(seat))
    }

    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|&&taken| taken).count()
    }

    /// Space-separated booked seat numbers, empty when nothing is booked.
    pub fn list_booked(&self) -> String {
        self.booked()
            .map(|seat| seat.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = SeatTable::new(100);
        assert_eq!(table.capacity(), 100);
        assert_eq!(table.booked_count(), 0);
        assert_eq!(table.list_booked(), "");
        assert!(table.is_available(0));
        assert!(table.is_available(99));
    }

    #[test]
    fn test_out_of_range_is_never_available() {
        let table = SeatTable::new(100);
        assert!(!table.is_available(100));
        assert!(!table.is_available(usize::MAX));
    }

    #[test]
    fn test_book_rejects_out_of_range() {
        let mut table = SeatTable::new(10);
        assert_eq!(
            table.book(10),
            Err(SeatError::OutOfRange { seat: 10, capacity: 10 })
        );
        assert_eq!(table.booked_count(), 0);
    }

    #[test]
    fn test_book_is_idempotent() {
        let mut table = SeatTable::new(10);
        table.book(3).unwrap();
        table.book(3).unwrap();
        assert_eq!(table.booked_count(), 1);
        assert!(table.is_booked(3));
    }

    #[test]
    fn test_list_booked_is_ascending() {
        let mut table = SeatTable::new(100);
        for seat in [42, 7, 99, 0] {
            table.book(seat).unwrap();
        }
        assert_eq!(table.list_booked(), "0 7 42 99");
    }

    #[test]
    fn test_book_all_is_all_or_nothing() {
        let mut table = SeatTable::new(10);
        assert!(table.book_all(&[1, 2, 10]).is_err());
        assert_eq!(table.booked_count(), 0);

        table.book_all(&[1, 2]).unwrap();
        assert_eq!(table.list_booked(), "1 2");
    }

    proptest! {
        #[test]
        fn prop_occupancy_is_monotonic(seats in proptest::collection::vec(0usize..100, 1..50)) {
            let mut table = SeatTable::new(100);
            let mut booked_so_far = Vec::new();
            for seat in seats {
                table.book(seat).unwrap();
                booked_so_far.push(seat);
                for &earlier in &booked_so_far {
                    prop_assert!(!table.is_available(earlier));
                }
            }
        }

        #[test]
        fn prop_listing_matches_availability(seats in proptest::collection::btree_set(0usize..64, 0..64)) {
            let mut table = SeatTable::new(64);
            for &seat in &seats {
                table.book(seat).unwrap();
            }
            let listed: Vec<usize> = table.booked().collect();
            let expected: Vec<usize> = seats.into_iter().collect();
            prop_assert_eq!(listed, expected);
        }
    }
}
