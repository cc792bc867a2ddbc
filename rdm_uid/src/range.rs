use crate::Uid;
use core::iter::FusedIterator;

/// Inclusive range of UIDs, walked with [Uid::next_uid] from the front and [Uid::previous_uid] from the back.
///
/// Broadcast addresses inside the range are yielded like any other UID.
/// Unlike `RangeInclusive<u64>` it can not step outside of the 48-bit space, a range ending at [Uid::MAX] simply ends.
///
/// ```
/// use rdm_uid::Uid;
/// let uids: Vec<Uid> = Uid::new(0x4845, 0xffff_fffe).range_to(Uid::new(0x4846, 0)).collect();
/// assert_eq!(
///     uids,
///     [Uid::new(0x4845, 0xffff_fffe), Uid::vendorcast(0x4845), Uid::new(0x4846, 0)]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UidRange {
    front: Uid,
    back: Uid,
    exhausted: bool,
}

impl UidRange {
    /// Range from `start` to `end` including both. Empty if `start > end`.
    pub const fn new(start: Uid, end: Uid) -> Self {
        UidRange {
            front: start,
            back: end,
            exhausted: start.to_u64() > end.to_u64(),
        }
    }

    /// Every UID, including all broadcast addresses.
    pub const fn all() -> Self {
        UidRange::new(Uid::MIN, Uid::MAX)
    }

    /// Every UID of one manufacturer, ending with its vendorcast address.
    pub const fn manufacturer(manufacturer_id: u16) -> Self {
        UidRange::new(
            Uid::new(manufacturer_id, 0),
            Uid::vendorcast(manufacturer_id),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.exhausted
    }

    /// Number of UIDs not yet yielded. The whole space holds 2^48 UIDs, which does not fit into usize everywhere.
    pub fn len_u64(&self) -> u64 {
        if self.exhausted {
            0
        } else {
            self.back.to_u64() - self.front.to_u64() + 1
        }
    }

    /// Whether `uid` is still ahead in this range.
    pub fn contains(&self, uid: &Uid) -> bool {
        !self.exhausted && self.front <= *uid && *uid <= self.back
    }
}

impl Iterator for UidRange {
    type Item = Uid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let uid = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            match self.front.next_uid() {
                Ok(next) => self.front = next,
                Err(_) => self.exhausted = true,
            }
        }
        Some(uid)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len_u64();
        match usize::try_from(len) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn count(self) -> usize {
        self.size_hint().0
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl DoubleEndedIterator for UidRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let uid = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            match self.back.previous_uid() {
                Ok(previous) => self.back = previous,
                Err(_) => self.exhausted = true,
            }
        }
        Some(uid)
    }
}

impl FusedIterator for UidRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn across_manufacturer_boundary() {
        let mut range = Uid::new(0x4845, 0xffff_fffe).range_to(Uid::new(0x4846, 1));
        assert_eq!(range.len_u64(), 4);
        assert_eq!(range.size_hint(), (4, Some(4)));
        assert!(range.contains(&Uid::vendorcast(0x4845)));
        assert_eq!(range.next(), Some(Uid::new(0x4845, 0xffff_fffe)));
        assert_eq!(range.next(), Some(Uid::new(0x4845, 0xffff_ffff)));
        assert_eq!(range.next_back(), Some(Uid::new(0x4846, 1)));
        assert_eq!(range.next_back(), Some(Uid::new(0x4846, 0)));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
        assert!(range.is_empty());
    }

    #[test]
    fn reversed() {
        let uids: Vec<Uid> = Uid::new(0, 0xffff_fffe)
            .range_to(Uid::new(1, 0))
            .rev()
            .collect();
        assert_eq!(
            uids,
            [Uid::new(1, 0), Uid::new(0, 0xffff_ffff), Uid::new(0, 0xffff_fffe)]
        );
    }

    #[test]
    fn ends_of_the_space() {
        let mut top = Uid::new(0xffff, 0xffff_fffd).range_to(Uid::MAX);
        assert_eq!(top.clone().count(), 3);
        assert_eq!(top.clone().last(), Some(Uid::MAX));
        assert_eq!(top.nth(2), Some(Uid::MAX));
        assert_eq!(top.next(), None);

        let mut bottom = Uid::MIN.range_to(Uid::new(0, 1));
        assert_eq!(bottom.next_back(), Some(Uid::new(0, 1)));
        assert_eq!(bottom.next_back(), Some(Uid::MIN));
        assert_eq!(bottom.next_back(), None);
        assert_eq!(bottom.next(), None);
    }

    #[test]
    fn single_and_empty() {
        let mut one = UidRange::new(Uid::MAX, Uid::MAX);
        assert_eq!(one.len_u64(), 1);
        assert_eq!(one.next(), Some(Uid::MAX));
        assert_eq!(one.next(), None);

        let mut empty = UidRange::new(Uid::new(1, 0), Uid::new(0, 5));
        assert!(empty.is_empty());
        assert_eq!(empty.len_u64(), 0);
        assert!(!empty.contains(&Uid::new(0, 6)));
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn whole_space_and_manufacturer() {
        let all = UidRange::all();
        assert_eq!(all.len_u64(), 1 << 48);
        assert!(all.contains(&Uid::MIN));
        assert!(all.contains(&Uid::MAX));

        let mut vendor = UidRange::manufacturer(0x707a);
        assert_eq!(vendor.len_u64(), 1 << 32);
        assert_eq!(vendor.next(), Some(Uid::new(0x707a, 0)));
        assert_eq!(vendor.next_back(), Some(Uid::vendorcast(0x707a)));
        assert!(!vendor.contains(&Uid::new(0x707b, 0)));
    }
}
