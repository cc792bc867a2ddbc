use crate::Error;
use crate::range::UidRange;
use core::cmp::Ordering;

/// RDM device UID: 16-bit manufacturer id and 32-bit device id, 6 bytes on the wire.
///
/// Field order matters: derived `Ord` compares manufacturer id first, which is the same as comparing
/// the combined 48-bit value `(manufacturer_id << 32) | device_id`.
///
/// Both fields use their exact bit widths, so [Uid::new] cannot produce an out-of-range value.
/// Conversions from a raw `u64` reject anything wider than 48 bits instead of truncating it,
/// see [Uid::from_u64].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uid {
    manufacturer_id: u16,
    device_id: u32,
}

impl Uid {
    /// Manufacturer id addressing all manufacturers.
    pub const ALL_MANUFACTURERS: u16 = 0xFFFF;
    /// Device id addressing all devices of a manufacturer (vendorcast), or all devices at all.
    pub const ALL_DEVICES: u32 = 0xFFFF_FFFF;

    pub const MIN: Uid = Uid::new(0, 0);
    pub const MAX: Uid = Uid::new(Self::ALL_MANUFACTURERS, Self::ALL_DEVICES);

    /// Largest value representable in 48 bits.
    pub const MAX_U64: u64 = 0xFFFF_FFFF_FFFF;

    pub const fn new(manufacturer_id: u16, device_id: u32) -> Self {
        Uid {
            manufacturer_id,
            device_id,
        }
    }

    /// Broadcast to every device of every manufacturer, `ffff:ffffffff`.
    pub const fn all_devices() -> Self {
        Self::MAX
    }

    /// Broadcast to every device of one manufacturer, `mmmm:ffffffff`.
    pub const fn vendorcast(manufacturer_id: u16) -> Self {
        Uid::new(manufacturer_id, Self::ALL_DEVICES)
    }

    /// Create a UID from its 48-bit numeric form.
    /// Returns [Error::ValueTooWide] if any of the upper 16 bits are set.
    pub const fn from_u64(value: u64) -> Result<Self, Error> {
        if value > Self::MAX_U64 {
            return Err(Error::ValueTooWide);
        }
        Ok(Uid::new((value >> 32) as u16, value as u32))
    }

    pub const fn to_u64(&self) -> u64 {
        ((self.manufacturer_id as u64) << 32) | self.device_id as u64
    }

    pub const fn manufacturer_id(&self) -> u16 {
        self.manufacturer_id
    }

    pub const fn device_id(&self) -> u32 {
        self.device_id
    }

    /// True for vendorcast and all devices addresses.
    pub const fn is_broadcast(&self) -> bool {
        self.device_id == Self::ALL_DEVICES
    }

    pub const fn is_all_devices(&self) -> bool {
        self.manufacturer_id == Self::ALL_MANUFACTURERS && self.device_id == Self::ALL_DEVICES
    }

    pub const fn is_vendorcast(&self) -> bool {
        self.is_broadcast() && !self.is_all_devices()
    }

    /// Whether a message sent to this address is meant for the device `uid`:
    /// either exact match, all devices broadcast or a vendorcast for `uid` manufacturer.
    pub fn directed_to(&self, uid: &Uid) -> bool {
        if self == uid {
            return true;
        }
        if !self.is_broadcast() {
            return false;
        }
        self.manufacturer_id == Self::ALL_MANUFACTURERS
            || self.manufacturer_id == uid.manufacturer_id
    }

    /// UID immediately following this one in the 48-bit space.
    /// Device id overflow carries into the manufacturer id; broadcast addresses are not skipped.
    ///
    /// ```
    /// use rdm_uid::{Error, Uid};
    /// assert_eq!(Uid::new(0x4845, 0xffff_fffe).next_uid(), Ok(Uid::new(0x4845, 0xffff_ffff)));
    /// assert_eq!(Uid::new(0x4845, 0xffff_ffff).next_uid(), Ok(Uid::new(0x4846, 0)));
    /// assert_eq!(Uid::all_devices().next_uid(), Err(Error::OutOfRange));
    /// ```
    pub const fn next_uid(&self) -> Result<Uid, Error> {
        if let Some(device_id) = self.device_id.checked_add(1) {
            return Ok(Uid::new(self.manufacturer_id, device_id));
        }
        match self.manufacturer_id.checked_add(1) {
            Some(manufacturer_id) => Ok(Uid::new(manufacturer_id, 0)),
            None => Err(Error::OutOfRange),
        }
    }

    /// UID immediately preceding this one in the 48-bit space.
    /// Device id underflow borrows from the manufacturer id.
    /// Returns [Error::OutOfRange] for `0000:00000000`.
    pub const fn previous_uid(&self) -> Result<Uid, Error> {
        if let Some(device_id) = self.device_id.checked_sub(1) {
            return Ok(Uid::new(self.manufacturer_id, device_id));
        }
        match self.manufacturer_id.checked_sub(1) {
            Some(manufacturer_id) => Ok(Uid::new(manufacturer_id, Self::ALL_DEVICES)),
            None => Err(Error::OutOfRange),
        }
    }

    /// Compare with a UID that might be absent, any UID is greater than no UID at all.
    ///
    /// This is the same order `Option<Uid>` has, spelled out for call sites holding a bare `Uid`.
    pub fn cmp_opt(&self, other: Option<&Uid>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Greater,
        }
    }

    /// Inclusive range of UIDs from this one up to and including `end`.
    pub const fn range_to(self, end: Uid) -> UidRange {
        UidRange::new(self, end)
    }
}

impl From<Uid> for u64 {
    fn from(uid: Uid) -> Self {
        uid.to_u64()
    }
}

impl TryFrom<u64> for Uid {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Uid::from_u64(value)
    }
}

impl From<(u16, u32)> for Uid {
    fn from((manufacturer_id, device_id): (u16, u32)) -> Self {
        Uid::new(manufacturer_id, device_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let uid = Uid::new(0x707a, 0x1234_5678);
        assert_eq!(uid.manufacturer_id(), 0x707a);
        assert_eq!(uid.device_id(), 0x1234_5678);
        assert_eq!(uid.to_u64(), 0x707a_1234_5678);
        assert!(!uid.is_broadcast());

        let uid2 = Uid::new(0x707a, 0x1234_5679);
        assert!(uid2 > uid);
        let uid3 = Uid::new(0x7079, 0x1234_5678);
        assert!(uid > uid3);
    }

    #[test]
    fn sorting() {
        let u1 = Uid::new(0x4845, 0xffff_fffe);
        let u2 = Uid::new(0x4845, 0x0000_022e);
        let u3 = Uid::new(0x4844, 0x0000_022e);
        let u4 = Uid::new(0x4846, 0x0000_022e);
        let mut uids = [u1, u2, u3, u4];
        uids.sort();
        assert_eq!(uids, [u3, u2, u1, u4]);
    }

    #[test]
    fn order_matches_48_bit_value() {
        let uids = [
            Uid::MIN,
            Uid::new(0, 1),
            Uid::new(0, 0xffff_ffff),
            Uid::new(1, 0),
            Uid::new(0x4845, 0x22e),
            Uid::vendorcast(0x4845),
            Uid::MAX,
        ];
        for a in uids {
            for b in uids {
                assert_eq!(a.cmp(&b), a.to_u64().cmp(&b.to_u64()));
                assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            }
        }
    }

    #[test]
    fn compare_with_absent() {
        let uid = Uid::new(0x707a, 0x1234_5678);
        assert_eq!(uid.cmp_opt(None), Ordering::Greater);
        assert_eq!(Uid::MIN.cmp_opt(None), Ordering::Greater);
        assert_eq!(uid.cmp_opt(Some(&uid)), Ordering::Equal);
        assert_eq!(uid.cmp_opt(Some(&Uid::MAX)), Ordering::Less);
        assert!(Some(Uid::MIN) > None);
    }

    #[test]
    fn broadcast() {
        let vendorcast = Uid::vendorcast(0x707a);
        assert!(vendorcast.is_broadcast());
        assert!(vendorcast.is_vendorcast());
        assert!(!vendorcast.is_all_devices());

        let all = Uid::all_devices();
        assert!(all.is_broadcast());
        assert!(all.is_all_devices());
        assert!(!all.is_vendorcast());
        assert_eq!(all, Uid::MAX);

        assert!(!Uid::new(0xffff, 0xffff_fffe).is_broadcast());
        assert!(!Uid::MIN.is_broadcast());
    }

    #[test]
    fn directed_to() {
        let device = Uid::new(0x707a, 0x1234_5678);
        assert!(device.directed_to(&device));
        assert!(Uid::vendorcast(0x707a).directed_to(&device));
        assert!(Uid::all_devices().directed_to(&device));
        assert!(!Uid::vendorcast(0x7079).directed_to(&device));
        assert!(!Uid::new(0x707a, 0x1234_5679).directed_to(&device));
        assert!(!device.directed_to(&Uid::vendorcast(0x707a)));
    }

    #[test]
    fn next_and_previous() {
        let u1 = Uid::new(0x4845, 0xffff_fffe);
        let u2 = u1.next_uid().unwrap();
        assert_eq!(u2, Uid::new(0x4845, 0xffff_ffff));
        let u3 = u2.next_uid().unwrap();
        assert_eq!(u3, Uid::new(0x4846, 0));

        let u4 = u3.previous_uid().unwrap();
        assert_eq!(u4, u2);
        let u5 = u4.previous_uid().unwrap();
        assert_eq!(u5, u1);

        assert_eq!(Uid::MIN.previous_uid(), Err(Error::OutOfRange));
        assert_eq!(Uid::all_devices().next_uid(), Err(Error::OutOfRange));
        assert_eq!(Uid::MIN.next_uid(), Ok(Uid::new(0, 1)));
        assert_eq!(Uid::MAX.previous_uid(), Ok(Uid::new(0xffff, 0xffff_fffe)));
    }

    #[test]
    fn stepping_is_plus_minus_one() {
        for uid in [
            Uid::new(0, 0xffff_ffff),
            Uid::new(0x1234, 0),
            Uid::new(0xfffe, 0xffff_ffff),
            Uid::new(0x4845, 0x22e),
        ] {
            assert_eq!(uid.next_uid().unwrap().to_u64(), uid.to_u64() + 1);
            assert_eq!(uid.previous_uid().unwrap().to_u64(), uid.to_u64() - 1);
            assert_eq!(uid.next_uid().unwrap().previous_uid(), Ok(uid));
        }
    }

    #[test]
    fn u64_conversions() {
        assert_eq!(Uid::from_u64(0x4845_0000_022e), Ok(Uid::new(0x4845, 0x22e)));
        assert_eq!(Uid::from_u64(Uid::MAX_U64), Ok(Uid::MAX));
        assert_eq!(Uid::from_u64(1 << 48), Err(Error::ValueTooWide));
        assert_eq!(Uid::try_from(u64::MAX), Err(Error::ValueTooWide));
        assert_eq!(u64::from(Uid::new(1, 2)), 0x1_0000_0002);
        assert_eq!(Uid::from((0x4845, 0x22e)), Uid::new(0x4845, 0x22e));
    }
}
