//! Canonical text form `mmmm:dddddddd`.
//!
//! Output is always lowercase and zero padded to 4 and 8 digits. Input accepts 1 to 4 and 1 to 8 hex
//! digits in any case, so everything printed by [Display](core::fmt::Display) parses back to the same UID.

use crate::{Error, Uid};
use core::fmt::{Debug, Display, Formatter};
use core::str::FromStr;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Uid {
    /// Length of the canonical text form.
    pub const STR_LEN: usize = 13;

    /// Parse canonical text form, returning None for anything malformed.
    /// Use [str::parse] instead to learn what exactly was wrong.
    pub fn parse(s: &str) -> Option<Uid> {
        s.parse().ok()
    }

    /// Write the canonical text form into `buf` without allocating and return it as str.
    pub fn format_into<'b>(&self, buf: &'b mut [u8; Uid::STR_LEN]) -> &'b str {
        write_hex(&mut buf[0..4], self.manufacturer_id() as u32);
        buf[4] = b':';
        write_hex(&mut buf[5..13], self.device_id());
        let buf: &'b [u8; Uid::STR_LEN] = buf;
        // only ASCII hex digits and ':' were written
        core::str::from_utf8(buf).unwrap_or_default()
    }
}

fn write_hex(dst: &mut [u8], mut value: u32) {
    for b in dst.iter_mut().rev() {
        *b = HEX_DIGITS[(value & 0xF) as usize];
        value >>= 4;
    }
}

fn parse_hex(digits: &str, max_digits: usize, too_wide: Error) -> Result<u32, Error> {
    // u32::from_str_radix accepts a leading '+', check digits by hand first
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexDigit);
    }
    if digits.len() > max_digits {
        return Err(too_wide);
    }
    u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidHexDigit)
}

impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::EmptyString);
        }
        let (manufacturer, device) = s.split_once(':').ok_or(Error::MissingSeparator)?;
        if device.contains(':') {
            return Err(Error::ExtraSeparator);
        }
        if manufacturer.is_empty() {
            return Err(Error::EmptyManufacturerId);
        }
        if device.is_empty() {
            return Err(Error::EmptyDeviceId);
        }
        let manufacturer_id = parse_hex(manufacturer, 4, Error::ManufacturerIdTooWide)?;
        let device_id = parse_hex(device, 8, Error::DeviceIdTooWide)?;
        let manufacturer_id =
            u16::try_from(manufacturer_id).map_err(|_| Error::ManufacturerIdTooWide)?;
        Ok(Uid::new(manufacturer_id, device_id))
    }
}

impl Display for Uid {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04x}:{:08x}", self.manufacturer_id(), self.device_id())
    }
}

impl Debug for Uid {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Uid({self})")
    }
}
