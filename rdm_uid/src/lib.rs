#![cfg_attr(not(feature = "std"), no_std)]

//! RDM device addressing: a 48-bit [Uid] made of a 16-bit manufacturer id and a 32-bit device id.
//!
//! ```
//! use rdm_uid::Uid;
//!
//! let uid: Uid = "707A:12345678".parse().unwrap();
//! assert_eq!(uid, Uid::new(0x707a, 0x1234_5678));
//! assert_eq!(uid.to_string(), "707a:12345678");
//! assert_eq!(uid.to_bytes(), [0x70, 0x7a, 0x12, 0x34, 0x56, 0x78]);
//! assert!(Uid::vendorcast(0x707a).directed_to(&uid));
//! ```

pub use buf_reader::BufReader;
pub use buf_writer::BufWriter;
pub use range::UidRange;
pub use traits::{DeserializeWire, SerializeWire};
pub use uid::Uid;

pub mod buf_reader;
pub mod buf_writer;
pub mod range;
pub mod text;
pub mod traits;
pub mod uid;

#[cfg(feature = "serde")]
mod serde_impl;

#[derive(thiserror::Error, Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("UID address space boundary reached")]
    OutOfRange,
    #[error("value does not fit into 48 bits")]
    ValueTooWide,

    #[error("empty UID string")]
    EmptyString,
    #[error("expected ':' between manufacturer and device id")]
    MissingSeparator,
    #[error("more than one ':' in UID string")]
    ExtraSeparator,
    #[error("empty manufacturer id")]
    EmptyManufacturerId,
    #[error("empty device id")]
    EmptyDeviceId,
    #[error("non hexadecimal character in UID string")]
    InvalidHexDigit,
    #[error("manufacturer id is longer than 4 hex digits")]
    ManufacturerIdTooWide,
    #[error("device id is longer than 8 hex digits")]
    DeviceIdTooWide,

    #[error("write past the end of the buffer")]
    OutOfBoundsWrite,
    #[error("read past the end of the buffer")]
    OutOfBoundsRead,
}

impl Error {
    /// True for errors produced by [Uid::from_str](core::str::FromStr::from_str), which
    /// [Uid::parse] reports as `None`.
    pub fn is_parse_failure(&self) -> bool {
        use Error::*;
        matches!(
            self,
            EmptyString
                | MissingSeparator
                | ExtraSeparator
                | EmptyManufacturerId
                | EmptyDeviceId
                | InvalidHexDigit
                | ManufacturerIdTooWide
                | DeviceIdTooWide
        )
    }
}

pub mod prelude {
    pub use crate::Error as UidError;
    pub use crate::buf_reader::BufReader;
    pub use crate::buf_writer::BufWriter;
    pub use crate::range::UidRange;
    pub use crate::traits::{DeserializeWire, SerializeWire};
    pub use crate::uid::Uid;
}
