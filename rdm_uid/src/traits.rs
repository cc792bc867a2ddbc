use crate::{BufReader, BufWriter, Error, Uid};

pub trait SerializeWire {
    /// Exact number of bytes written by [SerializeWire::ser_wire].
    const SIZE_BYTES: usize;

    fn ser_wire(&self, wr: &mut BufWriter) -> Result<(), Error>;
}

pub trait DeserializeWire<'i>: Sized {
    /// Exact number of bytes consumed by [DeserializeWire::des_wire].
    const SIZE_BYTES: usize;

    fn des_wire<'di>(rd: &'di mut BufReader<'i>) -> Result<Self, Error>;
}

macro_rules! impl_wire {
    ($ty:ty, $write_fn:ident, $read_fn:ident) => {
        impl SerializeWire for $ty {
            const SIZE_BYTES: usize = size_of::<$ty>();

            fn ser_wire(&self, wr: &mut BufWriter) -> Result<(), Error> {
                wr.$write_fn(*self)
            }
        }

        impl<'i> DeserializeWire<'i> for $ty {
            const SIZE_BYTES: usize = size_of::<$ty>();

            fn des_wire<'di>(rd: &'di mut BufReader<'i>) -> Result<Self, Error> {
                rd.$read_fn()
            }
        }
    };
}
impl_wire!(u8, write_u8, read_u8);
impl_wire!(u16, write_u16, read_u16);
impl_wire!(u32, write_u32, read_u32);

impl SerializeWire for Uid {
    const SIZE_BYTES: usize = Uid::LEN_BYTES;

    fn ser_wire(&self, wr: &mut BufWriter) -> Result<(), Error> {
        wr.write_u16(self.manufacturer_id())?;
        wr.write_u32(self.device_id())
    }
}

impl<'i> DeserializeWire<'i> for Uid {
    const SIZE_BYTES: usize = Uid::LEN_BYTES;

    fn des_wire<'di>(rd: &'di mut BufReader<'i>) -> Result<Self, Error> {
        let manufacturer_id = rd.read_u16()?;
        let device_id = rd.read_u32()?;
        Ok(Uid::new(manufacturer_id, device_id))
    }
}

impl Uid {
    /// Size on the wire: Big Endian u16 manufacturer id followed by Big Endian u32 device id.
    pub const LEN_BYTES: usize = 6;

    pub const fn to_bytes(&self) -> [u8; Uid::LEN_BYTES] {
        let m = self.manufacturer_id().to_be_bytes();
        let d = self.device_id().to_be_bytes();
        [m[0], m[1], d[0], d[1], d[2], d[3]]
    }

    pub const fn from_bytes(bytes: [u8; Uid::LEN_BYTES]) -> Uid {
        Uid::new(
            u16::from_be_bytes([bytes[0], bytes[1]]),
            u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
        )
    }

    /// Read a UID from the first 6 bytes of `bytes`, the rest is ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Uid, Error> {
        BufReader::new(bytes).read()
    }
}
