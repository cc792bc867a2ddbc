use crate::{DeserializeWire, Error};

/// Byte buffer reader, the counterpart of [BufWriter](crate::BufWriter). Multibyte numbers are read in Big Endian.
#[derive(Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufReader<'i> {
    buf: &'i [u8],
    /// Next byte to read from
    byte_idx: usize,
}

impl<'i> BufReader<'i> {
    /// Create a new BufReader from the provided slice.
    pub fn new(buf: &'i [u8]) -> Self {
        Self { buf, byte_idx: 0 }
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        if self.bytes_left() == 0 {
            return Err(Error::OutOfBoundsRead);
        }
        let val = self.buf[self.byte_idx];
        self.byte_idx += 1;

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("read_u8() = {}", val);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("read_u8() = {}", val);

        Ok(val)
    }

    /// Read u16 in Big Endian.
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read u32 in Big Endian.
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read exactly `len` bytes. Nothing is consumed if there are less bytes left.
    pub fn read_raw_slice(&mut self, len: usize) -> Result<&'i [u8], Error> {
        if self.bytes_left() < len {
            return Err(Error::OutOfBoundsRead);
        }
        let slice = &self.buf[self.byte_idx..self.byte_idx + len];
        self.byte_idx += len;

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("read_raw_slice({}) = {=[u8]}", len, slice);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("read_raw_slice({}) = {:02x?}", len, slice);

        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_raw_slice(N)?);
        Ok(array)
    }

    /// Read any object that implements DeserializeWire trait.
    /// Nothing is consumed if the object does not fit into what is left.
    pub fn read<T: DeserializeWire<'i>>(&mut self) -> Result<T, Error> {
        if self.bytes_left() < T::SIZE_BYTES {
            return Err(Error::OutOfBoundsRead);
        }
        T::des_wire(self)
    }

    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.buf.len().saturating_sub(self.byte_idx)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes_left() == 0
    }

    /// Return the current position in bytes.
    #[inline]
    pub fn pos(&self) -> usize {
        self.byte_idx
    }
}
