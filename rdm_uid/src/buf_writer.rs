use crate::{Error, SerializeWire};

/// no_std byte buffer writer for RDM address fields. All multibyte numbers are written in Big Endian,
/// as they appear on the wire.
/// No alignment requirements are imposed on the byte buffer provided and no allocator is needed.
///
/// # Example
/// ```
/// use rdm_uid::{BufWriter, Uid};
/// let mut buf = [0u8; 16];
/// let mut wr = BufWriter::new(&mut buf);
/// wr.write(&Uid::new(0x707a, 0x1234_5678)).unwrap();
/// wr.write_u8(0xaa).unwrap();
/// let bytes = wr.finish().unwrap();
/// assert_eq!(bytes, &[0x70, 0x7a, 0x12, 0x34, 0x56, 0x78, 0xaa]);
/// ```
pub struct BufWriter<'i> {
    buf: &'i mut [u8],
    // Next byte to write to
    byte_idx: usize,
}

impl<'i> BufWriter<'i> {
    pub fn new(buf: &'i mut [u8]) -> Self {
        Self { buf, byte_idx: 0 }
    }

    /// Write u8.
    pub fn write_u8(&mut self, val: u8) -> Result<(), Error> {
        if self.bytes_left() == 0 {
            return Err(Error::OutOfBoundsWrite);
        }
        self.buf[self.byte_idx] = val;
        self.byte_idx += 1;

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("write_u8({})", val);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("write_u8({})", val);

        Ok(())
    }

    /// Write u16 in Big Endian.
    pub fn write_u16(&mut self, val: u16) -> Result<(), Error> {
        self.write_raw_slice(&val.to_be_bytes())
    }

    /// Write u32 in Big Endian.
    pub fn write_u32(&mut self, val: u32) -> Result<(), Error> {
        self.write_raw_slice(&val.to_be_bytes())
    }

    /// Write the provided slice to the buffer as is. Nothing is written if it does not fit completely.
    pub fn write_raw_slice(&mut self, val: &[u8]) -> Result<(), Error> {
        if self.bytes_left() < val.len() {
            return Err(Error::OutOfBoundsWrite);
        }
        self.buf[self.byte_idx..self.byte_idx + val.len()].copy_from_slice(val);
        self.byte_idx += val.len();

        #[cfg(feature = "defmt-extended")]
        defmt::trace!("write_raw_slice({=[u8]})", val);
        #[cfg(feature = "tracing-extended")]
        tracing::trace!("write_raw_slice({:02x?})", val);

        Ok(())
    }

    /// Write any object that implements SerializeWire trait.
    /// Objects are written in full or not at all.
    pub fn write<T: SerializeWire>(&mut self, val: &T) -> Result<(), Error> {
        if self.bytes_left() < T::SIZE_BYTES {
            return Err(Error::OutOfBoundsWrite);
        }
        val.ser_wire(self)
    }

    /// Return the slice containing written data and rewind the writer to the start of the buffer.
    pub fn finish(&mut self) -> Result<&[u8], Error> {
        let byte_idx = self.byte_idx;
        self.byte_idx = 0;
        Ok(&self.buf[0..byte_idx])
    }

    /// Return the slice containing written data.
    ///
    /// This method takes self by value, allowing one to return the slice from functions.
    pub fn finish_and_take(self) -> Result<&'i [u8], Error> {
        let buf: &'i [u8] = self.buf;
        Ok(&buf[0..self.byte_idx])
    }

    /// Simply return the buffer, note that buffer is not set to zero and might contain old data.
    pub fn deinit(self) -> &'i mut [u8] {
        self.buf
    }

    /// Return the number of bytes left.
    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.buf.len().saturating_sub(self.byte_idx)
    }

    /// Return the current position in bytes.
    #[inline]
    pub fn pos(&self) -> usize {
        self.byte_idx
    }
}
