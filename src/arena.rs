use byteorder::ByteOrder;
use mpvm_util::Endian;

/// The single growable byte arena shared by every loaded process (§3).
///
/// Addresses are plain integer offsets, never pointers, so growth never
/// invalidates anything held by a caller across a store.
#[derive(Debug, Default)]
pub struct Arena {
    data: Vec<u8>,
}

impl Arena {
    pub fn new() -> Arena {
        Arena { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Zero-fill extend by `n` bytes, returning the offset of the first new byte.
    pub fn grow_by(&mut self, n: usize) -> usize {
        let at = self.data.len();
        self.data.resize(at + n, 0);
        at
    }

    /// Append `bytes` verbatim, returning the offset they now start at.
    /// Used by the loader (§4.A) to place a new image's body.
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let at = self.data.len();
        self.data.extend_from_slice(bytes);
        at
    }

    pub fn read_u32(&self, addr: usize) -> Option<u32> {
        let end = addr.checked_add(4)?;
        if end > self.data.len() {
            None
        } else {
            Some(Endian::read_u32(&self.data[addr..end]))
        }
    }

    pub fn read_u8(&self, addr: usize) -> Option<u8> {
        self.data.get(addr).copied()
    }

    /// Reads a little-endian `u32` starting at `addr`, zero-extending any
    /// bytes that fall past the end of the arena instead of failing. Used
    /// only by `lw`, whose documented bounds check (§4.E row 0) guards the
    /// first byte of the word but not necessarily all four.
    pub fn read_u32_zero_extended(&self, addr: usize) -> u32 {
        let mut bytes = [0u8; 4];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = self.read_u8(addr + i).unwrap_or(0);
        }
        u32::from_le_bytes(bytes)
    }

    /// Writes within `[addr, addr+4)`. Caller must have grown the arena first;
    /// this panics on out-of-bounds rather than silently skipping, since every
    /// call site in `exec` grows to fit immediately beforehand.
    pub fn write_u32(&mut self, addr: usize, value: u32) {
        Endian::write_u32(&mut self.data[addr..addr + 4], value);
    }

    pub fn write_u8(&mut self, addr: usize, value: u8) {
        self.data[addr] = value;
    }
}
