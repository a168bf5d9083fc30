use crate::{EngineError, Position, Result, bit_address};

/// A square monochrome dot grid backed by a packed byte buffer.
///
/// The buffer holds one bit per dot, packed row-major and MSB-first (see
/// [`crate::bit_address`]). Its length is fixed at construction and is the
/// exact byte sequence the base64 codec works on.
#[derive(Clone, PartialEq)]
pub struct DotMatrix {
    side: i32,
    data: Vec<u8>,
}

impl DotMatrix {
    pub const DEFAULT_SIDE: i32 = 64;

    pub fn new(side: i32) -> Result<Self> {
        if side <= 0 {
            return Err(EngineError::InvalidSide { side });
        }
        let dots = side as usize * side as usize;
        Ok(Self {
            side,
            data: vec![0; dots.div_ceil(8)],
        })
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    pub fn dot_count(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// Read-only view of the packed buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sets or clears a single dot. Redundant writes are no-ops, an
    /// out-of-range position leaves the buffer untouched.
    pub fn set_dot(&mut self, pos: impl Into<Position>, value: bool) -> Result<()> {
        let address = bit_address(self.side, pos)?;
        if value {
            self.data[address.byte] |= address.mask();
        } else {
            self.data[address.byte] &= !address.mask();
        }
        Ok(())
    }

    /// Out-of-range reads answer `false`.
    pub fn get_dot(&self, pos: impl Into<Position>) -> bool {
        match bit_address(self.side, pos) {
            Ok(address) => self.data[address.byte] & address.mask() != 0,
            Err(_) => false,
        }
    }

    /// Clears every dot in one pass.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }

    /// Replaces the whole buffer. All-or-nothing: a slice of the wrong
    /// length leaves the current contents in place.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != self.data.len() {
            return Err(EngineError::LengthMismatch {
                expected: self.data.len(),
                actual: bytes.len(),
            });
        }
        self.data.copy_from_slice(bytes);
        Ok(())
    }
}

impl Default for DotMatrix {
    fn default() -> Self {
        let dots = DotMatrix::DEFAULT_SIDE as usize * DotMatrix::DEFAULT_SIDE as usize;
        Self {
            side: DotMatrix::DEFAULT_SIDE,
            data: vec![0; dots.div_ceil(8)],
        }
    }
}

impl std::fmt::Debug for DotMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DotMatrix")
            .field("side", &self.side)
            .field("set_dots", &self.data.iter().map(|b| b.count_ones()).sum::<u32>())
            .finish()
    }
}
