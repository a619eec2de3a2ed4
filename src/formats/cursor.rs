use crate::error::HeaderError;

/// Forward-only reader over a header buffer.
///
/// A read that would run past the end fails with [`HeaderError::Truncated`]
/// and leaves the position where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], HeaderError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(HeaderError::Truncated {
                offset: self.pos,
                len,
                total: self.data.len(),
            })?;

        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), HeaderError> {
        self.take(len).map(|_| ())
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], HeaderError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, HeaderError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    #[inline]
    pub fn read_u16_be(&mut self) -> Result<u16, HeaderError> {
        self.read_array().map(u16::from_be_bytes)
    }

    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16, HeaderError> {
        self.read_array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32_be(&mut self) -> Result<u32, HeaderError> {
        self.read_array().map(u32::from_be_bytes)
    }
}
