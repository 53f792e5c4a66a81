use crate::error::{ErrorCode, ParamsError};

pub struct Reader<'a> {
    b: &'a [u8],
    off: usize,
}

impl<'a> Reader<'a> {
    pub fn new(b: &'a [u8]) -> Self {
        Self { b, off: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.off >= self.b.len()
    }

    pub fn read_u8(&mut self) -> Result<u8, ParamsError> {
        let v = self.read_bytes(1)?;
        Ok(v[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, ParamsError> {
        let v = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([v[0], v[1]]))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, ParamsError> {
        let v = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([v[0], v[1], v[2], v[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ParamsError> {
        let end = self.off.checked_add(n).filter(|end| *end <= self.b.len());
        let Some(end) = end else {
            return Err(ParamsError::new(
                ErrorCode::ParamsErrScriptParse,
                format!("unexpected EOF reading {n} bytes at offset {}", self.off),
            ));
        };
        let v = &self.b[self.off..end];
        self.off = end;
        Ok(v)
    }
}
