use crate::error::ParamsError;
use crate::wire_read::Reader;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKMULTISIG: u8 = 0xae;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction<'a> {
    Op(u8),
    Push(&'a [u8]),
}

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(b: Vec<u8>) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    /// Small integers use their dedicated opcodes; everything else is pushed
    /// as a minimally encoded script number.
    pub fn push_int(mut self, n: i64) -> Self {
        if n == -1 || (1..=16).contains(&n) {
            self.0.push((n + (OP_1 as i64 - 1)) as u8);
            self
        } else if n == 0 {
            self.0.push(OP_0);
            self
        } else {
            self.push_slice(&serialize_script_num(n))
        }
    }

    /// Always a data push, even for values that have a dedicated opcode.
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_slice(&serialize_script_num(n))
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let n = data.len();
        if n < OP_PUSHDATA1 as usize {
            self.0.push(n as u8);
        } else if n <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(n as u8);
        } else if n <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(n as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(n as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Decodes the script into opcodes and pushes. Fails if a push runs past
    /// the end of the script.
    pub fn instructions(&self) -> Result<Vec<Instruction<'_>>, ParamsError> {
        let mut r = Reader::new(&self.0);
        let mut out = Vec::new();
        while !r.is_empty() {
            let op = r.read_u8()?;
            let len = match op {
                0x01..=0x4b => op as usize,
                OP_PUSHDATA1 => r.read_u8()? as usize,
                OP_PUSHDATA2 => r.read_u16_le()? as usize,
                OP_PUSHDATA4 => r.read_u32_le()? as usize,
                _ => {
                    out.push(Instruction::Op(op));
                    continue;
                }
            };
            out.push(Instruction::Push(r.read_bytes(len)?));
        }
        Ok(out)
    }
}

/// Minimal little-endian sign-magnitude encoding used for numbers on the
/// script stack.
pub fn serialize_script_num(n: i64) -> Vec<u8> {
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }
    let neg = n < 0;
    let mut abs = n.unsigned_abs();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if neg { 0x80 } else { 0x00 });
    } else if neg {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn script_num_encoding() {
        assert!(serialize_script_num(0).is_empty());
        assert_eq!(serialize_script_num(4), vec![0x04]);
        assert_eq!(serialize_script_num(-1), vec![0x81]);
        assert_eq!(serialize_script_num(0x80), vec![0x80, 0x00]);
        assert_eq!(serialize_script_num(-0x80), vec![0x80, 0x80]);
        assert_eq!(serialize_script_num(488_804_799), vec![0xbf, 0x91, 0x22, 0x1d]);
    }

    #[test]
    fn push_int_uses_small_int_opcodes() {
        let s = Script::new().push_int(0).push_int(1).push_int(16).push_int(-1).push_int(17);
        assert_eq!(s.as_bytes(), &[OP_0, OP_1, OP_16, OP_1NEGATE, 0x01, 0x11]);
    }

    #[test]
    fn push_slice_picks_push_opcode_by_length() {
        let s = Script::new().push_slice(&[0u8; 75]);
        assert_eq!(s.as_bytes()[0], 75);
        let s = Script::new().push_slice(&[0u8; 76]);
        assert_eq!(&s.as_bytes()[..2], &[OP_PUSHDATA1, 76]);
        let s = Script::new().push_slice(&[0u8; 256]);
        assert_eq!(&s.as_bytes()[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
    }

    #[test]
    fn instructions_decode_multisig() {
        let key = [0x02u8; 33];
        let s = Script::new()
            .push_opcode(OP_1)
            .push_slice(&key)
            .push_slice(&key)
            .push_int(2)
            .push_opcode(OP_CHECKMULTISIG);
        let ins = s.instructions().unwrap();
        assert_eq!(ins.len(), 5);
        assert_eq!(ins[0], Instruction::Op(OP_1));
        assert_eq!(ins[1], Instruction::Push(&key[..]));
        assert_eq!(ins[4], Instruction::Op(OP_CHECKMULTISIG));
    }

    #[test]
    fn instructions_reject_truncated_push() {
        let s = Script::from_bytes(vec![0x21, 0x02, 0x03]);
        let err = s.instructions().unwrap_err();
        assert_eq!(err.code, ErrorCode::ParamsErrScriptParse);

        let s = Script::from_bytes(vec![OP_PUSHDATA2, 0x05]);
        assert!(s.instructions().is_err());
    }
}
