pub fn encode_compact_size(n: u64, out: &mut Vec<u8>) {
    match n {
        0x00..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Length-prefixed byte vector, as the wire format writes scripts and
/// signatures.
pub fn encode_var_bytes(b: &[u8], out: &mut Vec<u8>) {
    encode_compact_size(b.len() as u64, out);
    out.extend_from_slice(b);
}
