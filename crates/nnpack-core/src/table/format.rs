// crates/nnpack-core/src/table/format.rs

use crate::error::{NpError, Result};
use crate::model::cutoffs::CutoffTable;
use crate::table::checksum::{blake3_16, crc32, hex16};
use crate::table::table::{Table, TABLE_VERSION};
use crate::validate::validate_table;

const MAGIC: &[u8; 4] = b"NPT1";

/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// quantize:u32
/// classes:u16
/// cutoffs[classes]:u8
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(t: &Table) -> Vec<u8> {
    let raw = t.cutoffs.to_raw();
    let mut b = Vec::with_capacity(4 + 2 + 4 + 2 + raw.len() + 4 + 16);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&t.version.to_le_bytes());
    b.extend_from_slice(&t.quantize.to_le_bytes());
    b.extend_from_slice(&(raw.len() as u16).to_le_bytes());
    b.extend_from_slice(&raw);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);
    b
}

pub fn decode(bytes: &[u8]) -> Result<Table> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(NpError::TableFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version == 0 || version > TABLE_VERSION {
        return Err(NpError::TableFormat(format!("unsupported version {version}")));
    }
    let quantize = read_u32(bytes, &mut i)?;
    let classes = read_u16(bytes, &mut i)? as usize;
    if bytes.len() < i + classes {
        return Err(NpError::TableFormat("unexpected eof reading cutoffs".into()));
    }
    let raw = &bytes[i..i + classes];
    i += classes;

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(NpError::TableFormat("crc32 mismatch".into()));
    }

    if bytes.len() < i + 16 {
        return Err(NpError::TableFormat("missing blake3".into()));
    }
    let mut h_expected = [0u8; 16];
    h_expected.copy_from_slice(&bytes[i..i + 16]);
    if h_expected != blake3_16(&bytes[0..i]) {
        return Err(NpError::TableFormat("blake3 mismatch".into()));
    }

    let cutoffs = CutoffTable::from_raw(raw)?;
    let t = Table {
        version,
        quantize,
        cutoffs,
    };
    validate_table(&t)?;
    Ok(t)
}

/// The trailing blake3_16 of the encoded table.
pub fn table_id_16(t: &Table) -> [u8; 16] {
    let enc = encode(t);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn table_id_hex(t: &Table) -> String {
    hex16(&table_id_16(t))
}

pub fn table_id_16_from_encoded(encoded: &[u8]) -> Result<[u8; 16]> {
    if encoded.len() < 16 {
        return Err(NpError::TableFormat("encoded table too small for id".into()));
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&encoded[encoded.len() - 16..]);
    Ok(out)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    if bytes.len() < *i + 2 {
        return Err(NpError::TableFormat("unexpected eof".into()));
    }
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    if bytes.len() < *i + 4 {
        return Err(NpError::TableFormat("unexpected eof".into()));
    }
    let mut a = [0u8; 4];
    a.copy_from_slice(&bytes[*i..*i + 4]);
    *i += 4;
    Ok(u32::from_le_bytes(a))
}
