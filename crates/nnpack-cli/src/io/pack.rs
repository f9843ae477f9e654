// crates/nnpack-cli/src/io/pack.rs

use anyhow::Context;
use nnpack_core::table::checksum::hex16;
use nnpack_core::table::format as table_format;
use nnpack_core::Table;

const MAGIC: &[u8; 4] = b"NPK1";

/// Decoded contents of a .npk file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    pub table: Table,
    /// Number of weights; the byte stream carries no length of its own.
    pub value_count: u64,
    /// Number of coded bits; decompress checks the replay against it.
    pub bit_count: u64,
    pub data: Vec<u8>,
}

/// .npk layout (little-endian):
/// MAGIC[4]
/// table_len:u32
/// table_bytes[table_len]   (NPT1 blob, includes its own crc + blake3_16)
/// value_count:u64
/// bit_count:u64
/// data_len:u64
/// data_bytes[data_len]     (codec output)
/// crc32:u32                (over everything before crc32)
pub fn encode_pack(p: &Pack) -> Vec<u8> {
    let table_bytes = table_format::encode(&p.table);

    let mut out = Vec::with_capacity(4 + 4 + table_bytes.len() + 24 + p.data.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&(table_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&table_bytes);
    out.extend_from_slice(&p.value_count.to_le_bytes());
    out.extend_from_slice(&p.bit_count.to_le_bytes());
    out.extend_from_slice(&(p.data.len() as u64).to_le_bytes());
    out.extend_from_slice(&p.data);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}

/// Parse a .npk image and return (table_id_hex, Pack).
///
/// Validates the NPK1 magic, the outer crc32, and the embedded table blob
/// (magic + crc + blake3_16).
pub fn decode_pack(bytes: &[u8]) -> anyhow::Result<(String, Pack)> {
    if bytes.len() < 4 + 4 + 24 + 4 {
        anyhow::bail!("npk too small");
    }
    if &bytes[0..4] != MAGIC {
        anyhow::bail!("bad npk magic");
    }

    let crc_off = bytes.len() - 4;
    let mut at = crc_off;
    let crc_expected = read_u32(bytes, &mut at)?;
    if crc_expected != crc32(&bytes[..crc_off]) {
        anyhow::bail!("npk crc32 mismatch");
    }

    let mut i = 4usize;
    let table_len = read_u32(bytes, &mut i)? as usize;
    let table_end = i + table_len;
    if table_end > crc_off {
        anyhow::bail!("npk table_len out of range");
    }
    let table_blob = &bytes[i..table_end];
    let tid = hex16(&table_format::table_id_16_from_encoded(table_blob)?);
    let table = table_format::decode(table_blob)?;
    i = table_end;

    let value_count = read_u64(bytes, &mut i)?;
    let bit_count = read_u64(bytes, &mut i)?;
    let data_len = read_u64(bytes, &mut i)?;
    if crc_off.checked_sub(i).map(|n| n as u64) != Some(data_len) {
        anyhow::bail!("npk data_len mismatch");
    }
    // Every value codes at least its class stop bit.
    if value_count > bit_count {
        anyhow::bail!("npk value_count {value_count} exceeds bit_count {bit_count}");
    }
    let data = bytes[i..crc_off].to_vec();

    Ok((
        tid,
        Pack {
            table,
            value_count,
            bit_count,
            data,
        },
    ))
}

pub fn write_pack(path: &str, p: &Pack) -> anyhow::Result<()> {
    std::fs::write(path, encode_pack(p)).with_context(|| format!("write {path}"))?;
    Ok(())
}

pub fn read_pack_with_id(path: &str) -> anyhow::Result<(String, Pack)> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    decode_pack(&bytes).with_context(|| format!("decode {path}"))
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn read_u32(bytes: &[u8], i: &mut usize) -> anyhow::Result<u32> {
    let end = *i + 4;
    let raw: [u8; 4] = bytes
        .get(*i..end)
        .and_then(|s| s.try_into().ok())
        .context("unexpected eof")?;
    *i = end;
    Ok(u32::from_le_bytes(raw))
}

fn read_u64(bytes: &[u8], i: &mut usize) -> anyhow::Result<u64> {
    let end = *i + 8;
    let raw: [u8; 8] = bytes
        .get(*i..end)
        .and_then(|s| s.try_into().ok())
        .context("unexpected eof")?;
    *i = end;
    Ok(u64::from_le_bytes(raw))
}
