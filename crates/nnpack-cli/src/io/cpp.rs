// crates/nnpack-cli/src/io/cpp.rs
//
// C++ source with the decoder's inputs baked in: the cutoff table and the
// compressed byte array.

use nnpack_core::Table;

const BYTES_PER_ROW: usize = 20;

pub fn render_source(table: &Table, value_count: u64, data: &[u8]) -> String {
    let mut out = String::with_capacity(64 + data.len() * 4);
    out.push_str(&format!("#define QUANTIZE {}\n", table.quantize));
    out.push_str(&format!("#define WEIGHT_COUNT {}\n", value_count));

    let thresholds: Vec<String> = table.cutoffs.iter().map(|p| p.get().to_string()).collect();
    out.push_str(&format!(
        "\nuint32_t thresholds[] = {{{}}};\nuint8_t compressed_data[] = {{",
        thresholds.join(",")
    ));

    for (i, b) in data.iter().enumerate() {
        if i != 0 {
            out.push(',');
        }
        if i % BYTES_PER_ROW == 0 {
            out.push_str("\n\t");
        }
        out.push_str(&format!("{:>3}", b));
    }
    out.push_str("};");
    out
}
