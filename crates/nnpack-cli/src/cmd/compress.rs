use clap::Args;
use nnpack_core::model::bitmodel::{decode_values, encode_values};
use nnpack_core::model::quantize::{dequantize, quantize_all, DEFAULT_QUANTIZE};
use nnpack_core::table::format::table_id_hex;
use nnpack_core::Table;

use crate::io::pack::{self, Pack};
use crate::io::weights_file;

#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Input weight list (one number per line)
    #[arg(long)]
    pub r#in: String,

    /// Output .npk path
    #[arg(long)]
    pub out: String,

    /// Quantization step: weights are stored as round(w * quantize)
    #[arg(long, default_value_t = DEFAULT_QUANTIZE)]
    pub quantize: u32,

    /// Decode the packed stream again and compare before writing
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verify: bool,

    /// Optional: write the quantized weights (as the decoder will see them)
    #[arg(long)]
    pub dump_quantized: Option<String>,
}

pub fn run(args: CompressArgs) -> anyhow::Result<()> {
    if args.quantize == 0 {
        anyhow::bail!("--quantize must be non-zero");
    }

    let weights = weights_file::load_weights(&args.r#in)?;
    let q = quantize_all(&weights, args.quantize);
    let table = Table::from_values(&q, args.quantize)?;

    let (stream, data) = encode_values(&q, &table.cutoffs)?;
    tracing::debug!(
        values = q.len(),
        bits = stream.len(),
        bytes = data.len(),
        classes = table.cutoffs.len(),
        "encoded weights"
    );

    if args.verify {
        let back = decode_values(&data, &table.cutoffs, q.len())?;
        if back != q {
            anyhow::bail!("self-check failed: decoded values differ from input");
        }
        tracing::debug!("self-check passed");
    }

    let entropy = stream.entropy_bits()?;
    let p = Pack {
        table,
        value_count: q.len() as u64,
        bit_count: stream.len() as u64,
        data,
    };
    pack::write_pack(&args.out, &p)?;

    if let Some(path) = args.dump_quantized.as_deref() {
        let deq: Vec<f64> = q.iter().map(|&v| dequantize(v, args.quantize)).collect();
        weights_file::save_weights(path, &deq)?;
        eprintln!("dumped quantized: {} ({} values)", path, deq.len());
    }

    let bits_per_value = if q.is_empty() {
        0.0
    } else {
        (p.data.len() * 8) as f64 / q.len() as f64
    };

    eprintln!(
        "compress ok: values={} bits={} bytes={} bits_per_value={:.4} entropy_bytes={:.1} out={} table_id={}",
        q.len(),
        stream.len(),
        p.data.len(),
        bits_per_value,
        entropy / 8.0,
        args.out,
        table_id_hex(&p.table)
    );

    Ok(())
}
