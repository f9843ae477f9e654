use clap::Args;
use nnpack_core::model::bitmodel::decode_values_counted;
use nnpack_core::model::quantize::dequantize;

use crate::io::{pack, weights_file};

#[derive(Args, Debug)]
pub struct DecompressArgs {
    /// Input .npk path
    #[arg(long)]
    pub r#in: String,

    /// Output weight list path
    #[arg(long)]
    pub out: String,
}

pub fn run(args: DecompressArgs) -> anyhow::Result<()> {
    let (tid, p) = pack::read_pack_with_id(&args.r#in)?;

    let count = usize::try_from(p.value_count)?;
    let (q, bits) = decode_values_counted(&p.data, &p.table.cutoffs, count)?;
    tracing::debug!(values = q.len(), bits, bytes = p.data.len(), "replayed stream");
    if bits != p.bit_count {
        anyhow::bail!(
            "bit_count mismatch: header says {}, stream replays {}",
            p.bit_count,
            bits
        );
    }
    let weights: Vec<f64> = q.iter().map(|&v| dequantize(v, p.table.quantize)).collect();

    weights_file::save_weights(&args.out, &weights)?;
    eprintln!(
        "decompress ok: values={} bytes={} out={} table_id={}",
        weights.len(),
        p.data.len(),
        args.out,
        tid
    );
    Ok(())
}
