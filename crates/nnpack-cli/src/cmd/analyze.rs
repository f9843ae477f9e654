use clap::Args;
use std::io::Cursor;

use nnpack_core::model::bitmodel::{encode_values, model_values};
use nnpack_core::model::cutoffs::{ClassHistogram, CutoffTable};
use nnpack_core::model::quantize::{quantize_all, DEFAULT_QUANTIZE};

use crate::io::weights_file;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input weight list (one number per line)
    #[arg(long)]
    pub r#in: String,

    /// Quantization step
    #[arg(long, default_value_t = DEFAULT_QUANTIZE)]
    pub quantize: u32,

    /// Also run the encoder and report the actual packed size
    #[arg(long, default_value_t = false)]
    pub encode: bool,

    /// Also report zstd size of the quantized values (i32 LE) as a scoreboard
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub zstd: bool,

    /// Zstd compression level (1..=22 typical). Higher is slower.
    #[arg(long, default_value_t = 19)]
    pub zstd_level: i32,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    if args.quantize == 0 {
        anyhow::bail!("--quantize must be non-zero");
    }

    let weights = weights_file::load_weights(&args.r#in)?;
    let q = quantize_all(&weights, args.quantize);
    let h = ClassHistogram::from_values(&q);
    let cutoffs = CutoffTable::from_histogram(&h);
    let stream = model_values(&q, &cutoffs)?;
    let entropy = stream.entropy_bits()?;
    let n = q.len();

    eprintln!("--- analyze ---");
    eprintln!("file               = {}", args.r#in);
    eprintln!("values             = {}", n);
    eprintln!("quantize           = {}", args.quantize);
    eprintln!("classes            = {}", h.classes());
    eprintln!("coded_bits         = {}", stream.len());
    eprintln!("expected_bits/value = {:.4}", h.expected_bits_per_value());
    eprintln!("entropy_bytes      = {:.1}", entropy / 8.0);

    eprintln!("--- classes ---");
    for k in 0..h.classes() {
        let sign = match h.sign_ratio(k) {
            Some(r) => format!("{:.3}", r),
            None => "-".to_string(),
        };
        eprintln!(
            "class={:>2} count={:>8} freq={:.5} cutoff={:>3} neg_ratio={}",
            k,
            h.counts[k],
            h.frequency(k),
            cutoffs.get(k).map(|p| p.get()).unwrap_or(0),
            sign
        );
    }

    if args.encode {
        let (_stream, bytes) = encode_values(&q, &cutoffs)?;
        let bpv = if n == 0 { 0.0 } else { (bytes.len() * 8) as f64 / n as f64 };
        eprintln!("--- encode ---");
        eprintln!("packed_bytes       = {}", bytes.len());
        eprintln!("bits/value         = {:.4}", bpv);
        eprintln!(
            "overhead_bits      = {:.1}",
            (bytes.len() * 8) as f64 - entropy
        );
    }

    if args.zstd {
        let raw: Vec<u8> = q.iter().flat_map(|v| v.to_le_bytes()).collect();
        let z = zstd_size(&raw, args.zstd_level)?;
        let bpv = if n == 0 { 0.0 } else { (z * 8) as f64 / n as f64 };
        eprintln!("--- zstd ---");
        eprintln!("zstd_level         = {}", args.zstd_level);
        eprintln!("zstd_bytes         = {}", z);
        eprintln!("bits/value         = {:.4}", bpv);
    }

    Ok(())
}

fn zstd_size(bytes: &[u8], level: i32) -> anyhow::Result<usize> {
    let out = zstd::stream::encode_all(Cursor::new(bytes), level)?;
    Ok(out.len())
}
