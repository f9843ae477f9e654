use clap::Args;
use nnpack_core::table::format::table_id_hex;

use crate::io::pack;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .npk path
    #[arg(long)]
    pub r#in: String,

    /// Also recompute table_id from the decoded table and report match/mismatch
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verify_table_id: bool,

    /// If set, dump the raw codec bytes to this file path
    #[arg(long)]
    pub dump_data: Option<String>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let (embedded_tid, p) = pack::read_pack_with_id(&args.r#in)?;

    eprintln!("--- inspect ---");
    eprintln!("file             = {}", args.r#in);
    eprintln!("npk_ok           = true (magic + crc32 verified)");
    eprintln!("values           = {}", p.value_count);
    eprintln!("coded_bits       = {}", p.bit_count);
    eprintln!("data_bytes       = {}", p.data.len());
    if p.value_count > 0 {
        eprintln!(
            "bits_per_value   = {:.4}",
            (p.data.len() * 8) as f64 / p.value_count as f64
        );
    }
    eprintln!("embedded_table_id = {}", embedded_tid);

    if args.verify_table_id {
        let recomputed = table_id_hex(&p.table);
        let ok = recomputed == embedded_tid;
        eprintln!("recomputed_table_id = {}", recomputed);
        eprintln!("table_id_match      = {}", ok);
        if !ok {
            eprintln!("WARNING: embedded table_id != recomputed table_id");
        }
    }

    eprintln!("--- table ---");
    eprintln!("version          = {}", p.table.version);
    eprintln!("quantize         = {}", p.table.quantize);
    let cut: Vec<String> = p.table.cutoffs.iter().map(|c| c.get().to_string()).collect();
    eprintln!("cutoffs          = [{}]", cut.join(","));

    if let Some(out) = args.dump_data.as_deref() {
        std::fs::write(out, &p.data)?;
        eprintln!("dump_data        = {} ({} bytes)", out, p.data.len());
    }

    Ok(())
}
