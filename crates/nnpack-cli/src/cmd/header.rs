use anyhow::Context;
use clap::Args;

use crate::io::{cpp, pack};

#[derive(Args, Debug)]
pub struct HeaderArgs {
    /// Input .npk path
    #[arg(long)]
    pub r#in: String,

    /// Output C++ source path
    #[arg(long)]
    pub out: String,
}

pub fn run(args: HeaderArgs) -> anyhow::Result<()> {
    let (tid, p) = pack::read_pack_with_id(&args.r#in)?;
    let src = cpp::render_source(&p.table, p.value_count, &p.data);
    std::fs::write(&args.out, src).with_context(|| format!("write {}", args.out))?;
    eprintln!(
        "header ok: out={} classes={} bytes={} table_id={}",
        args.out,
        p.table.cutoffs.len(),
        p.data.len(),
        tid
    );
    Ok(())
}
