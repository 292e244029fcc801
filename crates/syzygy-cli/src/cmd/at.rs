// crates/syzygy-cli/src/cmd/at.rs

use clap::Args;
use syzygy_core::search::snapshot;

use super::{OrbitArgs, OutputArgs};
use crate::io::{self, jsonl, text, OutputFormat};

#[derive(Args)]
pub struct AtArgs {
    #[command(flatten)]
    pub orbit: OrbitArgs,

    /// Day to inspect (day 0 = every body at 0 deg)
    #[arg(long)]
    pub day: u64,

    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn run(args: AtArgs) -> anyhow::Result<()> {
    let fmt = OutputFormat::parse(&args.out.fmt)?;
    let params = args.orbit.params(0);

    let snap = snapshot(&params, args.day)?;

    let lines = match fmt {
        OutputFormat::Text => text::snapshot_report(&params, &snap),
        OutputFormat::Jsonl => vec![jsonl::snapshot_record(&snap)],
    };
    io::write_lines(&lines, args.out.output.as_deref())
}
