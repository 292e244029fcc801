// crates/syzygy-cli/src/cmd/simple.rs

use clap::Args;
use syzygy_core::defaults;
use syzygy_core::search::find_same_side_day;

use super::{OrbitArgs, OutputArgs};
use crate::io::{self, jsonl, text, OutputFormat};

#[derive(Args)]
pub struct SimpleArgs {
    #[command(flatten)]
    pub orbit: OrbitArgs,

    /// Search horizon in days (0 = examine nothing)
    #[arg(long, default_value_t = defaults::SIMPLE_MAX_DAYS)]
    pub max_days: u64,

    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn run(args: SimpleArgs) -> anyhow::Result<()> {
    let fmt = OutputFormat::parse(&args.out.fmt)?;
    let params = args.orbit.params(args.max_days);

    let day = find_same_side_day(&params)?;

    let lines = match fmt {
        OutputFormat::Text => text::simple_report(day, params.max_days),
        OutputFormat::Jsonl => vec![jsonl::simple_record(&params, day)],
    };
    io::write_lines(&lines, args.out.output.as_deref())
}
