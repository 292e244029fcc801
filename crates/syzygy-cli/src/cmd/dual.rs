// crates/syzygy-cli/src/cmd/dual.rs

use clap::Args;
use syzygy_core::defaults;
use syzygy_core::search::find_dual_days;

use super::{OrbitArgs, OutputArgs};
use crate::io::{self, jsonl, text, OutputFormat};

#[derive(Args)]
pub struct DualArgs {
    #[command(flatten)]
    pub orbit: OrbitArgs,

    /// Search horizon in days (0 = examine nothing)
    #[arg(long, default_value_t = defaults::DUAL_MAX_DAYS)]
    pub max_days: u64,

    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn run(args: DualArgs) -> anyhow::Result<()> {
    let fmt = OutputFormat::parse(&args.out.fmt)?;
    let params = args.orbit.params(args.max_days);

    let r = find_dual_days(&params)?;
    log::info!("dual scan examined {} of {} days", r.days_scanned, params.max_days);

    let lines = match fmt {
        OutputFormat::Text => text::dual_report(&r, params.max_days),
        OutputFormat::Jsonl => vec![jsonl::dual_record(&params, &r)],
    };
    io::write_lines(&lines, args.out.output.as_deref())
}
