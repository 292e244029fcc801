// crates/syzygy-cli/src/io/mod.rs

use anyhow::Context;

pub mod jsonl;
pub mod text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Jsonl,
}

impl OutputFormat {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" | "json" => Ok(OutputFormat::Jsonl),
            other => anyhow::bail!("unknown --fmt: {other} (expected text or jsonl)"),
        }
    }
}

/// Write report lines to `output`, or stdout when no path is given.
pub fn write_lines(lines: &[String], output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut s = String::new();
            for l in lines {
                s.push_str(l);
                s.push('\n');
            }
            std::fs::write(path, s).with_context(|| format!("write report: {path}"))?;
            log::info!("wrote {} line(s) to {path}", lines.len());
        }
        None => {
            for l in lines {
                println!("{l}");
            }
        }
    }
    Ok(())
}
