use colored::Colorize;
use fsmanifest::error::ProbeError;
use fsmanifest::model::{ProbeReport, ProcessResult};
use fsmanifest::strings::join_with_commas;
use std::io::{self, Write};

const TITLE: &str = "FSManifestInfo Rust Application";
const RULE_WIDTH: usize = 50;
const README_EXCERPT_CHARS: usize = 50;

pub(super) fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", format!("Starting {}", TITLE).green().bold())
}

pub(super) fn print_report<W: Write>(
    out: &mut W,
    result: &ProcessResult,
    readme: &str,
) -> io::Result<()> {
    out.write_all(render_report(result, readme).as_bytes())
}

pub(super) fn print_probe<W: Write>(
    out: &mut W,
    outcome: &Result<ProbeReport, ProbeError>,
) -> io::Result<()> {
    writeln!(out, "\n{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Testing HTTP request capability:")?;
    match outcome {
        Ok(report) => {
            let status = format!("API Status: {}", report.status);
            if (200..300).contains(&report.status) {
                writeln!(out, "{}", status.green())?;
            } else {
                writeln!(out, "{}", status.yellow())?;
            }
            writeln!(
                out,
                "Current rate limit: {}",
                report.rate_limit_url.as_deref().unwrap_or("N/A")
            )
        }
        Err(e) => writeln!(out, "{}", format!("Request failed: {}", e).red()),
    }
}

fn render_report(result: &ProcessResult, readme: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let stats = &result.word_stats;

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{rule}\n{TITLE}\n{rule}\n"));
    out.push_str(&format!("Message: {}\n", result.message));
    out.push_str(&format!("Words: {}\n", join_with_commas(&result.words)));
    out.push_str(&format!("Word count: {}\n", result.word_count));
    out.push_str(&format!(
        "Word stats: mean={:.2}, max={}, min={}\n",
        stats.mean_length, stats.max_length, stats.min_length
    ));
    out.push_str(&format!("Config: {}\n", result.config));
    out.push('\n');
    out.push_str("This demonstrates:\n");
    out.push_str("- Rust library modules (strings, processor)\n");
    out.push_str("- External crates (clap, serde_json, serde_yaml, reqwest, tracing)\n");
    out.push_str("- Data dependencies loaded via runfiles\n");
    out.push_str("- Layer separation (cli/app/locator)\n");
    out.push_str(&format!("{}\n", readme_line(readme)));
    out
}

fn readme_line(readme: &str) -> String {
    if readme.chars().count() > README_EXCERPT_CHARS {
        let excerpt: String = readme.chars().take(README_EXCERPT_CHARS).collect();
        format!("- README content: {}...", excerpt)
    } else {
        format!("- README: {}", readme)
    }
}
