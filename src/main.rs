use anyhow::Result;
use clap::Parser;

use greex::{
    DEFAULT_MAX_SUBSTRING_LEN, MAX_PATTERN_LEN, Report, Selection, SynthConfig, Synthesizer,
    logging,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// A string the pattern must accept (repeatable)
    #[arg(short = 'y', long = "valid", value_name = "STRING")]
    valid: Vec<String>,

    /// A string the pattern must reject (repeatable)
    #[arg(short = 'n', long = "invalid", value_name = "STRING")]
    invalid: Vec<String>,

    /// Return the first validated candidate in generator order
    #[arg(long)]
    first_match: bool,

    /// Longest pattern accepted
    #[arg(long, value_name = "N", default_value_t = MAX_PATTERN_LEN)]
    max_len: usize,

    /// Longest common substring searched for
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_SUBSTRING_LEN)]
    max_substring: usize,

    /// List every candidate and its verdict
    #[arg(short = 'e', long)]
    explain: bool,

    /// Run the built-in sample set
    #[arg(long)]
    demo: bool,

    /// More log output (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Built-in sample sets and the pattern each is expected to produce.
const DEMO: &[(&[&str], &[&str], &str)] = &[
    (&["abc", "def"], &["123", "456"], r"^\D+$"),
    (&["aaa", "abb", "acc"], &["bbb", "bcc", "bca"], "^[a].+$"),
    (&["abc1", "bbb1", "ccc1"], &["abc", "bbb", "ccc"], "^.+[1]$"),
    (&["abc-1", "bbb-1", "cde-1"], &["abc1", "bbb1", "cde1"], "^.+-.+$"),
    (
        &["user@domain.com", "test@site.net"],
        &["invalid@domain", "test.com"],
        r"^\D+@\w+\.\w+$",
    ),
    (&[], &["x"], "^$"),
    (&["x"], &[], "^.*$"),
];

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(logging::level_for(args.verbose));

    let config = SynthConfig {
        max_pattern_len: args.max_len,
        max_substring_len: args.max_substring,
        selection: if args.first_match {
            Selection::FirstMatch
        } else {
            Selection::Ranked
        },
    };
    config.check()?;
    let synth = Synthesizer::new(config);

    if args.demo || (args.valid.is_empty() && args.invalid.is_empty()) {
        for (i, &(valid, invalid, expected)) in DEMO.iter().enumerate() {
            let report = synth.explain(valid, invalid);
            println!(
                "Case {}: {} (expected: {})",
                i + 1,
                report.pattern,
                expected
            );
            if args.explain {
                print_candidates(&report);
            }
        }
        return Ok(());
    }

    let report = synth.explain(&args.valid, &args.invalid);
    if args.explain {
        print_candidates(&report);
    }
    println!("{}", report.pattern);
    Ok(())
}

fn print_candidates(report: &Report) {
    for candidate in &report.candidates {
        println!(
            "  {:<16} {:<22} rank {} {}",
            candidate.source.name(),
            candidate.pattern,
            candidate.priority.rank,
            candidate.verdict
        );
    }
    println!("  -> {:?}", report.outcome);
}
