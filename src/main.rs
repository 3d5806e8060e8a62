use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use typospot::checker::TypoChecker;
use typospot::cli::output::{OutputFormat, Reporter};
use typospot::config::{Overrides, ScanConfig};

#[derive(Parser, Debug)]
#[command(name = "typospot")]
#[command(version, about = "Find typos in source-code identifiers", long_about = None)]
struct Cli {
    /// Files, directories, or `dir/...` recursive patterns to scan
    #[arg(value_name = "TARGETS")]
    targets: Vec<String>,

    /// Ignore these corrections, comma separated (e.g. -i nto,creater)
    #[arg(short = 'i', long = "ignore", value_name = "WORDS", value_delimiter = ',')]
    ignore: Vec<String>,

    /// Include test files (*_test.rs and tests/ directories) [default: true]
    #[arg(long = "tests", value_name = "BOOL")]
    tests: Option<bool>,

    /// Find typos in function declarations only
    #[arg(long)]
    functions: bool,

    /// Find typos in constants only
    #[arg(long)]
    constants: bool,

    /// Find typos in variables only
    #[arg(long)]
    variables: bool,

    /// Exit with code 1 if any typo is found
    #[arg(long = "set-exit-status")]
    set_exit_status: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typospot", &mut io::stdout());
        return Ok(());
    }

    let config = ScanConfig::load(Overrides {
        ignore: cli.ignore,
        tests: cli.tests,
        functions: cli.functions,
        constants: cli.constants,
        variables: cli.variables,
        set_exit_status: cli.set_exit_status,
    })?;

    let checker = TypoChecker::new(&config)?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), cli.format, !cli.no_color);

    let found = checker.check_targets(&cli.targets, &config, &mut reporter)?;

    if found && config.fail_on_findings {
        std::process::exit(1);
    }

    Ok(())
}
