use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use notify_offenses::assembler::LineAssembler;
use notify_offenses::cli::{Cli, ColorChoice};
use notify_offenses::config::{Config, ConfigLoader, FileConfigLoader};
use notify_offenses::finder::{OffenseFinder, PreparedOffenses};
use notify_offenses::model::OffendingFile;
use notify_offenses::output::{ColorMode, OutputFormat, render};
use notify_offenses::reporter::Reporter;
use notify_offenses::rules::RuleSet;
use notify_offenses::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use notify_offenses::{EXIT_CONFIG_ERROR, EXIT_OFFENSES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> notify_offenses::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);

    // 2. Discover files to scan
    let files = discover_files(cli, &config)?;
    if cli.verbose > 0 {
        eprintln!("Scanning {} file(s)", files.len());
        if cli.verbose > 1 {
            for file in &files {
                eprintln!("  {}", file.display());
            }
        }
    }

    // 3. Compile the user rule overlay once for the whole batch
    let rules = RuleSet::builtin();
    let finder = OffenseFinder::new(rules, config.force, config.override_builtin);
    let prepared = (!config.offenses.is_empty()).then(|| finder.prepare(&config.offenses));
    if let Some(ref prepared) = prepared {
        for warning in &prepared.warnings {
            eprintln!("Warning: {warning}");
        }
    }

    // 4. Scan each file (parallel; the result model keeps discovery order)
    let assembler = LineAssembler::new(config.tabwidth, config.cleaner);
    let assembled = assemble_files(&files, &assembler, &finder, prepared.as_ref());

    // 5. Render and report
    let color_mode = color_choice_to_mode(cli.color);
    let reporter = Reporter::new(cli.quiet);

    let console_output = render_with(config.stout, &assembled, color_mode)?;
    reporter.console(&console_output);

    if config.save {
        // The file report keeps its decoration even without a terminal.
        let file_output = render_with(config.output, &assembled, ColorMode::Always)?;
        reporter.save(config.dest.as_deref(), &file_output)?;
    }

    // 6. Exit code reflects whether anything was found
    let total: usize = assembled.iter().map(OffendingFile::total_offenses).sum();
    if total > 0 {
        Ok(EXIT_OFFENSES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> notify_offenses::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.force {
        config.force = true;
    }
    if cli.no_force {
        config.force = false;
    }
    if cli.override_builtin {
        config.override_builtin = true;
    }
    if let Some(tabwidth) = cli.tabwidth {
        config.tabwidth = tabwidth;
    }
    if let Some(cleaner) = cli.cleaner {
        config.cleaner = cleaner;
    }
    if let Some(stout) = cli.stout {
        config.stout = stout;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.save {
        config.save = true;
    }
    if let Some(ref dest) = cli.dest {
        config.dest = Some(dest.clone());
    }
    if let Some(ref ext) = cli.ext {
        config.extensions = ext.clone();
    }
    config.exclude.extend(cli.exclude.iter().cloned());
}

fn discover_files(cli: &Cli, config: &Config) -> notify_offenses::Result<Vec<PathBuf>> {
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    let scanner = DirectoryScanner::new(filter);

    let mut all_files = Vec::new();
    for path in &cli.paths {
        if !path.exists() {
            eprintln!("Warning: source path \"{}\" not found", path.display());
            continue;
        }
        all_files.extend(scanner.scan(path)?);
    }
    Ok(all_files)
}

fn assemble_files(
    files: &[PathBuf],
    assembler: &LineAssembler,
    finder: &OffenseFinder,
    prepared: Option<&PreparedOffenses>,
) -> Vec<OffendingFile> {
    files
        .par_iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(data) => Some(assembler.assemble(
                &path.to_string_lossy(),
                &data,
                finder,
                prepared,
            )),
            Err(e) => {
                eprintln!(
                    "Warning: source file \"{}\" skipped: {e}",
                    path.display()
                );
                None
            }
        })
        .collect()
}

fn render_with(
    format: OutputFormat,
    files: &[OffendingFile],
    color: ColorMode,
) -> notify_offenses::Result<String> {
    let mut formatter = format.formatter(color);
    render(files, formatter.as_mut())
}
