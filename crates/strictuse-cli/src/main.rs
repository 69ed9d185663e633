//! CLI entry point for strictuse.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `strictuse-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use strictuse_app::{
    CheckInput, PlanOutcome, parse_report_json, render_annotations, render_done_line,
    render_finding_lines, render_markdown, render_plan_lines, resolve_settings, run_check,
    run_plan, runtime_error_report, serialize_report, serialize_scope, to_renderable,
    verdict_exit_code,
};
use strictuse_settings::Overrides;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "strictuse",
    version,
    about = "Strict usage checks for dependencies that ask for them"
)]
struct Cli {
    /// Project root (directory containing composer.json and composer.lock).
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Path to strictuse config TOML, relative to the project root.
    #[arg(long, default_value = "strictuse.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|audit).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log debug details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide whether the analyzer must run, and on what.
    Plan {
        /// Where to write the analysis scope JSON (only when analysis is due).
        #[arg(long)]
        scope_out: Option<Utf8PathBuf>,
    },

    /// Filter analyzer diagnostics to strictly checked namespaces and write artifacts.
    Check {
        /// Analyzer output (JSON).
        #[arg(long)]
        diagnostics: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/strictuse/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/strictuse/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/strictuse/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/strictuse/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.cmd {
        Commands::Plan { scope_out } => cmd_plan(&cli, scope_out.as_deref()),
        Commands::Check {
            diagnostics,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(&cli, diagnostics, report_out, *write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("strictuse error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// `STRICTUSE_LOG` wins over `RUST_LOG`; `-v` wins over both.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("STRICTUSE_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn project_root(cli: &Cli) -> anyhow::Result<Utf8PathBuf> {
    let root = cli
        .project_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.project_root.clone());
    if !root.is_dir() {
        anyhow::bail!("project root does not exist: {root}");
    }
    Ok(root)
}

/// Missing config file is allowed (defaults apply).
fn read_config(cli: &Cli, project_root: &Utf8Path) -> String {
    let path = project_root.join(&cli.config);
    match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            debug!(%path, error = %err, "no config file, using defaults");
            String::new()
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        max_findings: cli.max_findings,
    }
}

fn cmd_plan(cli: &Cli, scope_out: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let root = project_root(cli)?;
    let cfg_text = read_config(cli, &root);
    let resolved = resolve_settings(&cfg_text, overrides(cli))?;

    let outcome = run_plan(&root, &resolved.effective.sentinel)?;
    for line in render_plan_lines(&outcome) {
        println!("{line}");
    }

    if let (PlanOutcome::Analyze(plan), Some(out)) = (&outcome, scope_out) {
        let data = serialize_scope(&plan.to_scope())?;
        write_file(out, &data).context("write analysis scope")?;
    }

    Ok(0)
}

fn cmd_check(
    cli: &Cli,
    diagnostics: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<i32> {
    let result = (|| -> anyhow::Result<i32> {
        let root = project_root(cli)?;
        let cfg_text = read_config(cli, &root);

        let output = run_check(CheckInput {
            project_root: &root,
            config_text: &cfg_text,
            overrides: overrides(cli),
            diagnostics_path: diagnostics,
        })?;

        for line in render_plan_lines(&output.plan) {
            println!("{line}");
        }

        write_file(report_out, &serialize_report(&output.report)?).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if write_markdown {
            write_file(markdown_out, render_markdown(&renderable).as_bytes())
                .context("write markdown")?;
        }

        let code = verdict_exit_code(output.report.verdict.status);
        if let PlanOutcome::Analyze(_) = output.plan {
            for line in render_finding_lines(&renderable) {
                println!("{line}");
            }
            if code == 0 {
                println!("{}", render_done_line());
            }
        }
        Ok(code)
    })();

    result.inspect_err(|err| {
        let report = runtime_error_report(&format!("{err:#}"));
        if let Ok(data) = serialize_report(&report) {
            let _ = write_file(report_out, &data);
        }
    })
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_file(out_path, md.as_bytes()).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(0)
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }

    Ok(0)
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
