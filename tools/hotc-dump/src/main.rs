//! # hotc-dump
//!
//! 卡片导出工具 - 将已提取的 HOTC 翻译文本解析为 JSON。
//!
//! ## 用法
//!
//! ```bash
//! # 在项目根目录使用 cargo 运行
//! cargo run -p hotc-dump -- dump dumps/dc_w01.txt
//! cargo run -p hotc-dump -- dump dumps/ --output cards.json --pretty
//! cargo run -p hotc-dump -- check dumps/ --fail-fast
//! cargo run -p hotc-dump -- --config hotc.json dump dumps/
//! ```
//!
//! 日志输出到 stderr，可用 `RUST_LOG` 覆盖日志级别。

mod config;
mod dump;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hotc_parser::CardRecord;
use tracing_subscriber::EnvFilter;

use config::{DumpConfig, ErrorPolicy, Overrides};
use dump::{DocumentReport, collect_files, process_file};

#[derive(Parser)]
#[command(name = "hotc-dump")]
#[command(about = "卡片导出工具 - 将 HOTC 翻译文本解析为 JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 配置文件（JSON）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 遇到第一个失败的段落即中止
    #[arg(long, global = true, conflicts_with = "skip_invalid")]
    fail_fast: bool,

    /// 跳过失败的段落（默认）
    #[arg(long, global = true)]
    skip_invalid: bool,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 解析并输出 JSON
    Dump {
        /// 输入文件或目录
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 输出文件（默认：stdout）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 格式化 JSON
        #[arg(long)]
        pretty: bool,
    },

    /// 只解析并汇报，不输出 JSON
    Check {
        /// 输入文件或目录
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("hotc-dump error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => DumpConfig::load(path)?,
        None => DumpConfig::default(),
    };
    let error_policy = if cli.fail_fast {
        Some(ErrorPolicy::FailFast)
    } else if cli.skip_invalid {
        Some(ErrorPolicy::SkipInvalid)
    } else {
        None
    };
    let pretty = matches!(cli.command, Commands::Dump { pretty: true, .. });
    let config = base.with_overrides(&Overrides {
        error_policy,
        pretty,
        verbose: cli.verbose,
    });

    init_logging(&config.log_level);

    match cli.command {
        Commands::Dump { paths, output, .. } => dump(&paths, output, &config),
        Commands::Check { paths } => check(&paths, &config),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_inputs(paths: &[PathBuf], config: &DumpConfig) -> anyhow::Result<Vec<DocumentReport>> {
    let files = collect_files(paths, &config.extension)?;
    if files.is_empty() {
        anyhow::bail!("未找到输入文件（.{}）", config.extension);
    }

    files
        .iter()
        .map(|file| process_file(file, config.error_policy))
        .collect()
}

fn dump(paths: &[PathBuf], output: Option<PathBuf>, config: &DumpConfig) -> anyhow::Result<()> {
    let reports = parse_inputs(paths, config)?;
    for report in &reports {
        for failure in &report.failures {
            tracing::warn!(file = %report.id, error = %failure, "段落已跳过");
        }
    }

    let records: Vec<&CardRecord> = reports.iter().flat_map(|r| r.records.iter()).collect();

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("无法创建输出文件: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, &records)?;
    } else {
        serde_json::to_writer(&mut writer, &records)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    if let Some(path) = output {
        eprintln!("已写入 {} 张卡片: {}", records.len(), path.display());
    }
    Ok(())
}

fn check(paths: &[PathBuf], config: &DumpConfig) -> anyhow::Result<()> {
    let reports = parse_inputs(paths, config)?;

    let mut total_failures = 0;
    for report in &reports {
        eprintln!(
            "{}: {} 个段落，{} 成功，{} 失败，{} 警告",
            report.id,
            report.sections(),
            report.records.len(),
            report.failures.len(),
            report.warnings.len()
        );
        for failure in &report.failures {
            eprintln!("  [ERROR] {}", failure);
        }
        for warning in &report.warnings {
            eprintln!("  [WARN] {}", warning);
        }
        total_failures += report.failures.len();
    }

    if total_failures > 0 {
        anyhow::bail!("检查发现 {} 个失败的段落", total_failures);
    }
    Ok(())
}
