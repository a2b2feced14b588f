/// 四目並べの学習データ生成ツール
///
/// 棋譜ファイル（1行1手の列インデックス、`*.game` / `*.game.gz`）を走査し、
/// 1局につき「途中局面・エンジンの最初の指し手・結果ラベル」の1レコードを出力する。
///
/// 使い方:
///   # 標準出力へ（再現用にシード指定）
///   build_dataset -s 42 games/
///
///   # gzip 出力、手数上限付き、集計を JSON で保存
///   build_dataset -d 8 -l 20 -o data.tsv.gz --summary summary.json games/ more_games/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use c4_core::search::{MoveOrdering, PvsEngine};
use c4_tools::common::io::open_writer;
use c4_tools::dataset::{BatchSummary, DatasetConfig, discover_game_files, run_batch};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(about = "Build a Connect Four training dataset from game logs")]
struct Cli {
    /// Directories to scan recursively for game logs
    #[arg(required = true, value_name = "DIRECTORY")]
    paths: Vec<PathBuf>,

    /// Random seed (OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum search depth of the engine
    #[arg(short = 'd', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    max_depth: u32,

    /// Maximum number of rollout moves (unlimited when omitted)
    #[arg(short, long)]
    limit_moves: Option<NonZeroU32>,

    /// Output file (`-` = stdout, `*.gz` = gzip)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Move ordering used by the search (diff, center, natural)
    #[arg(long, default_value_t = MoveOrdering::Diff)]
    ordering: MoveOrdering,

    /// Skip game logs with fewer than two moves instead of failing
    #[arg(long)]
    skip_short_logs: bool,

    /// Write the batch summary as JSON to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl Cli {
    fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig {
            limit_moves: self.limit_moves,
            skip_short_logs: self.skip_short_logs,
        }
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let files = discover_game_files(&cli.paths)?;
    log::info!("Found {} game file(s) under {} root(s)", files.len(), cli.paths.len());

    let mut rng = if let Some(seed) = cli.seed {
        log::info!("Using seed: {seed}");
        ChaCha8Rng::seed_from_u64(seed)
    } else {
        ChaCha8Rng::from_os_rng()
    };

    let mut engine = PvsEngine::new(cli.max_depth, cli.ordering);
    log::info!(
        "Engine: max_depth={} ordering={}",
        engine.max_depth(),
        engine.ordering()
    );

    let mut out = open_writer(cli.output.as_deref()).context("Failed to open output")?;
    let result = run_batch(&mut engine, &files, &cli.dataset_config(), &mut rng, &mut out);
    // バッチの成否に関わらず出力は閉じる
    let closed = out.close().context("Failed to close output");
    let summary = result?;
    closed?;

    report(&summary);
    if let Some(path) = &cli.summary {
        write_summary(path, &summary)?;
    }
    Ok(())
}

fn report(summary: &BatchSummary) {
    log::info!(
        "Done: {} record(s) from {} file(s), {} skipped",
        summary.records,
        summary.files,
        summary.skipped
    );
    log::info!(
        "Labels: win={} draw={} loss={} truncated={}",
        summary.wins,
        summary.draws,
        summary.losses,
        summary.truncated
    );
}

fn write_summary(path: &Path, summary: &BatchSummary) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    log::info!("Summary written to {}", path.display());
    Ok(())
}
