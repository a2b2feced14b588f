//! バッチ処理
//!
//! 棋譜ファイルを順に処理し、1ファイルにつき1レコードを出力する。
//! どのファイルでエラーが起きてもバッチ全体を中断する（部分的に誤ったラベルを
//! 出すよりも止まる方を優先する）。例外は `skip_short_logs` 指定時の短すぎる棋譜のみ。

use std::io::Write;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use c4_core::search::Engine;
use rand::Rng;
use serde::Serialize;

use super::{
    DatasetError, DatasetRecord, GameLog, Outcome, run_rollout, sample_position,
};

/// パイプライン設定
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    /// ロールアウトの手数上限
    pub limit_moves: Option<NonZeroU32>,
    /// 2手未満の棋譜を警告してスキップする（既定はエラー）
    pub skip_short_logs: bool,
}

/// バッチ集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub files: usize,
    pub records: usize,
    pub skipped: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub truncated: usize,
}

impl BatchSummary {
    fn count(&mut self, outcome: Outcome) {
        self.records += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Truncated => self.truncated += 1,
        }
    }
}

/// 1局分の棋譜からレコードを1件作る。
pub fn process_log<E, R>(
    engine: &mut E,
    log: &GameLog,
    config: &DatasetConfig,
    rng: &mut R,
) -> Result<DatasetRecord, DatasetError>
where
    E: Engine + ?Sized,
    R: Rng + ?Sized,
{
    let sampled = sample_position(log, rng)?;
    // 手番はロールアウト前に確定させておく
    let side = sampled.position.side_to_move();
    let rollout = run_rollout(engine, &sampled.position, config.limit_moves)?;
    let outcome = Outcome::from_end(rollout.final_position().end(), side);

    log::debug!(
        "prefix={} side={} rollout_plies={} outcome={}",
        sampled.prefix_len,
        side,
        rollout.moves().len(),
        outcome
    );
    Ok(DatasetRecord::new(&sampled.position, rollout.first_move(), outcome))
}

/// 棋譜ファイル1つを処理する。スキップした場合は `None`。
pub fn process_file<E, R>(
    engine: &mut E,
    path: &Path,
    config: &DatasetConfig,
    rng: &mut R,
) -> Result<Option<DatasetRecord>>
where
    E: Engine + ?Sized,
    R: Rng + ?Sized,
{
    let log = GameLog::load(path).with_context(|| format!("Failed to read {}", path.display()))?;
    match process_log(engine, &log, config, rng) {
        Ok(record) => Ok(Some(record)),
        Err(DatasetError::TooShort { len }) if config.skip_short_logs => {
            log::warn!("Skipping {} ({len} move(s))", path.display());
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to process {}", path.display())),
    }
}

/// ファイル列を順に処理し、レコードを `out` に書き出す。
pub fn run_batch<E, R, W>(
    engine: &mut E,
    files: &[PathBuf],
    config: &DatasetConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<BatchSummary>
where
    E: Engine + ?Sized,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let total = files.len();
    let mut summary = BatchSummary {
        files: total,
        ..BatchSummary::default()
    };

    for (i, path) in files.iter().enumerate() {
        let n = i + 1;
        log::info!(
            "=== Processing file {n}/{total} ({:.2}%)",
            n as f64 / total as f64 * 100.0
        );
        log::debug!("{}", path.display());

        match process_file(engine, path, config, rng)? {
            Some(record) => {
                record
                    .write_to(out)
                    .with_context(|| format!("Failed to write record for {}", path.display()))?;
                summary.count(record.outcome);
            }
            None => summary.skipped += 1,
        }
    }
    Ok(summary)
}
