//! 学習データ生成パイプライン
//!
//! 棋譜ファイル1つにつき1レコードを生成する。
//!
//! 1. `corpus`: 入力ディレクトリから棋譜ファイル（`*.game` / `*.game.gz`）を列挙
//! 2. `game_log`: 棋譜を列インデックスの列として読み込む
//! 3. `sampler`: 棋譜のランダムな途中局面（1手以上、全手未満）を再現
//! 4. `rollout`: その局面からエンジン同士で終局（または手数上限）まで指し進める
//! 5. `outcome`: 結果をサンプル局面の手番側視点のラベルに変換
//! 6. `record`: `<FEN>\t<最初の指し手>\t<ラベル>` を1行書いて即 flush
//!
//! 乱数源は呼び出し側が所有し `&mut` で渡す。同じシード・同じファイル順なら
//! 出力はバイト単位で一致する。

pub mod corpus;
pub mod game_log;
pub mod outcome;
pub mod pipeline;
pub mod record;
pub mod rollout;
pub mod sampler;

pub use corpus::discover_game_files;
pub use game_log::GameLog;
pub use outcome::Outcome;
pub use pipeline::{BatchSummary, DatasetConfig, process_file, process_log, run_batch};
pub use record::DatasetRecord;
pub use rollout::{Rollout, RolloutContext, run_rollout};
pub use sampler::{SampledPosition, replay_prefix, sample_position};

use c4_core::position::MoveError;
use c4_core::search::SearchError;

/// データ生成エラー
///
/// どれもバッチ全体を中断させる。`TooShort` のみ設定によりスキップできる。
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// 棋譜の行が空行でも整数でもない
    #[error("line {line}: expected a move index, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// 途中局面を選べるほど手数がない
    #[error("game log has {len} move(s); at least 2 are required to sample a position")]
    TooShort { len: usize },

    /// 盤面が着手を受け付けなかった
    #[error("illegal move at ply {ply}: {source}")]
    IllegalMove {
        ply: usize,
        #[source]
        source: MoveError,
    },

    /// サンプルした途中局面が既に終局している（棋譜の整合性違反）
    #[error("sampled prefix of length {prefix_len} already ends the game ({fen})")]
    TerminalSample { prefix_len: usize, fen: String },

    /// 終局局面からロールアウトを開始しようとした
    #[error("cannot start a rollout from terminal position {0}")]
    TerminalStart(String),

    #[error(transparent)]
    Engine(#[from] SearchError),

    /// 出力レコードの形式不正
    #[error("malformed record {0:?}")]
    MalformedRecord(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
