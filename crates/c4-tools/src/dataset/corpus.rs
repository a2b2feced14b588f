//! 棋譜ファイルの列挙

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// 棋譜ファイルの拡張子
pub const GAME_EXTENSION: &str = "game";

/// `*.game` または `*.game.gz` か
pub fn is_game_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.strip_suffix(".gz").unwrap_or(name);
    Path::new(name).extension().and_then(|e| e.to_str()) == Some(GAME_EXTENSION)
}

/// ルートディレクトリ以下の棋譜ファイルを再帰的に列挙する。
///
/// ルートは引数順、各ルート内はファイル名順に走査するので、
/// 同じファイルシステム状態なら結果の順序は常に同じ。
pub fn discover_game_files<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        let root = root.as_ref();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            if entry.file_type().is_file() && is_game_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        log::debug!("{}: {} game file(s) so far", root.display(), files.len());
    }
    Ok(files)
}
