//! ファイルI/Oユーティリティ（gzip対応）
//!
//! 拡張子が `.gz` のときは gzip として扱う。出力先の `-` は標準出力。

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const READER_BUF_CAP: usize = 64 * 1024; // 64 KiB

fn is_stdio(p: &Path) -> bool {
    p.as_os_str() == "-"
}

fn is_gzip(p: &Path) -> bool {
    p.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// 入力を開く（`.gz` は展開して読む）
pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let p = path.as_ref();
    let f = File::open(p)?;
    if is_gzip(p) {
        let dec = flate2::read::GzDecoder::new(f);
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, dec)));
    }
    Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, f)))
}

/// 出力先
///
/// `flush` はレコード単位で呼ばれる前提。gzip の場合は sync flush になるため、
/// 途中で落ちてもそこまでのレコードは展開可能な状態で残る。
#[must_use = "call .close() to propagate compression/IO errors"]
pub enum Writer {
    Plain(BufWriter<File>),
    Stdout(io::Stdout),
    Gz(flate2::write::GzEncoder<File>),
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Plain(f) => f.write(buf),
            Writer::Stdout(s) => s.write(buf),
            Writer::Gz(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => f.flush(),
            Writer::Stdout(s) => s.flush(),
            Writer::Gz(e) => e.flush(),
        }
    }
}

impl Writer {
    /// ストリームを確定して閉じる（gzip はフッタを書き出す）
    pub fn close(self) -> io::Result<()> {
        match self {
            Writer::Plain(f) => {
                let file = f.into_inner().map_err(|e| e.into_error())?;
                file.sync_all()
            }
            Writer::Stdout(mut s) => s.flush(),
            Writer::Gz(e) => {
                let mut f = e.finish()?;
                f.flush()
            }
        }
    }
}

/// 出力を開く（None または `-` は標準出力、`.gz` は gzip 圧縮）
pub fn open_writer(path: Option<&Path>) -> io::Result<Writer> {
    let Some(p) = path.filter(|p| !is_stdio(p)) else {
        return Ok(Writer::Stdout(io::stdout()));
    };
    let f = File::create(p)?;
    if is_gzip(p) {
        let enc = flate2::write::GzEncoder::new(f, flate2::Compression::default());
        return Ok(Writer::Gz(enc));
    }
    Ok(Writer::Plain(BufWriter::new(f)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_all(path: &Path) -> String {
        let mut s = String::new();
        open_reader(path).unwrap().read_to_string(&mut s).unwrap();
        s
    }

    #[test]
    fn test_plain_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let mut w = open_writer(Some(&path)).unwrap();
        writeln!(w, "a\tb\tc").unwrap();
        w.close().unwrap();
        assert_eq!(read_all(&path), "a\tb\tc\n");
    }

    #[test]
    fn test_gzip_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv.gz");
        let mut w = open_writer(Some(&path)).unwrap();
        writeln!(w, "line1").unwrap();
        w.flush().unwrap();
        writeln!(w, "line2").unwrap();
        w.close().unwrap();
        assert_eq!(read_all(&path), "line1\nline2\n");
    }

    #[test]
    fn test_reader_treats_dash_as_a_path() {
        let err = open_reader(Path::new("-")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_dash_means_stdout() {
        assert!(matches!(open_writer(Some(Path::new("-"))).unwrap(), Writer::Stdout(_)));
        assert!(matches!(open_writer(None).unwrap(), Writer::Stdout(_)));
    }
}
