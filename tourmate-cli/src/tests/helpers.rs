//! Test helpers for writing answer files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory with a UTF-8 root path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_string_pretty(value).expect("serialize answers");
    write_utf8(path, payload.as_bytes());
}

/// Answers covering every wizard screen plus a three-stop route.
pub(super) fn complete_answers() -> Value {
    json!({
        "themes": [1, 3],
        "picks": ["2024-10-01", "2024-10-05"],
        "companions": [2],
        "budget": {"min_krw": 100_000, "max_krw": 300_000},
        "transport": "car",
        "waypoints": {
            "start": {"name": "Seoul Station", "x": 126.9707, "y": 37.5547},
            "end": {"name": "Gyeongbokgung", "x": 126.977, "y": 37.5796},
            "via": [{"name": "Namsan Tower", "x": 126.9882, "y": 37.5512}]
        }
    })
}
