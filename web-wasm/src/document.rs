//! ブラウザのFileをアップロード対象として扱う

use rule_check_common::DocumentHandle;
use web_sys::{File, FileList};

#[derive(Debug, Clone)]
pub struct PdfFile(pub File);

impl PdfFile {
    pub fn file(&self) -> &File {
        &self.0
    }
}

impl DocumentHandle for PdfFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// FileListを先頭から順に取り出す
pub fn files_in(list: Option<FileList>) -> Vec<PdfFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PdfFile)
        .collect()
}
