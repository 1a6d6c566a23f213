//! 画面状態
//!
//! ファイル選択・アップロード・各アルゴリズムの実行中フラグ・出力URLを持つ。
//! I/Oは一切行わず、CLIとWebの両方から同じ遷移で更新する。

use crate::algorithm::Algorithm;

/// 出力画像の表示サイズ
pub const OUTPUT_WIDTH: u32 = 1200;
pub const OUTPUT_HEIGHT: u32 = 800;

/// 実行中のボタン表示
pub const PROCESSING_LABEL: &str = "Processing...";

/// アップロード完了時のメッセージ
pub const UPLOADED_MESSAGE: &str = "Image Uploaded Successfully :)";

/// 選択中の画像
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

// 中身のバイト列はログに出さない
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub selected_file: Option<SelectedFile>,
    pub uploaded: bool,
    pub fast_loading: bool,
    pub harris_loading: bool,
    pub shi_tomashi_loading: bool,
    pub output_url: Option<String>,
    /// 通信失敗など、直近のエラー
    pub last_error: Option<String>,
    /// ファイル選択の世代。読み込み完了が古い選択のものなら捨てる
    selection: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択
    ///
    /// 新しいファイルは再アップロードが必要で、前回の結果も無効になる
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selection = self.selection.wrapping_add(1);
        self.selected_file = file;
        self.uploaded = false;
        self.output_url = None;
        self.last_error = None;
    }

    /// 非同期にファイルを読み込む前に呼ぶ
    ///
    /// 前の選択とアップロード状態はこの時点で消える。返した世代を
    /// `finish_selection` / `fail_selection` に渡す。
    pub fn begin_selection(&mut self) -> u64 {
        self.select_file(None);
        self.selection
    }

    /// 読み込み完了。後から別のファイルが選ばれていれば何もしない
    pub fn finish_selection(&mut self, selection: u64, file: SelectedFile) -> bool {
        if selection != self.selection {
            return false;
        }
        self.selected_file = Some(file);
        true
    }

    /// 読み込み失敗。古い選択の失敗は無視する
    pub fn fail_selection(&mut self, selection: u64, message: impl Into<String>) -> bool {
        if selection != self.selection {
            return false;
        }
        self.fail(None, message);
        true
    }

    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some()
    }

    /// アップロード結果を反映（200のみ成功）
    pub fn finish_upload(&mut self, status: u16) {
        self.last_error = None;
        if status == 200 {
            self.uploaded = true;
        }
    }

    pub fn is_loading(&self, algorithm: Algorithm) -> bool {
        match algorithm {
            Algorithm::Fast => self.fast_loading,
            Algorithm::Harris => self.harris_loading,
            Algorithm::ShiTomashi => self.shi_tomashi_loading,
        }
    }

    fn set_loading(&mut self, algorithm: Algorithm, loading: bool) {
        let flag = match algorithm {
            Algorithm::Fast => &mut self.fast_loading,
            Algorithm::Harris => &mut self.harris_loading,
            Algorithm::ShiTomashi => &mut self.shi_tomashi_loading,
        };
        *flag = loading;
    }

    /// ボタンが押せるか
    pub fn can_run(&self, algorithm: Algorithm) -> bool {
        self.uploaded && !self.is_loading(algorithm)
    }

    pub fn begin_detection(&mut self, algorithm: Algorithm) {
        self.set_loading(algorithm, true);
        self.output_url = None;
        self.last_error = None;
    }

    /// 結果を反映する。URLがなくても実行中フラグは必ず下ろす
    pub fn finish_detection(&mut self, algorithm: Algorithm, url: Option<String>) {
        if let Some(url) = url {
            self.output_url = Some(url);
        }
        self.set_loading(algorithm, false);
    }

    /// 通信失敗を記録する
    pub fn fail(&mut self, algorithm: Option<Algorithm>, message: impl Into<String>) {
        if let Some(algorithm) = algorithm {
            self.set_loading(algorithm, false);
        }
        self.last_error = Some(message.into());
    }

    pub fn button_label(&self, algorithm: Algorithm) -> &'static str {
        if self.is_loading(algorithm) {
            PROCESSING_LABEL
        } else {
            algorithm.label()
        }
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.uploaded.then_some(UPLOADED_MESSAGE)
    }
}
