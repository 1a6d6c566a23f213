//! 画面コントローラ
//!
//! ユーザー操作（ファイル選択・アップロード・アルゴリズム実行）を
//! APIクライアント呼び出しと状態更新に結びつける。
//!
//! シングルスレッド前提。状態は `RefCell` に持ち、`.await` をまたいで借用しない。
//! 同じ `Page` でアルゴリズムを並行実行した場合、後に返ってきた結果が残る。

use crate::api::BackendClient;
use crate::error::{CornerDetectError, Result};
use corner_detect_common::{Algorithm, SelectedFile, ViewState};
use std::cell::RefCell;

pub struct Page {
    client: BackendClient,
    state: RefCell<ViewState>,
}

impl Page {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            state: RefCell::new(ViewState::new()),
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// 描画用のスナップショット
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn select_file(&self, file: Option<SelectedFile>) {
        if let Some(file) = &file {
            log::debug!("selected {:?}", file);
        }
        self.state.borrow_mut().select_file(file);
    }

    /// 選択中のファイルをアップロードする
    ///
    /// 200で `uploaded` になる。それ以外のステータスでは何も変わらない。
    pub async fn upload(&self) -> Result<bool> {
        let file = self.state.borrow().selected_file.clone().ok_or_else(|| {
            CornerDetectError::ActionDisabled("ファイルが選択されていません".into())
        })?;

        let response = match self.client.upload_image(&file).await {
            Ok(response) => response,
            Err(e) => {
                self.state.borrow_mut().fail(None, e.to_string());
                return Err(e);
            }
        };

        let status = response.status().as_u16();
        self.state.borrow_mut().finish_upload(status);

        if status == 200 {
            log::info!("Image uploaded successfully");
        } else {
            log::warn!("upload of {} returned HTTP {}", file.name, status);
        }
        Ok(status == 200)
    }

    /// アルゴリズムを実行し、結果URLを出力に反映する
    ///
    /// 実行中フラグは成功・失敗・通信エラーのいずれでも下ろす。
    pub async fn run_detection(&self, algorithm: Algorithm) -> Result<Option<String>> {
        {
            let mut state = self.state.borrow_mut();
            if !state.uploaded {
                return Err(CornerDetectError::ActionDisabled(
                    "画像がアップロードされていません".into(),
                ));
            }
            if state.is_loading(algorithm) {
                return Err(CornerDetectError::ActionDisabled(format!(
                    "{} は実行中です",
                    algorithm
                )));
            }
            state.begin_detection(algorithm);
        }

        match self.client.detect(algorithm).await {
            Ok(url) => {
                self.state
                    .borrow_mut()
                    .finish_detection(algorithm, url.clone());
                Ok(url)
            }
            Err(e) => {
                self.state
                    .borrow_mut()
                    .fail(Some(algorithm), e.to_string());
                Err(e)
            }
        }
    }
}
