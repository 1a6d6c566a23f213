//! コーナー検出アルゴリズムの一覧
//!
//! アルゴリズム本体はバックエンド側で実行される。
//! クライアントはエンドポイントと表示名だけを知っていればよい。

use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Fast,
    Harris,
    ShiTomashi,
}

impl Algorithm {
    /// 画面上のボタン順
    pub const ALL: [Algorithm; 3] = [Algorithm::Fast, Algorithm::Harris, Algorithm::ShiTomashi];

    /// バックエンドのエンドポイント（パラメータなしのGET）
    pub fn endpoint(&self) -> &'static str {
        match self {
            Algorithm::Fast => "/fast-jpeg",
            Algorithm::Harris => "/harris",
            Algorithm::ShiTomashi => "/shi-tomashi",
        }
    }

    /// ボタン表示名
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fast => "FAST Corner Detection",
            Algorithm::Harris => "Harris Corner Detection",
            Algorithm::ShiTomashi => "Shi Tomashi Corner Detection",
        }
    }

    /// 成功時のログ行
    pub fn success_message(&self) -> &'static str {
        match self {
            Algorithm::Fast => "FAST corner detection successful",
            Algorithm::Harris => "Harris corner detection successful",
            Algorithm::ShiTomashi => "Shi Tomashi corner detection successful",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fast => "fast",
            Algorithm::Harris => "harris",
            Algorithm::ShiTomashi => "shi-tomashi",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" | "fast-jpeg" => Ok(Algorithm::Fast),
            "harris" => Ok(Algorithm::Harris),
            "shi-tomashi" | "shi_tomashi" | "shitomashi" => Ok(Algorithm::ShiTomashi),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
