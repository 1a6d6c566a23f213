use clap::{Parser, Subcommand};
use corner_detect_common::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corner-detect")]
#[command(about = "コーナー検出バックエンド用クライアント (FAST / Harris / Shi-Tomashi)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をアップロード
    Upload {
        /// JPEG画像のパス
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 直前にアップロードした画像でアルゴリズムを実行
    Detect {
        /// fast / harris / shi-tomashi
        #[arg(required = true)]
        algorithm: Algorithm,

        /// 出力画像の保存先フォルダ
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// アップロードから検出まで一括実行
    Run {
        /// JPEG画像のパス
        #[arg(required = true)]
        file: PathBuf,

        /// 実行するアルゴリズム（複数指定可、省略時は全て）
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,

        /// 出力画像の保存先フォルダ
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// バックエンドの死活確認
    Ping,

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 実行順のアルゴリズム一覧（未指定なら全て）
    pub fn resolve_algorithms(requested: &[Algorithm]) -> Vec<Algorithm> {
        if requested.is_empty() {
            return Algorithm::ALL.to_vec();
        }

        let mut algorithms = Vec::new();
        for alg in requested {
            if !algorithms.contains(alg) {
                algorithms.push(*alg);
            }
        }
        algorithms
    }
}
