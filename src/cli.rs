use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rule-check")]
#[command(about = "PDFルールチェッカー: 文書をルールに照らして判定する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFとルールを解析サービスへ送信して判定を表示
    Check {
        /// 対象PDFファイル（推奨2〜10ページ）
        #[arg(required = true)]
        pdf: PathBuf,

        /// ルール1
        #[arg(long, default_value = "")]
        rule1: String,

        /// ルール2
        #[arg(long, default_value = "")]
        rule2: String,

        /// ルール3
        #[arg(long, default_value = "")]
        rule3: String,

        /// ルールを対話的に入力
        #[arg(short, long)]
        interactive: bool,

        /// 結果JSONをクリップボードにコピー
        #[arg(short, long)]
        copy: bool,

        /// 表ではなく受信したJSONをそのまま出力
        #[arg(long)]
        json: bool,

        /// 解析サービスのベースURL（設定ファイル・環境変数より優先）
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 解析サービスのベースURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定（0で解除）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
