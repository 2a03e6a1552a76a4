// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use verbump_domain::defaults::{DEFAULT_MIRROR_FILE, DEFAULT_VERSION_FILE};

use super::value_enum::CliLogLevel;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "verbump",
    version = crate::VERSION,
    about = "バージョンファイルのパッチ番号を自動インクリメントするツール"
)]
pub struct Args {
    /// 指定したバージョンをそのまま保存（インクリメントしない）
    #[arg(short = 'v', long = "set-version", value_name = "VERSION")]
    pub set_version: Option<String>,

    /// バージョンファイル（JSON）
    #[arg(short, long, default_value = DEFAULT_VERSION_FILE, value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// バージョン文字列を書き出すテキストファイル
    #[arg(short, long, default_value = DEFAULT_MIRROR_FILE, value_hint = ValueHint::FilePath)]
    pub mirror: PathBuf,

    /// テキストファイルへの書き出しを行わない
    #[arg(long, conflicts_with = "mirror")]
    pub no_mirror: bool,

    /// MAJOR.MINOR.PATCH 以外の形式をエラーにする
    #[arg(long)]
    pub strict: bool,

    /// ログレベル（RUST_LOG で上書き可）
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: CliLogLevel,

    /// 結果のバージョンを標準出力に表示しない
    #[arg(short, long)]
    pub quiet: bool,
}
