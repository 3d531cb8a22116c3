use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "match-query")]
#[command(about = "盃賽比賽查詢系統：載入賽程Excel、提供網頁篩選與醒目標示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 啟動查詢網頁伺服器
    Serve {
        /// 賽程Excel檔路徑
        #[arg(required = true)]
        file: PathBuf,

        /// 監聽埠號
        #[arg(short, long, default_value = "10000")]
        port: u16,

        /// 表格每頁列數
        #[arg(long, default_value = "10")]
        page_size: usize,

        /// 工作表名稱（預設讀第一張）
        #[arg(short, long)]
        sheet: Option<String>,

        /// 頁面標題
        #[arg(short, long, default_value = "比賽查詢系統")]
        title: String,
    },

    /// 檢查賽程檔並顯示摘要
    Check {
        /// 賽程Excel檔路徑
        #[arg(required = true)]
        file: PathBuf,

        /// 工作表名稱（預設讀第一張）
        #[arg(short, long)]
        sheet: Option<String>,
    },
}
