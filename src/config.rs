//! 執行設定

/// 伺服器執行設定，全部由命令列參數決定
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// 表格每頁列數
    pub page_size: usize,
    /// 頁面標題
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 10000,
            page_size: 10,
            title: "比賽查詢系統".to_string(),
        }
    }
}
