use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchQueryError {
    #[error("找不到檔案: {0}")]
    FileNotFound(String),

    #[error("找不到工作表: {0}")]
    SheetNotFound(String),

    #[error("賽程表沒有標題列: {0}")]
    MissingHeader(String),

    #[error("Excel讀取錯誤: {0}")]
    Excel(#[from] calamine::Error),

    #[error("JSON解析錯誤: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchQueryError>;
