//! 查詢層
//!
//! 每次使用者互動對應一次純函式呼叫：
//! (底表, 勝方標示, 條件, 動作) → 查詢結果。
//! 不含任何UI相關型別，可在沒有伺服器的情況下測試。

use serde::{Deserialize, Serialize};

use crate::filter::{apply_filters, FilterCriteria};
use crate::style::{compose, StyleDirective};
use crate::table::Table;

/// 使用者動作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryAction {
    Search,
    /// 初始載入與重置按鈕共用
    #[default]
    Reset,
}

/// 單一列的呈現資料
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    /// 列識別鍵（場次或列序）
    pub key: String,
    /// 依欄位順序的顯示文字
    pub cells: Vec<String>,
}

/// 一次查詢的完整輸出
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome {
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub styles: Vec<StyleDirective>,
    /// 篩選後的比賽數
    pub total: usize,
}

/// 執行一次查詢。重置（含初始載入）回傳完整賽程表與勝方標示；
/// 搜尋則套用目前條件，再把關鍵字標示併進勝方標示。
pub fn run_query(
    table: &Table,
    winner_styles: &[StyleDirective],
    criteria: &FilterCriteria,
    action: QueryAction,
) -> QueryOutcome {
    let (row_indexes, keyword_styles) = match action {
        QueryAction::Reset => ((0..table.len()).collect::<Vec<_>>(), Vec::new()),
        QueryAction::Search => {
            let outcome = apply_filters(table, criteria);
            (outcome.row_indexes, outcome.keyword_styles)
        }
    };

    let rows: Vec<RowView> = row_indexes
        .iter()
        .map(|&index| RowView {
            key: table.row_key(index),
            cells: table.rows()[index]
                .cells
                .iter()
                .map(|cell| cell.display())
                .collect(),
        })
        .collect();

    let total = rows.len();
    QueryOutcome {
        columns: table.columns().to_vec(),
        rows,
        styles: compose(winner_styles, keyword_styles),
        total,
    }
}
