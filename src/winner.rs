//! 勝方標示
//!
//! 逐列比較兩邊得分，分數齊全且不同時，標示得分較高選手的儲存格。
//! 純函式：同一張表算幾次結果都一樣，順序照底表列序。

use crate::loader::columns::ColumnRole;
use crate::style::StyleDirective;
use crate::table::Table;

/// 計算整張表的勝方標示，每列至多一條。
/// 分數缺漏、無法解讀或平手的列不標示。
pub fn winner_directives(table: &Table) -> Vec<StyleDirective> {
    let mut directives = Vec::new();

    for index in 0..table.len() {
        let score1 = table.cell(index, ColumnRole::Score1).and_then(|c| c.as_score());
        let score2 = table.cell(index, ColumnRole::Score2).and_then(|c| c.as_score());

        let (s1, s2) = match (score1, score2) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        if s1 == s2 {
            continue;
        }

        let role = if s1 > s2 {
            ColumnRole::Competitor1
        } else {
            ColumnRole::Competitor2
        };
        let column = match table.column_name(role) {
            Some(name) => name.to_string(),
            None => continue,
        };

        directives.push(StyleDirective::winner(column, table.row_key(index)));
    }

    directives
}
