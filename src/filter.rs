//! 篩選引擎
//!
//! 所有條件都是不分大小寫的子字串比對，彼此以AND結合。
//! 關鍵字同時比對選手1、選手2、裁判三欄，並附帶欄級醒目標示。
//! 底表不被改動，輸出是保留列的列序清單。

use serde::Deserialize;

use crate::loader::columns::ColumnRole;
use crate::style::StyleDirective;
use crate::table::Table;

/// 一次查詢的篩選條件；空字串代表未填。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub time: String,
    pub location: String,
    pub group: String,
    pub keyword: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.time.trim().is_empty()
            && self.location.trim().is_empty()
            && self.group.trim().is_empty()
            && self.keyword.trim().is_empty()
    }
}

/// 關鍵字比對的三個欄位
const KEYWORD_ROLES: [ColumnRole; 3] = [
    ColumnRole::Competitor1,
    ColumnRole::Competitor2,
    ColumnRole::Referee,
];

/// 篩選結果：保留的列（底表列序）與關鍵字標示
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub row_indexes: Vec<usize>,
    pub keyword_styles: Vec<StyleDirective>,
}

/// 套用篩選條件。
/// 關鍵字標示是欄級述語，只要關鍵字非空就逐欄發出，與存活列數無關。
pub fn apply_filters(table: &Table, criteria: &FilterCriteria) -> FilterOutcome {
    let mut row_indexes: Vec<usize> = (0..table.len()).collect();

    for (criterion, role) in [
        (&criteria.time, ColumnRole::StartTime),
        (&criteria.location, ColumnRole::Location),
        (&criteria.group, ColumnRole::Group),
    ] {
        let criterion = criterion.trim();
        if criterion.is_empty() {
            continue;
        }
        row_indexes.retain(|&index| cell_matches(table, index, role, criterion));
    }

    let keyword = criteria.keyword.trim();
    let mut keyword_styles = Vec::new();
    if !keyword.is_empty() {
        row_indexes.retain(|&index| {
            KEYWORD_ROLES
                .iter()
                .any(|&role| cell_matches(table, index, role, keyword))
        });
        for role in KEYWORD_ROLES {
            if let Some(column) = table.column_name(role) {
                keyword_styles.push(StyleDirective::keyword(column, keyword));
            }
        }
    }

    FilterOutcome { row_indexes, keyword_styles }
}

/// 儲存格是否含條件子字串；空白或缺欄一律不算命中。
fn cell_matches(table: &Table, row: usize, role: ColumnRole, criterion: &str) -> bool {
    match table.cell(row, role) {
        Some(cell) if !cell.is_empty() => contains_ci(&cell.display(), criterion),
        _ => false,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Row};

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample_table() -> Table {
        Table::new(
            vec![
                "開始時間".into(),
                "場地".into(),
                "組別".into(),
                "選手1".into(),
                "選手2".into(),
                "裁判".into(),
            ],
            vec![
                Row::new(vec![
                    text("09:00"),
                    text("A場"),
                    text("男單"),
                    text("Alice"),
                    text("Bob"),
                    text("Sam"),
                ]),
                Row::new(vec![
                    text("10:30"),
                    text("B場"),
                    text("女單"),
                    text("Carol"),
                    text("Dana"),
                    text("Tom"),
                ]),
                Row::new(vec![
                    text("09:30"),
                    text("A場"),
                    text("男雙"),
                    text("Eric"),
                    text("Frank"),
                    text("sam")
                ]),
            ],
        )
    }

    fn criteria(time: &str, location: &str, group: &str, keyword: &str) -> FilterCriteria {
        FilterCriteria {
            time: time.to_string(),
            location: location.to_string(),
            group: group.to_string(),
            keyword: keyword.to_string(),
        }
    }

    #[test]
    fn test_empty_criteria_keeps_every_row() {
        let table = sample_table();
        let outcome = apply_filters(&table, &FilterCriteria::default());

        assert_eq!(outcome.row_indexes, vec![0, 1, 2]);
        assert!(outcome.keyword_styles.is_empty());
    }

    #[test]
    fn test_time_filter_is_substring_match() {
        let table = sample_table();
        let outcome = apply_filters(&table, &criteria("09", "", "", ""));

        assert_eq!(outcome.row_indexes, vec![0, 2]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let table = sample_table();
        let outcome = apply_filters(&table, &criteria("09", "A場", "男單", ""));

        assert_eq!(outcome.row_indexes, vec![0]);
    }

    #[test]
    fn test_keyword_matches_across_three_columns() {
        let table = sample_table();

        // 選手欄命中
        let outcome = apply_filters(&table, &criteria("", "", "", "carol"));
        assert_eq!(outcome.row_indexes, vec![1]);

        // 裁判欄命中，不分大小寫
        let outcome = apply_filters(&table, &criteria("", "", "", "SAM"));
        assert_eq!(outcome.row_indexes, vec![0, 2]);
    }

    #[test]
    fn test_keyword_emits_directive_per_column() {
        let table = sample_table();
        let outcome = apply_filters(&table, &criteria("", "", "", "ali"));

        let columns: Vec<&str> = outcome
            .keyword_styles
            .iter()
            .map(|d| d.column.as_str())
            .collect();
        assert_eq!(columns, vec!["選手1", "選手2", "裁判"]);
    }

    #[test]
    fn test_keyword_directives_emitted_even_without_surviving_rows() {
        let table = sample_table();
        let outcome = apply_filters(&table, &criteria("", "", "", "不存在的人"));

        assert!(outcome.row_indexes.is_empty());
        assert_eq!(outcome.keyword_styles.len(), 3);
    }

    #[test]
    fn test_missing_column_matches_nothing() {
        let table = Table::new(
            vec!["選手1".into()],
            vec![Row::new(vec![text("Alice")])],
        );
        let outcome = apply_filters(&table, &criteria("09", "", "", ""));

        assert!(outcome.row_indexes.is_empty());
    }

    #[test]
    fn test_empty_cell_never_matches() {
        let table = Table::new(
            vec!["場地".into()],
            vec![
                Row::new(vec![CellValue::Empty]),
                Row::new(vec![text("A場")]),
            ],
        );
        let outcome = apply_filters(&table, &criteria("", "場", "", ""));

        assert_eq!(outcome.row_indexes, vec![1]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let table = sample_table();
        let c = criteria("09", "", "", "sam");

        let once = apply_filters(&table, &c);
        let twice = apply_filters(&table, &c);

        assert_eq!(once.row_indexes, twice.row_indexes);
        assert_eq!(once.keyword_styles, twice.keyword_styles);
    }

    #[test]
    fn test_is_empty_ignores_whitespace() {
        assert!(FilterCriteria::default().is_empty());
        assert!(criteria("  ", "", " ", "").is_empty());
        assert!(!criteria("", "", "", "sam").is_empty());
    }
}
