//! 儲存格醒目標示指令
//!
//! 每條指令鎖定「某欄的特定一列」或「某欄中內容含關鍵字的所有列」。
//! 優先序是明確欄位：數字越小越先套用；渲染端逐格取第一條符合的指令，
//! 所以勝方標示永遠壓過關鍵字標示。

use serde::Serialize;

/// 勝方底色（淺綠）
pub const WINNER_BACKGROUND: &str = "#C8E6C9";
/// 勝方文字色（深綠）
pub const WINNER_TEXT: &str = "#1B5E20";
/// 關鍵字命中底色（黃）
pub const KEYWORD_BACKGROUND: &str = "#FFDD57";
/// 關鍵字命中文字色
pub const KEYWORD_TEXT: &str = "#000000";

/// 勝方標示的優先序
pub const PRIORITY_WINNER: u8 = 0;
/// 關鍵字標示的優先序
pub const PRIORITY_KEYWORD: u8 = 1;

/// 指令套用的列範圍
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RowSelector {
    /// 指定一列，以列識別鍵比對
    Row { key: String },
    /// 欄內容含關鍵字的所有列（不分大小寫）
    Contains { value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDirective {
    /// 目標欄位標題（原檔寫法）
    pub column: String,
    pub selector: RowSelector,
    pub background_color: String,
    pub text_color: String,
    pub priority: u8,
}

impl StyleDirective {
    /// 勝方標示
    pub fn winner(column: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            selector: RowSelector::Row { key: key.into() },
            background_color: WINNER_BACKGROUND.to_string(),
            text_color: WINNER_TEXT.to_string(),
            priority: PRIORITY_WINNER,
        }
    }

    /// 關鍵字命中標示
    pub fn keyword(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            selector: RowSelector::Contains { value: value.into() },
            background_color: KEYWORD_BACKGROUND.to_string(),
            text_color: KEYWORD_TEXT.to_string(),
            priority: PRIORITY_KEYWORD,
        }
    }

    /// 此指令是否套用到指定儲存格
    pub fn applies_to(&self, column: &str, row_key: &str, cell_text: &str) -> bool {
        if self.column != column {
            return false;
        }
        match &self.selector {
            RowSelector::Row { key } => key == row_key,
            RowSelector::Contains { value } => {
                cell_text.to_lowercase().contains(&value.to_lowercase())
            }
        }
    }
}

/// 合併勝方與關鍵字標示。
/// 穩定排序保證勝方排在前面，同類指令維持原相對順序。
pub fn compose(winner: &[StyleDirective], keyword: Vec<StyleDirective>) -> Vec<StyleDirective> {
    let mut merged = winner.to_vec();
    merged.extend(keyword);
    merged.sort_by_key(|directive| directive.priority);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_puts_winner_first() {
        let winner = vec![StyleDirective::winner("選手1", "1")];
        let keyword = vec![StyleDirective::keyword("選手1", "ali")];

        let merged = compose(&winner, keyword);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].priority, PRIORITY_WINNER);
        assert_eq!(merged[1].priority, PRIORITY_KEYWORD);
    }

    #[test]
    fn test_compose_is_stable_within_class() {
        let winner = vec![
            StyleDirective::winner("選手1", "1"),
            StyleDirective::winner("選手2", "2"),
        ];
        let keyword = vec![
            StyleDirective::keyword("選手1", "x"),
            StyleDirective::keyword("裁判", "x"),
        ];

        let merged = compose(&winner, keyword);

        assert_eq!(merged[0].selector, RowSelector::Row { key: "1".to_string() });
        assert_eq!(merged[1].selector, RowSelector::Row { key: "2".to_string() });
        assert_eq!(merged[2].column, "選手1");
        assert_eq!(merged[3].column, "裁判");
    }

    #[test]
    fn test_applies_to_row_selector() {
        let directive = StyleDirective::winner("選手1", "3");
        assert!(directive.applies_to("選手1", "3", "Alice"));
        assert!(!directive.applies_to("選手1", "4", "Alice"));
        assert!(!directive.applies_to("選手2", "3", "Alice"));
    }

    #[test]
    fn test_applies_to_contains_is_case_insensitive() {
        let directive = StyleDirective::keyword("裁判", "SAM");
        assert!(directive.applies_to("裁判", "1", "sam"));
        assert!(directive.applies_to("裁判", "9", "Samuel"));
        assert!(!directive.applies_to("裁判", "1", "Tom"));
    }

    #[test]
    fn test_directive_json_shape() {
        let json = serde_json::to_value(StyleDirective::keyword("選手1", "ali")).unwrap();
        assert_eq!(json["column"], "選手1");
        assert_eq!(json["selector"]["type"], "contains");
        assert_eq!(json["selector"]["value"], "ali");
        assert_eq!(json["backgroundColor"], KEYWORD_BACKGROUND);
        assert_eq!(json["textColor"], KEYWORD_TEXT);

        let json = serde_json::to_value(StyleDirective::winner("選手2", "5")).unwrap();
        assert_eq!(json["selector"]["type"], "row");
        assert_eq!(json["selector"]["key"], "5");
    }
}
