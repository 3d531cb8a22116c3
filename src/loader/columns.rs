//! 欄位角色辨識
//!
//! 賽程表的標題列使用中文欄名；為容錯同時接受英文別名。
//! 未辨識的標題原樣保留為一般欄位，照原順序顯示。

use std::fmt;

/// 已辨識的欄位角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    MatchId,
    StartTime,
    Location,
    Group,
    Competitor1,
    Competitor2,
    Score1,
    Score2,
    Referee,
    Notes,
}

/// 合成備註欄時使用的標題
pub const NOTES_HEADER: &str = "備註";

/// 標題別名表（比對前先去除空白並轉小寫）
const HEADER_ALIASES: &[(&str, ColumnRole)] = &[
    ("場次", ColumnRole::MatchId),
    ("編號", ColumnRole::MatchId),
    ("match_id", ColumnRole::MatchId),
    ("開始時間", ColumnRole::StartTime),
    ("時間", ColumnRole::StartTime),
    ("start_time", ColumnRole::StartTime),
    ("場地", ColumnRole::Location),
    ("location", ColumnRole::Location),
    ("組別", ColumnRole::Group),
    ("group", ColumnRole::Group),
    ("選手1", ColumnRole::Competitor1),
    ("competitor1", ColumnRole::Competitor1),
    ("選手2", ColumnRole::Competitor2),
    ("competitor2", ColumnRole::Competitor2),
    ("得分1", ColumnRole::Score1),
    ("score1", ColumnRole::Score1),
    ("得分2", ColumnRole::Score2),
    ("score2", ColumnRole::Score2),
    ("裁判", ColumnRole::Referee),
    ("referee", ColumnRole::Referee),
    ("備註", ColumnRole::Notes),
    ("備注", ColumnRole::Notes),
    ("notes", ColumnRole::Notes),
];

/// 標題文字對應角色；無法辨識時回傳None。
pub fn role_for_header(header: &str) -> Option<ColumnRole> {
    let normalized = header.trim().to_lowercase();
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, role)| *role)
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnRole::MatchId => "場次",
            ColumnRole::StartTime => "開始時間",
            ColumnRole::Location => "場地",
            ColumnRole::Group => "組別",
            ColumnRole::Competitor1 => "選手1",
            ColumnRole::Competitor2 => "選手2",
            ColumnRole::Score1 => "得分1",
            ColumnRole::Score2 => "得分2",
            ColumnRole::Referee => "裁判",
            ColumnRole::Notes => "備註",
        };
        write!(f, "{}", name)
    }
}
