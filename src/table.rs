//! 賽程資料表核心型別
//!
//! 啟動時從Excel載入一次，之後整個行程生命週期內唯讀共用。
//! 篩選與標示都以「底表列序」或「場次鍵」指涉列，不複製、不改動底表。

use std::collections::HashMap;

use crate::loader::columns::{role_for_header, ColumnRole, NOTES_HEADER};

/// 單一儲存格的值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// 顯示用文字。整數值不帶小數點。
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
        }
    }

    /// 解讀為分數。非數值文字與空白一律視為未填，不報錯。
    pub fn as_score(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

/// 一場比賽的記錄，儲存格順序與欄位順序一致
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

/// 完整賽程表
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    roles: HashMap<ColumnRole, usize>,
}

impl Table {
    /// 由標題列與資料列建表，並依標題別名辨識欄位角色。
    /// 同一角色對應多個欄位時，以先出現者為準。
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut roles = HashMap::new();
        for (index, name) in columns.iter().enumerate() {
            if let Some(role) = role_for_header(name) {
                roles.entry(role).or_insert(index);
            }
        }
        Self { columns, rows, roles }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// 比賽數
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 角色對應的欄位序
    pub fn role_index(&self, role: ColumnRole) -> Option<usize> {
        self.roles.get(&role).copied()
    }

    /// 角色對應的欄位標題（原檔寫法）
    pub fn column_name(&self, role: ColumnRole) -> Option<&str> {
        self.role_index(role).map(|index| self.columns[index].as_str())
    }

    /// 取某列在某角色欄位的儲存格；列或欄不存在時回傳None。
    pub fn cell(&self, row: usize, role: ColumnRole) -> Option<&CellValue> {
        let index = self.role_index(role)?;
        self.rows.get(row)?.cells.get(index)
    }

    /// 列識別鍵：有場次欄且該格非空白時用其內容，否則用列序。
    pub fn row_key(&self, row: usize) -> String {
        if let Some(cell) = self.cell(row, ColumnRole::MatchId) {
            if !cell.is_empty() {
                return cell.display();
            }
        }
        row.to_string()
    }

    /// 已辨識的角色與對應欄位標題，依欄位順序排列
    pub fn recognized_roles(&self) -> Vec<(ColumnRole, &str)> {
        let mut pairs: Vec<(ColumnRole, usize)> =
            self.roles.iter().map(|(role, &index)| (*role, index)).collect();
        pairs.sort_by_key(|&(_, index)| index);
        pairs
            .into_iter()
            .map(|(role, index)| (role, self.columns[index].as_str()))
            .collect()
    }

    /// 確保備註欄存在；缺少時補上一個空白欄，附加在最後。
    pub fn ensure_notes_column(&mut self) {
        if self.roles.contains_key(&ColumnRole::Notes) {
            return;
        }
        let index = self.columns.len();
        self.columns.push(NOTES_HEADER.to_string());
        for row in &mut self.rows {
            row.cells.resize(index + 1, CellValue::Empty);
        }
        self.roles.insert(ColumnRole::Notes, index);
    }
}
