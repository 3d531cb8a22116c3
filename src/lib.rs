//! 比賽查詢系統
//!
//! 載入賽程Excel後提供網頁查詢：條件篩選、關鍵字醒目標示、勝方標示。
//!
//! ## 資料流
//! 1. 啟動時載入賽程表（唯讀，行程生命週期共用）
//! 2. 同時算好整張表的勝方標示
//! 3. 每次查詢：篩選 → 合併標示 → 回傳列與標示清單

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod query;
pub mod server;
pub mod style;
pub mod table;
pub mod winner;
