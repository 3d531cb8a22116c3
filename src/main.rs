use clap::Parser;
use match_query_rust::{cli, config, error, loader, server, winner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { file, port, page_size, sheet, title } => {
            println!("🏆 match-query - 比賽查詢系統\n");

            // 1. 載入賽程
            println!("[1/2] 載入賽程資料中...");
            let table = loader::load_table(&file, sheet.as_deref())?;
            println!("✔ 載入 {} 場比賽、{} 個欄位\n", table.len(), table.columns().len());

            // 2. 啟動伺服器
            println!("[2/2] 啟動伺服器中...");
            println!("✔ http://localhost:{}\n", port);

            tracing_subscriber::fmt().with_target(false).init();

            let config = Config { port, page_size, title };
            server::serve(server::AppState::new(table, config)).await?;
        }

        Commands::Check { file, sheet } => {
            println!("🔍 match-query - 賽程檔檢查\n");

            let table = loader::load_table(&file, sheet.as_deref())?;
            let decided = winner::winner_directives(&table).len();

            println!("檔案: {}", file.display());
            println!("  比賽數: {}", table.len());
            println!("  欄位數: {}", table.columns().len());
            println!("  欄位: {}", table.columns().join("、"));

            let recognized: Vec<String> = table
                .recognized_roles()
                .iter()
                .map(|(role, column)| {
                    if role.to_string() == *column {
                        role.to_string()
                    } else {
                        format!("{}（{}）", role, column)
                    }
                })
                .collect();
            println!("  已辨識欄位: {}", recognized.join("、"));
            println!("  已有結果的比賽: {}", decided);

            println!("\n✅ 檢查完成");
        }
    }

    Ok(())
}
