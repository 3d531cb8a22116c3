//! 內嵌查詢頁面
//!
//! 頁面只負責事件接線與渲染：把輸入框內容送到 /api/query，
//! 再依回傳的標示清單逐格套色（每格取第一條符合的指令）。

use crate::config::Config;

/// 以設定值填入頁面模板
pub fn render(config: &Config) -> String {
    PAGE_HTML
        .replace("__TITLE__", &config.title)
        .replace("__PAGE_SIZE__", &config.page_size.to_string())
}

const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TITLE__</title>
    <style>
        :root {
            --bg: #f5f6f8;
            --card: #ffffff;
            --border: #d9dde3;
            --accent: #2b6cb0;
            --text: #1a202c;
            --muted: #718096;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: "Noto Sans TC", "PingFang TC", "Microsoft JhengHei", sans-serif;
            background: var(--bg);
            color: var(--text);
            min-height: 100vh;
            padding: 24px;
        }
        .container { max-width: 1100px; margin: 0 auto; }
        h1 { font-size: 1.4rem; margin-bottom: 16px; color: var(--accent); }
        .filters {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 10px;
            padding: 16px;
            margin-bottom: 16px;
            display: flex;
            flex-wrap: wrap;
            gap: 12px;
            align-items: flex-end;
        }
        .field { display: flex; flex-direction: column; gap: 4px; }
        label { font-size: 0.8rem; color: var(--muted); }
        input {
            border: 1px solid var(--border);
            border-radius: 6px;
            padding: 8px 10px;
            font-size: 0.9rem;
            width: 170px;
        }
        input:focus { outline: none; border-color: var(--accent); }
        button {
            border: none;
            border-radius: 6px;
            padding: 9px 22px;
            font-size: 0.9rem;
            cursor: pointer;
            color: white;
            background: var(--accent);
        }
        button.secondary { background: var(--muted); }
        button:hover { opacity: 0.9; }
        .summary { font-size: 0.85rem; color: var(--muted); margin-bottom: 8px; }
        table {
            width: 100%;
            border-collapse: collapse;
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 10px;
            overflow: hidden;
        }
        th, td {
            border-bottom: 1px solid var(--border);
            padding: 8px 10px;
            font-size: 0.88rem;
            text-align: left;
            white-space: nowrap;
        }
        th { background: #edf2f7; color: var(--muted); font-weight: 600; }
        .pager {
            display: flex;
            gap: 12px;
            align-items: center;
            justify-content: flex-end;
            margin-top: 10px;
        }
        .pager span { font-size: 0.85rem; color: var(--muted); }
        .empty { padding: 24px; text-align: center; color: var(--muted); }
    </style>
</head>
<body>
    <div class="container">
        <h1>__TITLE__</h1>

        <div class="filters">
            <div class="field">
                <label for="filter-time">開始時間</label>
                <input id="filter-time" type="text" placeholder="輸入開始時間">
            </div>
            <div class="field">
                <label for="filter-location">場地</label>
                <input id="filter-location" type="text" placeholder="輸入場地">
            </div>
            <div class="field">
                <label for="filter-group">組別</label>
                <input id="filter-group" type="text" placeholder="輸入組別">
            </div>
            <div class="field">
                <label for="filter-keyword">關鍵字</label>
                <input id="filter-keyword" type="text" placeholder="輸入關鍵字 (選手或裁判)">
            </div>
            <button id="search-button" onclick="search()">搜尋</button>
            <button id="reset-button" class="secondary" onclick="reset()">重置</button>
        </div>

        <div id="summary" class="summary"></div>
        <div id="table-area"></div>

        <div class="pager">
            <button id="prev-button" class="secondary" onclick="turnPage(-1)">上一頁</button>
            <span id="page-label"></span>
            <button id="next-button" class="secondary" onclick="turnPage(1)">下一頁</button>
        </div>
    </div>

    <script>
        const PAGE_SIZE = __PAGE_SIZE__;
        let state = { columns: [], rows: [], styles: [], page: 0 };

        function inputValue(id) {
            return document.getElementById(id).value || '';
        }

        async function runQuery(action) {
            const body = {
                action: action,
                time: inputValue('filter-time'),
                location: inputValue('filter-location'),
                group: inputValue('filter-group'),
                keyword: inputValue('filter-keyword')
            };
            const response = await fetch('/api/query', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(body)
            });
            if (!response.ok) {
                document.getElementById('summary').textContent = '查詢失敗，請稍後再試';
                return;
            }
            const data = await response.json();
            state = { columns: data.columns, rows: data.rows, styles: data.styles, page: 0 };
            render();
        }

        function search() { runQuery('search'); }

        function reset() {
            for (const id of ['filter-time', 'filter-location', 'filter-group', 'filter-keyword']) {
                document.getElementById(id).value = '';
            }
            runQuery('reset');
        }

        // 逐格取第一條符合的指令，先到先贏
        function styleFor(row, columnIndex, text) {
            for (const d of state.styles) {
                if (d.column !== state.columns[columnIndex]) continue;
                if (d.selector.type === 'row') {
                    if (d.selector.key === row.key) return d;
                } else if (d.selector.type === 'contains') {
                    if (text.toLowerCase().includes(d.selector.value.toLowerCase())) return d;
                }
            }
            return null;
        }

        function escapeHtml(str) {
            return str.replace(/&/g, '&amp;')
                      .replace(/</g, '&lt;')
                      .replace(/>/g, '&gt;')
                      .replace(/"/g, '&quot;');
        }

        function render() {
            const area = document.getElementById('table-area');
            const pageCount = Math.max(1, Math.ceil(state.rows.length / PAGE_SIZE));
            if (state.page >= pageCount) state.page = pageCount - 1;

            document.getElementById('summary').textContent = '共 ' + state.rows.length + ' 場比賽';
            document.getElementById('page-label').textContent = '第 ' + (state.page + 1) + ' / ' + pageCount + ' 頁';
            document.getElementById('prev-button').disabled = state.page === 0;
            document.getElementById('next-button').disabled = state.page >= pageCount - 1;

            if (state.rows.length === 0) {
                area.innerHTML = '<div class="empty">沒有符合條件的比賽</div>';
                return;
            }

            const start = state.page * PAGE_SIZE;
            const visible = state.rows.slice(start, start + PAGE_SIZE);

            let html = '<table><thead><tr>';
            for (const column of state.columns) {
                html += '<th>' + escapeHtml(column) + '</th>';
            }
            html += '</tr></thead><tbody>';
            for (const row of visible) {
                html += '<tr>';
                row.cells.forEach((text, columnIndex) => {
                    const directive = styleFor(row, columnIndex, text);
                    const style = directive
                        ? ' style="background-color:' + directive.backgroundColor +
                          ';color:' + directive.textColor + '"'
                        : '';
                    html += '<td' + style + '>' + escapeHtml(text) + '</td>';
                });
                html += '</tr>';
            }
            html += '</tbody></table>';
            area.innerHTML = html;
        }

        function turnPage(delta) {
            state.page += delta;
            render();
        }

        window.addEventListener('DOMContentLoaded', () => runQuery('reset'));
    </script>
</body>
</html>
"##;
