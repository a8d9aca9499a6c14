//! Transaction table rendering
//!
//! Helper functions:
//! - render_table_body: rows only, swapped into #tableBody on every search
//!   (no rows at all when nothing matches; the empty-state text is pure CSS)
//! - render_transactions_panel: search box + full table for the dashboard page

use riserboard_core::TransactionRow;
use riserboard_utils::escape_html;

const COLUMNS: [&str; 7] = ["ID", "Producto", "Marca", "Fecha", "Monto", "Cantidad", "Estado"];

/// One `<tr>` per row, in the given order
pub fn render_table_body(rows: &[TransactionRow]) -> String {
    let mut html = String::new();
    for row in rows {
        html.push_str(&format!(
            r#"<tr class='border-b hover:bg-gray-50'>
    <td class='px-4 py-2' style='font-weight:700; color:#64748b'>{}</td>
    <td class='px-4 py-2' style='font-weight:600'>{}</td>
    <td class='px-4 py-2'><span class='brand-badge'>{}</span></td>
    <td class='px-4 py-2'>{}</td>
    <td class='px-4 py-2' style='font-weight:700'>{}</td>
    <td class='px-4 py-2'>{}</td>
    <td class='px-4 py-2'><span class='status-badge {}'>{}</span></td>
</tr>"#,
            escape_html(&row.id),
            escape_html(&row.product),
            escape_html(&row.brand),
            escape_html(&row.date),
            escape_html(&row.amount),
            escape_html(&row.quantity),
            row.status_class,
            escape_html(&row.status),
        ));
    }
    html
}

/// Search input plus the table; the input re-renders #tableBody on every keystroke
pub fn render_transactions_panel(rows: &[TransactionRow], query: &str) -> String {
    let header: String = COLUMNS
        .iter()
        .map(|c| format!("<th class='px-4 py-2 text-left'>{}</th>", c))
        .collect();

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-6'>
    <div class='flex items-center justify-between mb-4'>
        <h3 class='text-lg font-semibold'>Transacciones</h3>
        <input id='globalSearch' type='search' name='q' value='{}' placeholder='Buscar producto, ID o marca...'
            hx-get='/transactions/list' hx-trigger='input' hx-target='#tableBody' hx-swap='innerHTML'
            class='px-4 py-2 border rounded-lg w-72'>
    </div>
    <div class='overflow-x-auto'>
        <table class='w-full'>
            <thead class='bg-gray-50'><tr>{}</tr></thead>
            <tbody id='tableBody' class='records' data-empty='Sin transacciones'>{}</tbody>
        </table>
    </div>
</div>"#,
        escape_html(query),
        header,
        render_table_body(rows)
    )
}
