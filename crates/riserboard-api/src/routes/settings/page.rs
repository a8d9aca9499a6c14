//! Settings page rendering - Full page endpoints

use crate::AppState;
use riserboard_config::Config;
use riserboard_utils::escape_html;

fn swatch(name: &str, color: &str) -> String {
    format!(
        r#"<div class='flex items-center gap-2'><span class='w-5 h-5 rounded' style='background:{0}'></span><span class='text-sm'>{1}</span><span class='text-xs text-gray-500'>{0}</span></div>"#,
        escape_html(color),
        name
    )
}

pub fn render_settings(config: &Config) -> String {
    let mut swatches = vec![
        swatch("primary", &config.palette.primary),
        swatch("secondary", &config.palette.secondary),
        swatch("success", &config.palette.success),
        swatch("pending", &config.palette.pending),
        swatch("cancelled", &config.palette.cancelled),
    ];
    swatches.extend(config.palette.extra.iter().map(|c| swatch("extra", c)));

    format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Configuración</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Servidor</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Host</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Puerto</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Datos</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Directorio</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Archivo</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Panel</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Meses</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Costo por defecto</p><p class='font-medium'>{}% del precio</p></div>
                <div><p class='text-sm text-gray-500'>Moneda</p><p class='font-medium'>{} ({} decimales)</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Colores</h3>
            <div class='grid grid-cols-2 md:grid-cols-3 gap-3'>{}</div>
        </div>"#,
        escape_html(&config.server.host),
        config.server.port,
        escape_html(&config.data.path.display().to_string()),
        escape_html(&config.data.file),
        escape_html(&config.dashboard.month_labels.join(" ")),
        (config.dashboard.default_cost_ratio * 100.0).round(),
        escape_html(&config.currency.symbol),
        config.currency.decimal_places,
        swatches.join("")
    )
}

pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let inner_content = render_settings(&state.config);
    let html = crate::page_response(&headers, "Configuración", "/settings", &inner_content);
    axum::response::Html(html)
}
