// src/utils/html_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;

use regex::Regex;

use crate::utils::error::AppError;

/// Patterns highlighted in `--debug` mode, paired with their highlight type.
///
/// These mirror the anchors the field rules and notice scanner look for, so
/// an annotated page shows at a glance which captions the registry page
/// actually carries.
pub const DEBUG_PATTERNS: &[(&str, &str)] = &[
    (r"Документ\s+с\s+данным\s+номером\s+отсутствует", "missing"),
    (r#"<p[^>]*class="TitIzv"[^>]*>"#, "notice"),
    (r#"<p[^>]*class="[^"]*Izv[^"]*"[^>]*>"#, "notice"),
    (r#"<p[^>]*class="notice"[^>]*>"#, "notice"),
    (r"\(\d{2}\)(?:\(\d{2}\))?\s*[А-ЯЁ][^:<]{2,80}:", "caption"),
    (r"(?:Дата|Номер|Автор|Правообладатель|Патентообладатель|Название|Реферат|Статус|Язык|Вид и версия|Объ[её]м|Тип)[^:<]{0,80}:", "caption"),
    (r"\d{2}\.\d{2}\.\d{4}", "date"),
];

/// Saves a HTML page to a file with debug highlights
pub fn save_debug_html(html: &str, filename: &Path, highlights: &[(usize, usize, &str)]) -> Result<(), AppError> {
    let mut file = File::create(filename)?;

    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");

    // CSS for highlight colors
    debug_html.push_str(".highlight-caption { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-notice { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-date { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-missing { background-color: #FF6347; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| (h.0, std::cmp::Reverse(h.1)));

    for (start, end, highlight_type) in sorted_highlights {
        // Overlapping matches would duplicate markup
        if start < last_pos || end > html.len() {
            continue;
        }
        debug_html.push_str(&html[last_pos..start]);

        let css_class = match highlight_type {
            "caption" => "highlight-caption",
            "notice" => "highlight-notice",
            "date" => "highlight-date",
            "missing" => "highlight-missing",
            _ => "highlight-custom",
        };

        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}, Type: {}\">",
            css_class, start, end, highlight_type
        ));
        debug_html.push_str(&html[start..end]);
        debug_html.push_str("</span>");

        last_pos = end;
    }

    if last_pos < html.len() {
        debug_html.push_str(&html[last_pos..]);
    }

    debug_html.push_str("\n</body>\n</html>");

    file.write_all(debug_html.as_bytes())?;

    tracing::info!("Saved debug HTML to {}", filename.display());
    Ok(())
}

/// Creates a debug version of a registry page with locations of specified regex patterns highlighted
pub fn create_debug_html(html: &str, filename: &Path, patterns: &[(&str, &str)]) -> Result<usize, AppError> {
    let mut highlights = Vec::new();

    for (pattern, highlight_type) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;

        for mat in re.find_iter(html) {
            highlights.push((mat.start(), mat.end(), *highlight_type));
        }
    }

    let count = highlights.len();
    save_debug_html(html, filename, &highlights)?;
    Ok(count)
}
