// src/rules/patterns.rs
//! Compiled patterns over normalized registry markup.
//!
//! Every pattern is written permissively: a value may be preceded by a
//! closing `</b>`, a `<br>`, an opening `<b>` and an `<a ...>` link, in any
//! combination, with arbitrary whitespace in between. Where registry markup
//! changed between software versions the statics hold a fallback chain,
//! tried in order.

use once_cell::sync::Lazy;
use regex::Regex;

/// Markup tolerated between a caption and its value.
const GAP: &str = r"\s*(?:</b>)?\s*(?:<br\s*/?>)?\s*(?:<b>)?\s*(?:<a[^>]*>)?\s*";
const DATE: &str = r"(\d{2}\.\d{2}\.\d{4})";
/// Caption value: runs to the closing `</b>`, `</p>` or table tag, inline
/// markup such as `<br>` included; [`super::clean_value`] strips it.
const VALUE: &str = r"((?:[^<]|<[^/]|</[^bBpPtT])*)";
const VALUE_CHAR: &str = r"(?:[^<]|<[^/]|</[^bBpPtT])";
/// Paragraph content that does not run past its own `</p>`.
pub(crate) const PARA: &str = r"((?:[^<]|<[^/]|</[^pP])*)";

fn caption(caption: &str, value: &str) -> String {
    format!("{}:{}{}", caption, GAP, value)
}

fn compile_all(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pat| Regex::new(pat).unwrap_or_else(|e| panic!("Failed to compile pattern '{}': {}", pat, e)))
        .collect()
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Failed to compile pattern '{}': {}", pattern, e))
}

// --- Shared by every kind ---

pub static REG_NUMBER_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        // Registry link, present on current pages
        r#"title="Ссылка на реестр[^"]*"[^>]*>\s*(\d+)"#.to_string(),
        caption(r"(?:\(11\)\s*)?Номер (?:патента|регистрации(?: \(свидетельства\))?)", r"(\d+)"),
    ])
});

pub static REG_DATE_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"Дата (?:государственной )?регистрации", DATE)])
});

/// Application number and date, patent layout first, then the certificate one.
pub static APPLICATION_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        format!(r"\(21\)\s*\(22\)\s*Заявка:{}([0-9/]+)\s*(?:</a>)?\s*,\s*{}", GAP, DATE),
        format!(r"Номер и дата поступления заявки:{}(\d{{5,}})\s+{}", GAP, DATE),
    ])
});

/// Bare "number date" pair; only trusted when it occurs once in the page.
pub static APPLICATION_BARE_RE: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(\d{{5,}})\s+{}", DATE)));

pub static PUB_DATE_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        caption(r"\(45\)\s*Опубликовано", DATE),
        caption(r"Дата публикации(?: и номер бюллетеня)?", DATE),
    ])
});

pub static AUTHORS_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"(?:\(72\)\s*)?Автор\(ы\)", VALUE)])
});

pub static HOLDERS_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"(?:\(73\)\s*)?(?:Патентообладатель|Правообладатель)\(и\)", VALUE)])
});

// --- Patents ---

pub static STATUS_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[r"Статус:\s*(?:</td>\s*<td[^>]*>)?\s*(?:<b>)?\s*([^<]+)".to_string()])
});

pub static PATENT_TITLE_RE: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(&[r"\(54\)\s*([^<]+)".to_string()]));

pub static PRIORITY_APP_DATE_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"\(22\)\s*Дата подачи (?:первоначальной )?заявки", DATE)])
});

pub static PRIORITY_CONV_DATE_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"\(30\)\s*Конвенционный приоритет", DATE)])
});

pub static START_DATE_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"\(24\)\s*Дата начала отсч[её]та срока действия патента", DATE)])
});

/// Start of a notice caption; the flat form is split here before
/// [`NOTICE_BLOCK_RE`] runs so a block without a date line cannot absorb
/// the next one.
pub static NOTICE_CAPTION_RE: Lazy<Regex> = Lazy::new(|| compile(r#"<p[^>]*class="TitIzv""#));

/// One amendment ("izv") block, matched at the start of its own segment of
/// the flat form: caption with optional code, body, publication date line.
pub static NOTICE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r#"^<p[^>]*class="TitIzv"[^>]*>\s*(?:<b>)?\s*(?:([A-Z0-9]{{4}})\s*[-–—]\s*)?(.*?)\s*(?:</b>)?\s*</p>(.*?)Дата публикации(?: и номер бюллетеня)?:{}{}"#,
        GAP, DATE
    ))
});

pub static NEW_HOLDER_NAME_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"Новое наименование (?:патентообладателя|правообладателя)[^:<]*", VALUE)])
});

pub static NEW_HOLDER_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"Новы[йе] (?:патентообладател|правообладател)[^:<]*", VALUE)])
});

pub static CORRECTED_HOLDER_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(r"Следует читать:.*?(?:Патентообладатель|Правообладатель)\(и\)", VALUE)])
});

/// Corrected author list, plain-text layout first, then the `<b>`-wrapped one.
pub static CORRECTED_AUTHORS_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        format!(r"Следует читать:.*?Автор\(ы\):[ ]*([^<\s]{}*)", VALUE_CHAR),
        format!(r"Следует читать:.*?Автор\(ы\):\s*(?:<br\s*/?>)?\s*<b>{}</b>", VALUE),
    ])
});

pub static READ_INSTEAD_RE: Lazy<Regex> = Lazy::new(|| compile(r"Следует читать:"));

// --- Certificates ---

pub static CERTIFICATE_TITLE_RE: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(&[caption(r"Название[^:<]*", VALUE)]));

pub static ABSTRACT_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(r"Реферат:\s*(?:</b>)?\s*(?:<br\s*/?>)?{}</p>", PARA))
});

/// "Тип ЭВМ: ... ОС: ..." tail older program abstracts carry.
pub static ABSTRACT_TAIL_RE: Lazy<Regex> = Lazy::new(|| compile(r"\s*Тип ЭВМ:\s+.+?\.\s*ОС:.+\.\s*$"));

pub static PC_RE: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(&[caption(r"Тип реализующей ЭВМ", VALUE)]));

pub static PC_IN_ABSTRACT_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"Тип ЭВМ:\s+(.+?)\.\s*ОС:".to_string()]));

pub static OS_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[caption(r"Вид и версия операционной системы", VALUE)]));

pub static OS_IN_ABSTRACT_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"ОС:\s+(.+)\.\s*$".to_string()]));

pub static TOOL_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[caption(
        r"(?:Языки? программирования|Вид и версия системы управления базой данных)",
        VALUE,
    )])
});

pub static PROGRAM_TOOL_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[caption(r"Языки? программирования", VALUE)]));

pub static DATABASE_TOOL_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[caption(r"Вид и версия системы управления базой данных", VALUE)]));

pub static SIZE_RE: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(&[caption(r"Объ[её]м[^:<]*", VALUE)]));

pub static PROGRAM_SIZE_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[caption(r"Объ[её]м программы для ЭВМ", VALUE)]));

pub static DATABASE_SIZE_RE: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[caption(r"Объ[её]м базы данных", VALUE)]));

/// Caption paragraph followed by one or two `notice` value paragraphs.
pub static NOTICE_VARIANT_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r#"<p[^>]*class="[^"]*Izv[^"]*"[^>]*>{para}</p>\s*<p[^>]*class="notice"[^>]*>{para}</p>(?:\s*<p[^>]*class="notice"[^>]*>{para}</p>)?"#,
        para = PARA
    ))
});
