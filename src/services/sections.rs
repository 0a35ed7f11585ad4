// src/services/sections.rs
//! Splits a coaching reply into its numbered sections.
//!
//! A section starts right before every `<digit>) <whitespace>` marker. The
//! scan is done by hand so the boundaries stay identical whatever produced
//! the text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    KeyPoints,
    MonthlyTarget,
    ActionPlan,
    Checklist,
    Info,
}

impl SectionKind {
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => SectionKind::Summary,
            1 => SectionKind::KeyPoints,
            2 => SectionKind::MonthlyTarget,
            3 => SectionKind::ActionPlan,
            4 => SectionKind::Checklist,
            _ => SectionKind::Info,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Summary => "오늘 요약",
            SectionKind::KeyPoints => "핵심 포인트",
            SectionKind::MonthlyTarget => "월 목표 관점",
            SectionKind::ActionPlan => "내일 액션 플랜",
            SectionKind::Checklist => "실행 체크리스트",
            SectionKind::Info => "정보",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::Summary => "fa-chart-pie",
            SectionKind::KeyPoints => "fa-star",
            SectionKind::MonthlyTarget => "fa-flag",
            SectionKind::ActionPlan => "fa-rocket",
            SectionKind::Checklist => "fa-list-check",
            SectionKind::Info => "fa-check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub index: usize,
    pub kind: SectionKind,
    pub title: &'static str,
    pub icon: &'static str,
    pub body: String,
}

/// True when `rest` begins with `<ascii digit>)<whitespace>`.
fn starts_with_marker(rest: &str) -> bool {
    let mut chars = rest.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(d), Some(')'), Some(ws)) if d.is_ascii_digit() && ws.is_whitespace()
    )
}

/// Byte offsets where a new section begins.
fn marker_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .filter(|(i, _)| starts_with_marker(&text[*i..]))
        .map(|(i, _)| i)
        .collect()
}

fn split_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for offset in marker_offsets(text) {
        fragments.push(&text[start..offset]);
        start = offset;
    }
    fragments.push(&text[start..]);
    fragments.into_iter().filter(|f| !f.is_empty()).collect()
}

/// Drops a leading `N) heading` line, then trims.
fn section_body(fragment: &str) -> String {
    if !starts_with_marker(fragment) {
        return fragment.trim().to_string();
    }
    // digit and ')' are one byte each; the whitespace may be wider
    let after_ws = fragment[2..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| 2 + i)
        .unwrap_or(fragment.len());
    let rest = &fragment[after_ws..];
    match rest.find('\n') {
        Some(nl) => rest[nl + 1..].trim().to_string(),
        None => String::new(),
    }
}

/// Parses a raw reply into display sections. Never fails; text without
/// markers comes back as one section.
pub fn parse_sections(report: &str) -> Vec<ReportSection> {
    split_fragments(report)
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| {
            let kind = SectionKind::for_index(index);
            ReportSection {
                index,
                kind,
                title: kind.title(),
                icon: kind.icon(),
                body: section_body(fragment),
            }
        })
        .collect()
}
