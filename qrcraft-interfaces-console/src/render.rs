// Plain-text views of application state.

use std::fmt::Write;

use chrono::{Local, TimeZone};

use qrcraft_application::MetricsSnapshot;
use qrcraft_domain::{
    GenerationOutcome, GenerationRecord, RecordId, ScanAnalytics, ScanEvent, Theme,
    HISTORY_CAPACITY,
};

const BAR_WIDTH: usize = 20;

pub fn format_time(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

fn format_clock(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

pub fn generated(outcome: &GenerationOutcome) -> String {
    let mut out = String::new();
    if outcome.is_new {
        let _ = writeln!(out, "Generated {}", record_line(&outcome.record));
    } else {
        let _ = writeln!(out, "Reopened {}", record_line(&outcome.record));
    }
    for evicted in &outcome.evicted {
        let _ = writeln!(out, "  dropped from history: {}", evicted.value());
    }
    out.trim_end().to_string()
}

fn record_line(record: &GenerationRecord) -> String {
    format!(
        "[{}] {} ({})",
        record.content_type(),
        record.value(),
        record.id().short()
    )
}

pub fn record(record: &GenerationRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record_line(record));
    let _ = writeln!(out, "  created:      {}", format_time(record.created_at()));
    let _ = writeln!(out, "  last touched: {}", format_time(record.last_touched_at()));
    let _ = write!(out, "  scans:        {}", record.scan_count());
    if let Some(last) = record.last_scanned_at() {
        let _ = write!(out, " (last {})", format_time(last));
    }
    out
}

pub fn history(records: &[GenerationRecord], active: Option<RecordId>) -> String {
    if records.is_empty() {
        return "No history yet.".to_string();
    }
    let mut out = format!("History ({}/{}):", records.len(), HISTORY_CAPACITY);
    for (index, record) in records.iter().enumerate() {
        let marker = if Some(record.id()) == active { '*' } else { ' ' };
        let _ = write!(
            out,
            "\n{} {:>2}. [{:<5}] {}  {} scans  {}",
            marker,
            index + 1,
            record.content_type(),
            record.value(),
            record.scan_count(),
            format_time(record.last_touched_at())
        );
    }
    out
}

pub fn scan(event: &ScanEvent, total: u64) -> String {
    format!(
        "Scan from {} in {} at {} (total {})",
        event.device,
        event.location,
        format_clock(event.timestamp),
        total
    )
}

pub fn analytics(analytics: &ScanAnalytics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total scans:     {}", analytics.total_scans);
    let _ = writeln!(out, "Unique visitors: {}", analytics.unique_visitors);
    let last = analytics
        .last_scanned_at
        .map(format_time)
        .unwrap_or_else(|| "never".to_string());
    let _ = writeln!(out, "Last scan:       {}", last);
    let _ = writeln!(out, "Devices:");
    for share in &analytics.devices {
        let filled = (share.percent as usize * BAR_WIDTH) / 100;
        let _ = writeln!(
            out,
            "  {:<8} {:>3}% {}{}",
            share.device,
            share.percent,
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled)
        );
    }
    if analytics.recent_activity.is_empty() {
        let _ = write!(out, "No scans yet.");
    } else {
        let _ = write!(out, "Recent activity:");
        for event in &analytics.recent_activity {
            let _ = write!(
                out,
                "\n  {:<8} {:<14} {}",
                event.device,
                event.location,
                format_clock(event.timestamp)
            );
        }
    }
    out
}

pub fn stats(snapshot: &MetricsSnapshot, history_len: usize, theme: Theme) -> String {
    format!(
        "history: {}/{}  theme: {}\n\
         generated: {}  reopened: {}  evicted: {}\n\
         scans: {}  ignored scans: {}\n\
         validation failures: {}  storage errors: {}",
        history_len,
        HISTORY_CAPACITY,
        theme.as_str(),
        snapshot.generations,
        snapshot.touches,
        snapshot.evictions,
        snapshot.scans,
        snapshot.ignored_scans,
        snapshot.validation_failures,
        snapshot.storage_errors
    )
}
