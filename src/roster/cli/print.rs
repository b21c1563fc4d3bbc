use chrono::{DateTime, Utc};
use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel, RosterStatus};
use roster::config::{KEYS, RosterConfig};
use roster::directory::DirectoryEntry;
use roster::index::DisplayRecord;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const PHONE_WIDTH: usize = 12;
const GENDER_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_status(status: &RosterStatus) {
    println!("{}", "Student Directory".bold());
    println!("  Students saved: {}", status.students.to_string().yellow());
    println!("  Counter:        {}", status.counter.to_string().yellow());
    println!("  {}", status.data_dir.display().to_string().dimmed());
}

pub(super) fn print_records(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("No students found.");
        return;
    }

    let line_width = line_width();
    let idx_width = records
        .iter()
        .map(|dr| format!("{}. ", dr.index).width())
        .max()
        .unwrap_or(3);

    for dr in records {
        let idx_str = format!("{:>width$}", format!("{}. ", dr.index), width = idx_width);
        let fixed = idx_width + PHONE_WIDTH + GENDER_WIDTH + TIME_WIDTH;
        let available = line_width.saturating_sub(fixed);

        let who = format!("{} <{}>", dr.record.name, dr.record.email);
        let who = truncate_to_width(&who, available);
        let padding = available.saturating_sub(who.width());

        println!(
            "{}{}{}{:<pw$}{:<gw$}{}",
            idx_str.yellow(),
            who,
            " ".repeat(padding),
            dr.record.phone,
            dr.record.gender.to_string(),
            format_time_ago(dr.record.created_at()).dimmed(),
            pw = PHONE_WIDTH,
            gw = GENDER_WIDTH,
        );
    }
}

pub(super) fn print_full_records(records: &[DisplayRecord]) {
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            dr.index.to_string().yellow(),
            dr.record.name.bold()
        );
        println!("  Email:  {}", dr.record.email);
        println!("  Phone:  {}", dr.record.phone);
        println!("  Gender: {}", dr.record.gender);
        println!(
            "  Added:  {}",
            dr.record.created_at().format("%Y-%m-%d %H:%M UTC")
        );
        println!("  {}", format!("id:{}", dr.record.id).dimmed());
    }
}

pub(super) fn print_directory(entries: &[DirectoryEntry]) {
    let line_width = line_width();
    for entry in entries {
        let badge = format!("[{:<2}]", entry.initials());
        let mut line = format!("{} {} <{}> {}", badge, entry.name, entry.email, entry.phone);
        if let Some(company) = &entry.company {
            line.push_str(&format!(" · {}", company.name));
        }
        println!("{}", truncate_to_width(&line, line_width));
    }
}

pub(super) fn print_config(config: &RosterConfig) {
    let key_width = KEYS.iter().map(|k| k.width()).max().unwrap_or(0);
    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        let padded = format!("{:<width$}", key, width = key_width);
        println!("{}  {}", padded.bold(), value);
    }
}

pub(super) fn print_locations(locations: &[(&'static str, PathBuf)]) {
    for (name, path) in locations {
        println!("{:<9} {}", format!("{}:", name).dimmed(), path.display());
    }
}

/// Terminal width capped at `MAX_LINE_WIDTH`; falls back to the cap when not a tty.
fn line_width() -> usize {
    match console::Term::stdout().size_checked() {
        Some((_, cols)) => (cols as usize).min(MAX_LINE_WIDTH),
        None => MAX_LINE_WIDTH,
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
