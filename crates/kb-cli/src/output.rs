use std::fmt::Write as _;

use anyhow::Result;
use kb_almanac::{BaliDateInfo, DayInfo};
use kb_holidays::HolidayRecord;
use serde::Serialize;

/// Pretty-printed JSON of `value`.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn holiday_line(h: &HolidayRecord) -> String {
    let mut line = format!("{}  {:<12}  {}", h.date, h.kind, h.name);
    if h.is_projected {
        line.push_str(" (projected)");
    }
    line
}

/// Text report of one day.
pub fn day_report(info: &BaliDateInfo) -> String {
    let p = &info.pawukon;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})",
        info.gregorian,
        info.gregorian.weekday().indonesian_name()
    );
    let _ = writeln!(out, "Pawukon   {p} (day {})", p.day);
    let _ = writeln!(
        out,
        "          ekawara {}, dwiwara {}, triwara {}, caturwara {}, sadwara {}",
        p.ekawara.map_or("-", |e| e.name()),
        p.dwiwara,
        p.triwara,
        p.caturwara,
        p.sadwara
    );
    let _ = writeln!(
        out,
        "          astawara {}, sangawara {}, dasawara {}",
        p.astawara, p.sangawara, p.dasawara
    );
    let _ = writeln!(out, "Saka      {}", info.saka);
    if info.saka.is_ngunaratri {
        let _ = writeln!(out, "          ngunaratri");
    }
    for h in &info.holidays {
        let _ = write!(out, "Holiday   {}", h.name);
        if let Some(d) = &h.description {
            let _ = write!(out, ": {d}");
        }
        out.push('\n');
    }
    out
}

/// One line per holiday.
pub fn holiday_table(holidays: &[HolidayRecord]) -> String {
    holidays.iter().map(|h| holiday_line(h) + "\n").collect()
}

/// Month name and year, then one line per day; days off are starred.
pub fn month_table(days: &[DayInfo]) -> String {
    let mut out = String::new();
    if let Some(first) = days.first() {
        let d = first.bali.gregorian;
        let _ = writeln!(out, "{} {}", d.month_of_year(), d.year());
    }
    for day in days {
        let info = &day.bali;
        let names: Vec<&str> = day.holidays.iter().map(|h| h.name.as_str()).collect();
        let line = format!(
            "{} {} {:<26} {:<30} {}",
            info.gregorian,
            if day.is_day_off { '*' } else { ' ' },
            info.pawukon.to_string(),
            info.saka.to_string(),
            names.join(", ")
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
