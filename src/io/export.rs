//! CSV export for computed scenario series.
//!
//! This is the hand-off format for external charting tools: one row per
//! scenario per slot, in scenario then slot order.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::profile::scenario::ScenarioReport;
use crate::profile::slots;

/// Column header for the exported slot series.
const HEADER: &str = "scenario,slot,label,real_power_w,apparent_power_va,energy_wh";

/// Exports scenario reports to a CSV file at the given path.
///
/// Writes a header row followed by one data row per scenario per slot.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(reports: &[ScenarioReport], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(reports, buf)
}

/// Writes scenario reports as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(reports: &[ScenarioReport], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for report in reports {
        for total in &report.profile.slots {
            wtr.write_record(&[
                report.scenario.key().to_string(),
                total.slot.to_string(),
                slots::slot_label(total.slot),
                format!("{:.4}", total.real_power_w),
                format!("{:.4}", total.apparent_power_va),
                format!("{:.4}", total.energy_wh),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::appliance::{ApplianceRecord, Priority, SlotMask};
    use crate::profile::run_scenarios;
    use crate::profile::slots::SLOT_COUNT;

    fn sample_reports() -> Vec<ScenarioReport> {
        let records = [
            ApplianceRecord {
                name: "Fridge".to_string(),
                quantity: 1,
                rated_power_w: 300.0,
                duty_cycle_pct: 40.0,
                power_factor: 0.85,
                use_time_pct: 100.0,
                priority: Priority::Essential,
                active_slots: SlotMask::ALL,
                room: "Kitchen".to_string(),
            },
            ApplianceRecord {
                name: "Geyser".to_string(),
                quantity: 1,
                rated_power_w: 3000.0,
                duty_cycle_pct: 30.0,
                power_factor: 1.0,
                use_time_pct: 40.0,
                priority: Priority::NonEssential,
                active_slots: SlotMask::from_slice(&[
                    false, false, true, true, false, false, false, false, true, true, false,
                    false,
                ])
                .expect("12 entries"),
                room: "Bathroom".to_string(),
            },
        ];
        run_scenarios(&records).expect("valid records")
    }

    #[test]
    fn header_matches_schema() {
        let mut buf = Vec::new();
        write_csv(&sample_reports(), &mut buf).expect("write");
        let output = String::from_utf8(buf).expect("utf8");
        assert_eq!(
            output.lines().next().unwrap_or(""),
            "scenario,slot,label,real_power_w,apparent_power_va,energy_wh"
        );
    }

    #[test]
    fn row_count_is_scenarios_times_slots() {
        let mut buf = Vec::new();
        write_csv(&sample_reports(), &mut buf).expect("write");
        let output = String::from_utf8(buf).expect("utf8");
        // 1 header + 3 scenarios x 12 slots
        assert_eq!(output.lines().count(), 1 + 3 * SLOT_COUNT);
    }

    #[test]
    fn deterministic_output() {
        let reports = sample_reports();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&reports, &mut buf1).expect("write");
        write_csv(&reports, &mut buf2).expect("write");
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let mut buf = Vec::new();
        write_csv(&sample_reports(), &mut buf).expect("write");

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().expect("headers");
        assert_eq!(headers.len(), 6);

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.expect("every row should parse");
            // slot parses as usize, numeric columns as f64
            assert!(rec[1].parse::<usize>().is_ok());
            for i in 3..6 {
                assert!(rec[i].parse::<f64>().is_ok(), "column {i} should parse");
            }
            row_count += 1;
        }
        assert_eq!(row_count, 3 * SLOT_COUNT);
    }

    #[test]
    fn scenario_keys_appear_in_order() {
        let mut buf = Vec::new();
        write_csv(&sample_reports(), &mut buf).expect("write");
        let output = String::from_utf8(buf).expect("utf8");
        let keys: Vec<&str> = output
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap_or(""))
            .collect();
        assert_eq!(keys[0], "all");
        assert_eq!(keys[SLOT_COUNT], "essential-medium");
        assert_eq!(keys[2 * SLOT_COUNT], "essential");
    }
}
