use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    advice::SolarShiftAdvice,
    core::{estimator::Snapshot, sample::HourlyPowerSample},
};

/// Width of the longest bar in the power usage chart.
const BAR_WIDTH: f64 = 40.0;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_cards_table(snapshot: &Snapshot) -> Table {
    let estimate = snapshot.estimate();
    let mut table = new_table();
    table.set_header(vec!["Carbon footprint", "Fuel usage", "Green savings"]);
    table.add_row(vec![
        Cell::new(format!("{:.1}", estimate.total_co2)).add_attribute(Attribute::Bold),
        Cell::new(format!("{} Litres", snapshot.fuel_volume().0)).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0} saved", estimate.green_savings))
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);
    table
}

pub fn build_power_usage_table(sample: &HourlyPowerSample) -> Table {
    let mean = sample.mean();
    let max = sample.max();

    let mut table = new_table();
    table.set_header(vec!["Hour", "Power usage", ""]);
    for (hour, reading) in sample.iter() {
        let color = if reading >= mean { Color::Red } else { Color::Green };
        table.add_row(vec![
            Cell::new(format!("{hour}:00")).add_attribute(Attribute::Dim),
            Cell::new(format!("{reading:.0}")).set_alignment(CellAlignment::Right).fg(color),
            Cell::new("█".repeat(bar_length(reading.0, max.0))).fg(color),
        ]);
    }
    table
}

pub fn build_advice_table(advice: &SolarShiftAdvice) -> Table {
    let mut table = new_table();
    table.set_header(vec!["🌱 Sustainability coach"]);
    table.add_row(vec![Cell::new(advice)]);
    table
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_length(value: f64, max: f64) -> usize {
    let length = (value / max * BAR_WIDTH).round();
    if length.is_finite() && length > 0.0 { length as usize } else { 0 }
}
