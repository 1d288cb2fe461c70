//! Renders a calendar screen as text using the mock appointment data.
//!
//! `cargo run -p mindcare-core --example print_month [screen.yaml]`

use anyhow::Result;
use log::info;
use mindcare_core::domain::calendar::{weeks, WEEKDAY_LABELS};
use mindcare_core::{CalendarService, MockAppointmentSource, ScreenConfig};
use shared::{ClassifiedCell, ScreenRole};
use std::sync::Arc;

fn render_cell(cell: &ClassifiedCell) -> String {
    let Some(date) = cell.date else {
        return "     ".to_string();
    };
    let open = if cell.is_selected { '[' } else if cell.is_today { '(' } else { ' ' };
    let close = if cell.is_selected { ']' } else if cell.is_today { ')' } else { ' ' };
    let marker = if cell.has_appointment { '*' } else { ' ' };
    format!("{}{:>2}{}{}", open, chrono::Datelike::day(&date), close, marker)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ScreenConfig::load(path)?,
        None => ScreenConfig::student(),
    };
    let today = chrono::Local::now().date_naive();
    let source = match config.role {
        ScreenRole::Student => MockAppointmentSource::student_fixture(today),
        ScreenRole::Doctor => MockAppointmentSource::doctor_fixture(today),
    };

    let mut screen = CalendarService::new(config, Arc::new(source));
    let loaded = screen.refresh()?;
    info!("Rendering {} appointments", loaded);

    let month = screen.month_view();
    println!("{} ({})", month.title, screen.config().title);
    println!("{}", WEEKDAY_LABELS.map(|label| format!("{:<5}", label)).join(""));
    for row in weeks(&month.cells) {
        println!("{}", row.iter().map(render_cell).collect::<String>());
    }

    println!();
    println!("{}", screen.selected_heading());
    let appointments = screen.selected_appointments();
    if appointments.is_empty() {
        println!("  No appointments scheduled");
    }
    for appointment in appointments {
        println!("  {}  {}", appointment.time, appointment.details.counterpart_name());
    }
    Ok(())
}
