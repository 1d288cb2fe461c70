use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use mindcare_core::{
    AppointmentReview, AppointmentSource, CalendarError, CalendarService, MockAppointmentSource,
    RolloverPolicy, ScreenConfig,
};
use shared::{
    AppointmentDetails, AppointmentRecord, AppointmentStatus, CalendarDayType, MonthDirection, VisitKind,
};
use std::sync::Arc;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn student_record(id: &str, date: &str, time: &str) -> AppointmentRecord {
    AppointmentRecord {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        details: AppointmentDetails::Student {
            doctor_name: "Dr. Pham".to_string(),
            visit: VisitKind::InPerson,
            status: AppointmentStatus::Confirmed,
        },
    }
}

struct FailingSource;

impl AppointmentSource for FailingSource {
    fn list_appointments(&self) -> Result<Vec<AppointmentRecord>> {
        Err(anyhow!("network unreachable"))
    }
}

#[test]
fn test_student_calendar_flow() {
    let _ = env_logger::builder().is_test(true).try_init();

    let today = ymd(2024, 10, 17);
    let source = MockAppointmentSource::from_records(vec![student_record("1", "2024-10-17", "16:00")]);
    let mut screen = CalendarService::new_at(ScreenConfig::student(), Arc::new(source), today);
    assert_eq!(screen.refresh().unwrap(), 1);

    let month = screen.month_view_at(today);
    assert_eq!(month.cells.len(), 33);
    assert_eq!(
        month.cells.iter().filter(|cell| cell.day_type == CalendarDayType::PaddingBefore).count(),
        2
    );
    assert_eq!(month.cells.chunks(7).count(), 5);
    assert_eq!(screen.selected_appointments().len(), 1);

    // Tapping the next day empties the list
    screen.select_date(ymd(2024, 10, 18));
    assert!(screen.selected_appointments().is_empty());
    let month = screen.month_view_at(today);
    let selected = month.cells.iter().find(|cell| cell.is_selected).unwrap();
    assert_eq!(selected.date, Some(ymd(2024, 10, 18)));
    assert!(!selected.has_appointment);

    // Selecting a day in another month does not move the grid
    screen.select_date(ymd(2024, 11, 5));
    assert_eq!(screen.view().displayed_month(), (2024, 10));
    let month = screen.month_view_at(today);
    assert!(month.cells.iter().all(|cell| !cell.is_selected));

    // Paging to November shows the selection again, and today is not on the grid
    screen.navigate_month(MonthDirection::Next);
    let november = screen.month_view_at(today);
    assert_eq!(november.title, "November 2024");
    assert_eq!(november.cells.iter().filter(|cell| cell.is_selected).count(), 1);
    assert_eq!(november.cells.iter().filter(|cell| cell.is_today).count(), 0);
    assert_eq!(screen.view().selected_date(), ymd(2024, 11, 5));
}

#[test]
fn test_refresh_replaces_snapshot_wholesale() {
    let today = ymd(2024, 10, 17);
    let source = MockAppointmentSource::from_records(vec![student_record("1", "2024-10-17", "16:00")]);
    let handle = source.clone();
    let mut screen = CalendarService::new_at(ScreenConfig::student(), Arc::new(source), today);
    screen.refresh().unwrap();

    handle.replace(vec![
        student_record("7", "2024-10-20T09:00:00+07:00", "09:00"),
        student_record("8", "not a date", "10:00"),
    ]);
    // Nothing changes until the screen refreshes
    assert_eq!(screen.selected_appointments().len(), 1);

    assert_eq!(screen.refresh().unwrap(), 2);
    assert!(screen.selected_appointments().is_empty());
    let marked: Vec<NaiveDate> = screen
        .month_view_at(today)
        .cells
        .iter()
        .filter(|cell| cell.has_appointment)
        .filter_map(|cell| cell.date)
        .collect();
    assert_eq!(marked, vec![ymd(2024, 10, 20)]);
}

#[test]
fn test_failed_refresh_keeps_previous_snapshot() {
    let today = ymd(2024, 10, 17);
    let mut screen = CalendarService::new_at(ScreenConfig::doctor(), Arc::new(FailingSource), today);

    let err = screen.refresh().unwrap_err();
    assert!(matches!(err, CalendarError::Source(_)));
    assert_eq!(err.to_string(), "Failed to load appointments: network unreachable");
    assert!(screen.appointments().is_empty());
    assert_eq!(screen.month_view_at(today).cells.len(), 33);
}

#[test]
fn test_doctor_reviews_an_appointment_from_the_calendar() {
    let today = ymd(2024, 10, 17);
    let mut screen = CalendarService::new_at(
        ScreenConfig::doctor(),
        Arc::new(MockAppointmentSource::doctor_fixture(today)),
        today,
    );
    screen.refresh().unwrap();

    let tapped = screen.search("pressure");
    assert_eq!(tapped.len(), 1);
    assert_eq!(screen.config().appointment_route, "DoctorAppointmentDetail");

    let mut review = AppointmentReview::new(tapped[0].id.clone());
    review.request_reject().unwrap();
    review.agree_reject().unwrap();
    assert_eq!(review.close_reject_success().unwrap(), AppointmentStatus::Rejected);
    assert!(review.request_confirm().is_err());
}

#[test]
fn test_yaml_configured_screen_rolls_forward() {
    let config = ScreenConfig::from_yaml_str("role: Doctor\nrollover: RollForward\n").unwrap();
    assert_eq!(config.rollover, RolloverPolicy::RollForward);

    let mut screen = CalendarService::new_at(config, Arc::new(MockAppointmentSource::default()), ymd(2024, 1, 31));
    screen.navigate_month(MonthDirection::Next);
    assert_eq!(screen.view().current_month(), ymd(2024, 3, 2));
    screen.navigate_month(MonthDirection::Previous);
    assert_eq!(screen.view().displayed_month(), (2024, 2));
    assert_eq!(screen.view().selected_date(), ymd(2024, 1, 31));
}
