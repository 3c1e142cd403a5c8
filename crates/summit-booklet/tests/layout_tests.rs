use summit_booklet::layout::*;
use summit_booklet::*;

fn session(id: &str, title: &str, day: u8) -> Session {
    Session::new(id, title, "09:00", "10:00", Day(day))
}

/// Day 1 empty, days 2 and 3 with sessions, one sponsor
fn three_day_agenda() -> StaticRepository {
    StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2), Day(3)],
        sessions: vec![
            session("d2-a", "Opening Ceremony", 2),
            session("d2-b", "Lunch", 2),
            session("d3-a", "Closing Keynote", 3),
        ],
        sponsors: vec![Sponsor::new("Skyline", SponsorTier::Gold, "skyline.png")],
    })
    .unwrap()
}

#[test]
fn test_pages_per_spread() {
    assert_eq!(pages_per_spread(true), 1);
    assert_eq!(pages_per_spread(false), 2);
    assert_eq!(DeviceClass::Mobile.pages_per_spread(), 1);
    assert_eq!(DeviceClass::Desktop.pages_per_spread(), 2);
}

#[test]
fn test_total_spreads() {
    assert_eq!(total_spreads(true, 4), 4);
    assert_eq!(total_spreads(false, 4), 2);
    // Odd page count on desktop rounds up
    assert_eq!(total_spreads(false, 5), 3);
    assert_eq!(total_spreads(false, 1), 1);
    assert_eq!(total_spreads(true, 1), 1);
}

#[test]
fn test_total_spreads_never_zero() {
    assert_eq!(total_spreads(true, 0), 1);
    assert_eq!(total_spreads(false, 0), 1);
}

#[test]
fn test_logical_pages_derivation() {
    let repo = three_day_agenda();
    let pages = logical_pages(&repo, Day(1));

    assert_eq!(
        pages,
        vec![
            LogicalPage::Welcome,
            LogicalPage::DayAgenda(Day(2)),
            LogicalPage::DayAgenda(Day(3)),
            LogicalPage::Sponsors,
        ]
    );

    // Page count does not depend on the device class
    assert_eq!(total_spreads(true, pages.len()), 4);
    assert_eq!(total_spreads(false, pages.len()), 2);
}

#[test]
fn test_logical_pages_follow_day_count() {
    let repo = StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2), Day(3), Day(4), Day(5)],
        sessions: vec![
            session("a", "Opening Ceremony", 2),
            session("b", "Panel", 3),
            session("c", "Panel", 5),
        ],
        sponsors: vec![Sponsor::new("Skyline", SponsorTier::Gold, "skyline.png")],
    })
    .unwrap();

    let pages = logical_pages(&repo, Day(1));

    // Day 4 has no sessions and is not the welcome day, so it is absent
    assert_eq!(
        pages,
        vec![
            LogicalPage::Welcome,
            LogicalPage::DayAgenda(Day(2)),
            LogicalPage::DayAgenda(Day(3)),
            LogicalPage::DayAgenda(Day(5)),
            LogicalPage::Sponsors,
        ]
    );
}

#[test]
fn test_logical_pages_without_sponsors() {
    let repo = StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2)],
        sessions: vec![session("a", "Opening Ceremony", 2)],
        sponsors: vec![],
    })
    .unwrap();

    assert_eq!(
        logical_pages(&repo, Day(1)),
        vec![LogicalPage::Welcome, LogicalPage::DayAgenda(Day(2))]
    );
}

#[test]
fn test_logical_pages_welcome_day_with_sessions() {
    let repo = StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2)],
        sessions: vec![
            session("a", "Exhibition Set Up", 1),
            session("b", "Opening Ceremony", 2),
        ],
        sponsors: vec![],
    })
    .unwrap();

    // Day 1 is the Welcome page even though it holds sessions
    assert_eq!(
        logical_pages(&repo, Day(1)),
        vec![LogicalPage::Welcome, LogicalPage::DayAgenda(Day(2))]
    );
}

#[test]
fn test_logical_pages_empty_repository() {
    let repo = StaticRepository::empty();
    let pages = logical_pages(&repo, Day(1));

    assert!(pages.is_empty());
    assert_eq!(total_spreads(false, pages.len()), 1);
}

#[test]
fn test_spread_pages_desktop() {
    let pages = logical_pages(&three_day_agenda(), Day(1));

    assert_eq!(
        spread_pages(&pages, 2, 0),
        &[LogicalPage::Welcome, LogicalPage::DayAgenda(Day(2))]
    );
    assert_eq!(
        spread_pages(&pages, 2, 1),
        &[LogicalPage::DayAgenda(Day(3)), LogicalPage::Sponsors]
    );
    assert!(spread_pages(&pages, 2, 2).is_empty());
}

#[test]
fn test_spread_pages_mobile() {
    let pages = logical_pages(&three_day_agenda(), Day(1));

    assert_eq!(spread_pages(&pages, 1, 0), &[LogicalPage::Welcome]);
    assert_eq!(spread_pages(&pages, 1, 1), &[LogicalPage::DayAgenda(Day(2))]);
    assert_eq!(spread_pages(&pages, 1, 3), &[LogicalPage::Sponsors]);
    assert!(spread_pages(&pages, 1, 4).is_empty());
}

#[test]
fn test_spread_pages_trailing_odd_page() {
    let pages = [
        LogicalPage::Welcome,
        LogicalPage::DayAgenda(Day(2)),
        LogicalPage::Sponsors,
    ];

    assert_eq!(spread_pages(&pages, 2, 1), &[LogicalPage::Sponsors]);
}

#[test]
fn test_spread_of_page() {
    assert_eq!(spread_of_page(0, 2), 0);
    assert_eq!(spread_of_page(1, 2), 0);
    assert_eq!(spread_of_page(2, 2), 1);
    assert_eq!(spread_of_page(3, 1), 3);
}

#[test]
fn test_logical_page_titles() {
    assert_eq!(LogicalPage::Welcome.title(), "Welcome");
    assert_eq!(LogicalPage::DayAgenda(Day(2)).title(), "Day 2 Agenda");
    assert_eq!(LogicalPage::Sponsors.title(), "Sponsors");
}
