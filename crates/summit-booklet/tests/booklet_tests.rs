use summit_booklet::render::PageContent;
use summit_booklet::*;

const DESKTOP_WIDTH: f32 = 1280.0;
const MOBILE_WIDTH: f32 = 390.0;

fn page_kinds(spread: &render::RenderedSpread) -> Vec<String> {
    spread
        .pages
        .iter()
        .map(|page| match page {
            PageContent::Welcome(_) => "Welcome".to_string(),
            PageContent::DayAgenda(agenda) => agenda.heading.clone(),
            PageContent::Sponsors(_) => "Sponsors".to_string(),
            PageContent::Blank => "Blank".to_string(),
        })
        .collect()
}

#[test]
fn test_desktop_walkthrough() {
    let mut booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        DESKTOP_WIDTH,
    );

    let layout = booklet.layout();
    assert!(!layout.is_mobile);
    assert_eq!(layout.pages_per_spread, 2);
    assert_eq!(booklet.logical_pages().len(), 4);
    assert_eq!(layout.total_spreads, 2);
    assert_eq!(layout.current_spread, 0);

    assert_eq!(
        page_kinds(&booklet.render_current()),
        vec!["Welcome", "Day 2 Agenda"]
    );

    assert!(booklet.next());
    assert_eq!(booklet.current_spread(), 1);
    assert_eq!(
        page_kinds(&booklet.render_current()),
        vec!["Day 3 Agenda", "Sponsors"]
    );

    // Already on the last spread
    assert!(!booklet.next());
    assert_eq!(booklet.current_spread(), 1);
}

#[test]
fn test_resize_to_mobile_keeps_index() {
    let mut booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        DESKTOP_WIDTH,
    );
    booklet.next();

    assert!(booklet.resize(MOBILE_WIDTH));

    let layout = booklet.layout();
    assert!(layout.is_mobile);
    assert_eq!(layout.total_spreads, 4);
    // Same index, different page: spread 1 is now Day 2 on its own
    assert_eq!(layout.current_spread, 1);
    assert_eq!(booklet.current_pages(), &[LogicalPage::DayAgenda(Day(2))]);
    assert_eq!(page_kinds(&booklet.render_current()), vec!["Day 2 Agenda"]);
}

#[test]
fn test_resize_to_desktop_clamps_index() {
    let mut booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        MOBILE_WIDTH,
    );
    assert_eq!(booklet.total_spreads(), 4);
    booklet.next();
    booklet.next();
    booklet.next();
    assert_eq!(booklet.current_spread(), 3);

    assert!(booklet.resize(DESKTOP_WIDTH));
    assert_eq!(booklet.total_spreads(), 2);
    assert_eq!(booklet.current_spread(), 1);
}

#[test]
fn test_resize_within_class_is_not_a_change() {
    let mut booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        DESKTOP_WIDTH,
    );
    booklet.next();

    assert!(!booklet.resize(1024.0));
    assert!(!booklet.resize(768.0));
    assert_eq!(booklet.current_spread(), 1);
    assert_eq!(booklet.total_spreads(), 2);
}

#[test]
fn test_initial_layout_is_measured_immediately() {
    let booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        MOBILE_WIDTH,
    );
    assert!(booklet.layout().is_mobile);
    assert_eq!(page_kinds(&booklet.render_current()), vec!["Welcome"]);
}

#[test]
fn test_zero_data_booklet() {
    let mut booklet = Booklet::new(
        StaticRepository::empty(),
        BookletOptions::default(),
        DESKTOP_WIDTH,
    );

    assert!(booklet.logical_pages().is_empty());
    assert_eq!(booklet.total_spreads(), 1);
    assert_eq!(booklet.current_spread(), 0);
    assert!(!booklet.next());
    assert!(!booklet.previous());
    assert_eq!(booklet.render_current().pages, vec![PageContent::Blank]);

    booklet.resize(MOBILE_WIDTH);
    assert_eq!(booklet.total_spreads(), 1);
    assert_eq!(booklet.current_spread(), 0);
}

#[test]
fn test_show_page() {
    let mut booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        MOBILE_WIDTH,
    );

    assert!(booklet.show_page(LogicalPage::Sponsors));
    assert_eq!(booklet.current_spread(), 3);

    booklet.resize(DESKTOP_WIDTH);
    assert!(booklet.show_page(LogicalPage::DayAgenda(Day(2))));
    assert_eq!(booklet.current_spread(), 0);

    // Day 1 is drawn as the Welcome page, never as an agenda page
    assert!(!booklet.show_page(LogicalPage::DayAgenda(Day(1))));
    assert_eq!(booklet.current_spread(), 0);
}

#[test]
fn test_replace_repository_clamps() {
    let mut booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        MOBILE_WIDTH,
    );
    booklet.show_page(LogicalPage::Sponsors);
    assert_eq!(booklet.current_spread(), 3);

    let smaller = StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2)],
        sessions: vec![Session::new("a", "Opening Ceremony", "09:00", "10:00", Day(2))],
        sponsors: vec![],
    })
    .unwrap();
    booklet.replace_repository(smaller);

    assert_eq!(booklet.total_spreads(), 2);
    assert_eq!(booklet.current_spread(), 1);
}

#[test]
fn test_custom_breakpoint_and_welcome_day() {
    let options = BookletOptions {
        breakpoint_px: 1000.0,
        welcome_day: Day(2),
        ..Default::default()
    };
    let booklet = Booklet::new(StaticRepository::summit(), options, 900.0);

    assert!(booklet.layout().is_mobile);
    // Day 1 has sessions, day 2 becomes the Welcome page
    assert_eq!(
        booklet.logical_pages(),
        &[
            LogicalPage::DayAgenda(Day(1)),
            LogicalPage::Welcome,
            LogicalPage::DayAgenda(Day(3)),
            LogicalPage::Sponsors,
        ]
    );
}

#[test]
fn test_welcome_day_without_sessions_keeps_welcome_page() {
    let repo = StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2), Day(3)],
        sessions: vec![
            Session::new("a", "Exhibition Set Up", "08:00", "09:00", Day(1)),
            Session::new("b", "Keynote Address", "09:00", "10:00", Day(3)),
        ],
        sponsors: vec![Sponsor::new("Skyline Airways", SponsorTier::Gold, "skyline.png")],
    })
    .unwrap();
    let options = BookletOptions {
        welcome_day: Day(2),
        ..Default::default()
    };
    let booklet = Booklet::new(repo, options, DESKTOP_WIDTH);

    assert_eq!(
        booklet.logical_pages(),
        &[
            LogicalPage::DayAgenda(Day(1)),
            LogicalPage::Welcome,
            LogicalPage::DayAgenda(Day(3)),
            LogicalPage::Sponsors,
        ]
    );
    assert_eq!(page_kinds(&booklet.render_current()), ["Day 1 Agenda", "Welcome"]);
}

#[test]
fn test_undeclared_welcome_day_has_no_welcome_page() {
    let options = BookletOptions {
        welcome_day: Day(7),
        ..Default::default()
    };
    let booklet = Booklet::new(StaticRepository::summit(), options, DESKTOP_WIDTH);

    assert!(!booklet.logical_pages().contains(&LogicalPage::Welcome));
}

#[test]
fn test_render_spread_past_end_is_blank() {
    let booklet = Booklet::new(
        StaticRepository::summit(),
        BookletOptions::default(),
        DESKTOP_WIDTH,
    );
    assert_eq!(booklet.render_spread(5).pages, vec![PageContent::Blank]);
}
