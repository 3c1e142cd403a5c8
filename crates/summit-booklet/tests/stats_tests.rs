use summit_booklet::*;

#[test]
fn test_stats_summit_agenda() {
    let repo = StaticRepository::summit();
    let stats = calculate_statistics(&repo, &BookletOptions::default());

    assert_eq!(stats.logical_pages, 4);
    assert_eq!(stats.mobile_spreads, 4);
    assert_eq!(stats.desktop_spreads, 2);
    assert_eq!(
        stats.sessions_per_day,
        vec![(Day(1), 2), (Day(2), 6), (Day(3), 5)]
    );
    // Set up, registration, tea break, lunch, breakfast, dinner
    assert_eq!(stats.special_sessions, 6);
    assert_eq!(
        stats.sponsors_per_tier,
        vec![
            (SponsorTier::Platinum, 1),
            (SponsorTier::Gold, 2),
            (SponsorTier::Silver, 1),
        ]
    );
}

#[test]
fn test_stats_no_data() {
    let stats = calculate_statistics(&StaticRepository::empty(), &BookletOptions::default());

    assert_eq!(stats.logical_pages, 0);
    // One placeholder spread either way
    assert_eq!(stats.mobile_spreads, 1);
    assert_eq!(stats.desktop_spreads, 1);
    assert!(stats.sessions_per_day.is_empty());
    assert_eq!(stats.special_sessions, 0);
    assert!(stats.sponsors_per_tier.is_empty());
}

#[test]
fn test_stats_odd_page_count() {
    let repo = StaticRepository::new(AgendaData {
        event_days: vec![Day(1), Day(2)],
        sessions: vec![Session::new("a", "Opening Ceremony", "09:00", "10:00", Day(2))],
        sponsors: vec![Sponsor::new("Skyline", SponsorTier::Partner, "s.png")],
    })
    .unwrap();

    let stats = calculate_statistics(&repo, &BookletOptions::default());

    // Welcome, Day 2, Sponsors
    assert_eq!(stats.logical_pages, 3);
    assert_eq!(stats.mobile_spreads, 3);
    assert_eq!(stats.desktop_spreads, 2);
    assert_eq!(stats.sessions_per_day, vec![(Day(1), 0), (Day(2), 1)]);
    assert_eq!(stats.sponsors_per_tier, vec![(SponsorTier::Partner, 1)]);
}
