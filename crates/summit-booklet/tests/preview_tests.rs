use summit_booklet::*;

fn summit_booklet(width: f32) -> Booklet<StaticRepository> {
    Booklet::new(StaticRepository::summit(), BookletOptions::default(), width)
}

#[test]
fn test_spread_text_desktop_first_spread() {
    let booklet = summit_booklet(1280.0);
    let text = spread_to_text(&booklet.render_current());

    assert!(text.starts_with("=== Spread 1 of 2 ===\n"));
    assert!(text.contains("--- Welcome ---"));
    assert!(text.contains("Aviation Leadership Summit"));
    assert!(text.contains("--- Day 2 Agenda ---"));
    assert!(!text.contains("--- Day 3 Agenda ---"));

    // Welcome page hides day 1 set-up and registration slots
    assert!(!text.contains("Exhibition Set Up"));
    assert!(!text.contains("Delegate Registration"));
}

#[test]
fn test_spread_text_speaker_labels() {
    let booklet = summit_booklet(1280.0);
    let text = spread_to_text(&booklet.render_current());

    let opening = text.find("Opening Ceremony").unwrap();
    let hubs = text.find("Panel Discussion – Building Aviation Hubs").unwrap();

    let speakers = text[opening..].find("Speakers:").unwrap() + opening;
    let panelists = text[hubs..].find("Panelists:").unwrap() + hubs;
    assert!(speakers > opening && speakers < hubs);
    assert!(panelists > hubs);
}

#[test]
fn test_spread_text_special_entries_are_padded() {
    let booklet = summit_booklet(1280.0);
    let text = spread_to_text(&booklet.render_current());

    // Blank line before and after the tea break entry
    assert!(text.contains("\n\n10:30 - 11:00  Tea & Networking Break\n"));
    assert!(text.contains("Tea & Networking Break\n               Main Plenary Hall\n\n"));
}

#[test]
fn test_spread_text_sponsor_names_without_logos() {
    let mut booklet = summit_booklet(1280.0);
    booklet.next();
    let text = spread_to_text(&booklet.render_current());

    assert!(text.contains("--- Our Sponsors ---"));
    assert!(text.contains("Platinum  Skyline Airways"));
    assert!(text.contains("Silver    Meridian Ground Services"));
    assert!(!text.contains("[logo"));
}

#[test]
fn test_generate_preview_limits_spreads() {
    let booklet = summit_booklet(390.0);

    let preview = generate_preview(&booklet, 2);
    assert!(preview.contains("=== Spread 1 of 4 ==="));
    assert!(preview.contains("=== Spread 2 of 4 ==="));
    assert!(!preview.contains("=== Spread 3 of 4 ==="));

    let full = generate_preview(&booklet, 10);
    assert!(full.contains("=== Spread 4 of 4 ==="));
}

#[test]
fn test_preview_empty_booklet() {
    let booklet = Booklet::new(
        StaticRepository::empty(),
        BookletOptions::default(),
        1280.0,
    );

    let preview = generate_preview(&booklet, 5);
    assert_eq!(preview, "=== Spread 1 of 1 ===\n\n--- (blank) ---\n");
}
