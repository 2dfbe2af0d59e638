//! Tests for the TUI application module

use super::*;
use crate::catalog::seed_properties;
use crate::models::{Address, Property};

fn listing(name: &str) -> Property {
    Property {
        name: name.to_string(),
        rera_number: format!("RERA-{name}"),
        address: Address {
            city: "Jaipur".to_string(),
            area: "Tonk Road".to_string(),
        },
        specification: "Test Layout".to_string(),
        rate: 2500,
        total_plots: 50,
        description: "Test listing".to_string(),
        map_url: String::new(),
    }
}

fn listings(count: usize) -> Vec<Property> {
    (0..count).map(|i| listing(&format!("P{i}"))).collect()
}

fn app_with(count: usize) -> App {
    App::new(listings(count), 3, false, ThemeVariant::Mocha)
}

#[test]
fn test_seed_catalog_pages() {
    // Five seed listings at three per page: two pages, ragged last page
    let app = App::new(seed_properties(), 3, false, ThemeVariant::Mocha);
    assert_eq!(app.pager.total_pages(), 2);
    assert_eq!(app.visible_properties().len(), 3);
}

#[test]
fn test_page_navigation_wraps() {
    let mut app = app_with(7); // pages 0..=2

    app.next_page();
    app.next_page();
    assert_eq!(app.pager.current_page(), 2);
    assert_eq!(app.visible_properties().len(), 1);

    app.next_page();
    assert_eq!(app.pager.current_page(), 0);

    app.prev_page();
    assert_eq!(app.pager.current_page(), 2);
}

#[test]
fn test_page_change_resets_card_focus() {
    let mut app = app_with(7);
    app.focus_next_card();
    app.focus_next_card();
    assert_eq!(app.focused_card, 2);

    app.next_page();
    assert_eq!(app.focused_card, 0);
}

#[test]
fn test_go_to_page_out_of_range_keeps_state() {
    let mut app = app_with(7);
    app.go_to_page(1);
    app.focus_next_card();

    app.go_to_page(9);
    assert_eq!(app.pager.current_page(), 1);
    // Refused jump must not disturb the focus either
    assert_eq!(app.focused_card, 1);
}

#[test]
fn test_card_focus_wraps_within_page() {
    let mut app = app_with(7);
    app.go_to_page(2); // single card
    app.focus_next_card();
    assert_eq!(app.focused_card, 0);

    app.first_page();
    app.focus_prev_card();
    assert_eq!(app.focused_card, 2);
    assert_eq!(app.focused_property().unwrap().name, "P2");
}

#[test]
fn test_empty_catalog_is_inert() {
    let mut app = app_with(0);
    assert!(app.visible_properties().is_empty());
    assert!(app.focused_property().is_none());

    app.next_page();
    app.prev_page();
    app.go_to_page(0);
    app.focus_next_card();
    assert_eq!(app.pager.current_page(), 0);
    assert_eq!(app.focused_card, 0);

    // No card to show details for
    app.toggle_details_popup();
    assert!(!app.show_details_popup);
}

#[test]
fn test_booking_requires_authentication() {
    let mut app = app_with(3);
    app.request_booking();
    let status = app.status_message.as_ref().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("Sign in"));

    let mut signed_in = App::new(listings(3), 3, true, ThemeVariant::Mocha);
    signed_in.request_booking();
    let status = signed_in.status_message.as_ref().unwrap();
    assert!(!status.is_error);
    assert!(status.text.contains("P0"));
}

#[test]
fn test_buy_is_the_guest_action() {
    let mut app = app_with(3);
    app.focus_next_card();
    app.request_buy();
    let status = app.status_message.as_ref().unwrap();
    assert!(!status.is_error);
    assert!(status.text.contains("Purchase enquiry"));
    assert!(status.text.contains("P1"));
}

#[test]
fn test_view_opens_details_when_signed_in() {
    let mut app = App::new(listings(3), 3, true, ThemeVariant::Mocha);
    app.request_view();
    assert!(app.show_details_popup);

    app.close_details_popup();
    assert!(!app.show_details_popup);

    let mut guest = app_with(3);
    guest.request_view();
    assert!(!guest.show_details_popup);
    assert!(guest.status_message.as_ref().unwrap().is_error);
}

#[test]
fn test_status_set_and_clear() {
    let mut app = app_with(3);
    app.set_status("hello".to_string(), false);
    assert!(app.status_message.is_some());
    app.clear_status();
    assert!(app.status_message.is_none());
}

#[test]
fn test_theme_cycle_updates_status() {
    let mut app = app_with(3);
    app.cycle_theme();
    assert_eq!(app.theme_variant, ThemeVariant::Nord);
    assert!(app.status_message.as_ref().unwrap().text.contains("Nord"));
}

#[test]
fn test_dot_hit_testing() {
    let mut app = app_with(7); // 3 pages -> dots occupy 6 columns
    app.last_dots_area = Some((10, 20, 6, 1));

    assert_eq!(app.dot_at(10, 20), Some(0));
    assert_eq!(app.dot_at(11, 20), Some(0));
    assert_eq!(app.dot_at(12, 20), Some(1));
    assert_eq!(app.dot_at(15, 20), Some(2));
    assert_eq!(app.dot_at(9, 20), None);
    assert_eq!(app.dot_at(10, 21), None);
}

#[test]
fn test_card_and_arrow_hit_testing() {
    let mut app = app_with(7);
    app.last_card_areas = vec![(5, 5, 20, 10), (26, 5, 20, 10)];
    app.last_left_arrow_area = Some((0, 5, 3, 10));

    assert_eq!(app.card_at(6, 6), Some(0));
    assert_eq!(app.card_at(30, 14), Some(1));
    assert_eq!(app.card_at(50, 6), None);
    assert!(app.is_in_left_arrow(1, 7));
    assert!(!app.is_in_right_arrow(1, 7));
}
