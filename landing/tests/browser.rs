//! In-browser checks for the web-sys side of navigation.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use saini_landing::config::ScrollConfig;
use saini_landing::nav::{NavController, NavError, SectionId, Viewport};
use saini_landing::sections::navigate_to;
use saini_landing::viewport::{self, BrowserViewport};
use wasm_bindgen_test::*;
use web_sys::Event;

wasm_bindgen_test_configure!(run_in_browser);

fn dispatch_scroll() {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

fn mount_section(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let section = document.create_element("section").unwrap();
    section.set_id(id);
    document.body().unwrap().append_child(&section).unwrap();
    section
}

#[wasm_bindgen_test]
fn scroll_into_view_finds_mounted_section() {
    let section = mount_section("contact");
    assert!(BrowserViewport.scroll_into_view("contact"));
    section.remove();
}

#[wasm_bindgen_test]
fn scroll_into_view_reports_missing_section() {
    assert!(!BrowserViewport.scroll_into_view("nonexistent"));
}

#[wasm_bindgen_test]
fn navigating_closes_mobile_menu() {
    let section = mount_section("services");
    let mut nav = NavController::new(ScrollConfig::default());
    nav.toggle_mobile_menu();

    assert_eq!(nav.scroll_to_section(&BrowserViewport, "services"), Ok(()));
    assert!(!nav.is_mobile_menu_open());
    section.remove();
}

#[wasm_bindgen_test]
fn navigating_to_missing_section_keeps_menu_open() {
    let mut nav = NavController::new(ScrollConfig::default());
    nav.toggle_mobile_menu();

    assert_eq!(
        nav.scroll_to_section(&BrowserViewport, "nonexistent"),
        Err(NavError::SectionNotFound("nonexistent".to_string()))
    );
    assert!(nav.is_mobile_menu_open());
}

#[wasm_bindgen_test]
fn scroll_offset_is_never_negative() {
    assert!(viewport::scroll_offset() >= 0.0);
}

#[wasm_bindgen_test]
fn current_year_is_plausible() {
    assert!(viewport::current_year() >= 2024);
}

#[wasm_bindgen_test]
fn scroll_listener_lives_as_long_as_its_owner() {
    let calls = Rc::new(Cell::new(0usize));
    let owner = Owner::new();
    owner.with(|| {
        let calls = Rc::clone(&calls);
        viewport::subscribe_scroll(move |_| calls.set(calls.get() + 1));
    });
    // sampled once at subscription
    assert_eq!(calls.get(), 1);

    dispatch_scroll();
    assert_eq!(calls.get(), 2);

    owner.cleanup();
    dispatch_scroll();
    assert_eq!(calls.get(), 2);
}

#[wasm_bindgen_test]
fn navigate_to_missing_anchor_leaves_state_alone() {
    let owner = Owner::new();
    owner.with(|| {
        let nav = RwSignal::new(NavController::new(ScrollConfig::default()));
        nav.update(|n| n.toggle_mobile_menu());
        let before = nav.get_untracked();

        // no element with this id is mounted by any test
        navigate_to(nav, SectionId::Testimonials);

        assert_eq!(nav.get_untracked(), before);
        assert!(nav.with_untracked(|n| n.is_mobile_menu_open()));
    });
}

#[wasm_bindgen_test]
fn navigate_to_mounted_anchor_closes_menu() {
    let section = mount_section("about");
    let owner = Owner::new();
    owner.with(|| {
        let nav = RwSignal::new(NavController::new(ScrollConfig::default()));
        nav.update(|n| n.toggle_mobile_menu());

        navigate_to(nav, SectionId::About);

        assert!(!nav.with_untracked(|n| n.is_mobile_menu_open()));
    });
    section.remove();
}

#[wasm_bindgen_test]
fn scroll_to_top_keeps_offset_at_origin() {
    BrowserViewport.scroll_to_top();
    assert!(viewport::scroll_offset() >= 0.0);
}

#[wasm_bindgen_test]
fn event_target_name_reads_name_attribute() {
    let document = web_sys::window().unwrap().document().unwrap();
    let input = document.create_element("input").unwrap();
    input.set_attribute("name", "email").unwrap();
    document.body().unwrap().append_child(&input).unwrap();

    let ev = Event::new("input").unwrap();
    input.dispatch_event(&ev).unwrap();
    assert_eq!(viewport::event_target_name(&ev), Some("email".to_string()));

    let unnamed = Event::new("input").unwrap();
    document.body().unwrap().dispatch_event(&unnamed).unwrap();
    assert_eq!(viewport::event_target_name(&unnamed), None);

    input.remove();
}
