//! Application state for the TUI

use crate::models::Property;
use crate::pager::Pager;

use super::theme::ThemeVariant;

#[cfg(test)]
mod tests;

/// Transient message shown in the footer
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Carousel application state
///
/// The catalog and the `authenticated` flag are supplied at construction;
/// both are fixed for the lifetime of the session. Everything mutable lives
/// in the pager, the card focus, and the overlay flags.
pub struct App {
    pub running: bool,

    /// Listings in display order, fixed for the session
    pub properties: Vec<Property>,
    pub pager: Pager,

    /// Focused card within the visible page (0-based)
    pub focused_card: usize,

    /// External authentication signal; decides which call-to-action
    /// buttons the cards show
    pub authenticated: bool,

    // UI state
    pub show_help: bool,
    pub show_details_popup: bool,
    pub status_message: Option<StatusMessage>,
    pub theme_variant: ThemeVariant,

    // Mouse interaction state, written by the renderer each frame
    pub last_dots_area: Option<(u16, u16, u16, u16)>, // (x, y, width, height)
    pub last_card_areas: Vec<(u16, u16, u16, u16)>,   // one per visible card
    pub last_left_arrow_area: Option<(u16, u16, u16, u16)>,
    pub last_right_arrow_area: Option<(u16, u16, u16, u16)>,
}

impl App {
    pub fn new(
        properties: Vec<Property>,
        page_size: usize,
        authenticated: bool,
        theme_variant: ThemeVariant,
    ) -> Self {
        let pager = Pager::new(properties.len(), page_size);
        Self {
            running: true,
            properties,
            pager,
            focused_card: 0,
            authenticated,
            show_help: false,
            show_details_popup: false,
            status_message: None,
            theme_variant,
            last_dots_area: None,
            last_card_areas: Vec::new(),
            last_left_arrow_area: None,
            last_right_arrow_area: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Listings on the page currently on screen
    pub fn visible_properties(&self) -> &[Property] {
        self.pager.visible(&self.properties)
    }

    /// The property under the card focus, if any
    pub fn focused_property(&self) -> Option<&Property> {
        self.visible_properties().get(self.focused_card)
    }

    // ---- Page navigation ----

    pub fn next_page(&mut self) {
        self.pager.next();
        self.reset_focus();
    }

    pub fn prev_page(&mut self) {
        self.pager.previous();
        self.reset_focus();
    }

    pub fn go_to_page(&mut self, page: usize) {
        let before = self.pager.current_page();
        self.pager.go_to(page);
        if self.pager.current_page() != before {
            self.reset_focus();
        }
    }

    pub fn first_page(&mut self) {
        self.pager.first();
        self.reset_focus();
    }

    pub fn last_page(&mut self) {
        self.pager.last();
        self.reset_focus();
    }

    fn reset_focus(&mut self) {
        self.focused_card = 0;
    }

    // ---- Card focus within the page ----

    pub fn focus_next_card(&mut self) {
        let count = self.visible_properties().len();
        if count > 0 {
            self.focused_card = (self.focused_card + 1) % count;
        }
    }

    pub fn focus_prev_card(&mut self) {
        let count = self.visible_properties().len();
        if count > 0 {
            self.focused_card = (self.focused_card + count - 1) % count;
        }
    }

    pub fn focus_card(&mut self, index: usize) {
        if index < self.visible_properties().len() {
            self.focused_card = index;
        }
    }

    // ---- Call-to-action ----

    /// Book the focused property (signed-in viewers only)
    pub fn request_booking(&mut self) {
        if !self.authenticated {
            self.set_status("Sign in to book a plot".to_string(), true);
            return;
        }
        if let Some(prop) = self.focused_property() {
            let name = prop.name.clone();
            self.set_status(format!("Booking enquiry recorded for {name}"), false);
        }
    }

    /// View full details for the focused property (signed-in viewers only)
    pub fn request_view(&mut self) {
        if !self.authenticated {
            self.set_status("Sign in to view full details".to_string(), true);
            return;
        }
        if self.focused_property().is_some() {
            self.show_details_popup = true;
        }
    }

    /// Buy enquiry for the focused property (guest call-to-action)
    pub fn request_buy(&mut self) {
        if self.authenticated {
            // Signed-in viewers book instead of buying blind
            self.request_booking();
            return;
        }
        if let Some(prop) = self.focused_property() {
            let name = prop.name.clone();
            self.set_status(format!("Purchase enquiry recorded for {name}"), false);
        }
    }

    // ---- Overlays ----

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_details_popup(&mut self) {
        if self.focused_property().is_some() {
            self.show_details_popup = !self.show_details_popup;
        }
    }

    pub fn close_details_popup(&mut self) {
        self.show_details_popup = false;
    }

    // ---- Status line ----

    pub fn set_status(&mut self, text: String, is_error: bool) {
        self.status_message = Some(StatusMessage { text, is_error });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ---- Theme ----

    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        let name = self.theme_variant.theme().name;
        self.set_status(format!("Theme: {name}"), false);
    }

    // ---- Mouse hit-testing ----

    /// Map a click to a dot index using the area stored by the renderer.
    /// Dots are drawn as "● " pairs, two columns each.
    pub fn dot_at(&self, x: u16, y: u16) -> Option<usize> {
        let (dx, dy, dw, dh) = self.last_dots_area?;
        if y < dy || y >= dy + dh || x < dx || x >= dx + dw {
            return None;
        }
        let index = ((x - dx) / 2) as usize;
        (index < self.pager.total_pages()).then_some(index)
    }

    /// Map a click to a visible card index
    pub fn card_at(&self, x: u16, y: u16) -> Option<usize> {
        self.last_card_areas
            .iter()
            .position(|&(cx, cy, cw, ch)| x >= cx && x < cx + cw && y >= cy && y < cy + ch)
    }

    pub fn is_in_left_arrow(&self, x: u16, y: u16) -> bool {
        in_area(self.last_left_arrow_area, x, y)
    }

    pub fn is_in_right_arrow(&self, x: u16, y: u16) -> bool {
        in_area(self.last_right_arrow_area, x, y)
    }
}

fn in_area(area: Option<(u16, u16, u16, u16)>, x: u16, y: u16) -> bool {
    match area {
        Some((ax, ay, aw, ah)) => x >= ax && x < ax + aw && y >= ay && y < ay + ah,
        None => false,
    }
}
