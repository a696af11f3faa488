//! Household list widget for ratatui
//!
//! Renders one row per household member with its remove affordance.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::roster::Household;

/// Widget for rendering the household list. The row under the cursor is
/// highlighted when the list has focus.
pub struct MemberListWidget<'a> {
    household: &'a Household,
    cursor: usize,
    focused: bool,
}

impl<'a> MemberListWidget<'a> {
    pub fn new(household: &'a Household) -> Self {
        Self {
            household,
            cursor: 0,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for MemberListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::Rgb(100, 100, 120)
        };
        let block = Block::default()
            .title(format!("Household ({})", self.household.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.household.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No members yet.",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        for (i, entry) in self.household.entries().iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }

            let member = &entry.member;
            let is_cursor = self.focused && i == self.cursor;

            let mut row_style = Style::default().fg(Color::White);
            if is_cursor {
                row_style = row_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            let text = format!(
                "{} {} {}",
                member.relationship,
                member.age,
                member.smoker_label()
            );
            buf.set_string(inner.x, y, &text, row_style);

            // Remove affordance, right-aligned
            let affordance = "[x]";
            let ax = inner.x + inner.width.saturating_sub(affordance.len() as u16);
            let affordance_style = if is_cursor {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            buf.set_string(ax, y, affordance, affordance_style);
        }
    }
}
