//! Main UI Application
//!
//! Coordinates rendering and input handling for the roster form. The app
//! translates key events into roster operations; all household truth lives
//! in the `Roster` it is handed.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::roster::Roster;
use crate::ui::form::{Focus, FormState};
use crate::ui::widgets::MemberListWidget;

/// Main UI application
pub struct App {
    /// Raw state of the three add-member controls
    form: FormState,
    /// Which zone receives key input
    focus: Focus,
    /// Selected row in the household list
    member_cursor: usize,
    /// Blocking validation notice; while set, any key dismisses it and
    /// nothing else is processed
    notice: Option<String>,
    /// Serialized output; the panel is visible while this is set
    json_output: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::Age,
            member_cursor: 0,
            notice: None,
            json_output: None,
        }
    }

    /// Handle keyboard input, returns true if the app should quit
    pub fn handle_input(&mut self, key: KeyEvent, roster: &mut Roster) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        // The notice is modal: any key dismisses it, nothing else happens
        if self.notice.is_some() {
            self.notice = None;
            return Ok(false);
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit(roster);
            return Ok(false);
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => self.add_member(roster),
            KeyCode::Esc => {
                if self.json_output.is_some() {
                    self.json_output = None;
                } else {
                    return Ok(true);
                }
            }
            _ => self.handle_focused_input(key, roster),
        }
        Ok(false)
    }

    /// Keys that only apply to the focused zone
    fn handle_focused_input(&mut self, key: KeyEvent, roster: &mut Roster) {
        match self.focus {
            Focus::Age => match key.code {
                KeyCode::Char(c) => self.form.push_age_char(c),
                KeyCode::Backspace => self.form.backspace_age(),
                _ => {}
            },
            Focus::Relationship => match key.code {
                KeyCode::Left | KeyCode::Up => self.form.prev_relationship(),
                KeyCode::Right | KeyCode::Down => self.form.next_relationship(),
                _ => {}
            },
            Focus::Smoker => {
                if key.code == KeyCode::Char(' ') {
                    self.form.toggle_smoker();
                }
            }
            Focus::Members => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.member_cursor > 0 {
                        self.member_cursor -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.member_cursor + 1 < roster.household().len() {
                        self.member_cursor += 1;
                    }
                }
                KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                    self.remove_selected(roster);
                }
                _ => {}
            },
        }
    }

    /// Read the three controls and try to add a member. The controls keep
    /// their values after a successful add.
    fn add_member(&mut self, roster: &mut Roster) {
        let result = roster.add_member(
            self.form.age(),
            self.form.relationship(),
            self.form.smoker(),
        );
        if let Err(e) = result {
            self.notice = Some(e.to_string());
        }
    }

    /// Translate the list cursor into a stable entry id and remove it.
    fn remove_selected(&mut self, roster: &mut Roster) {
        let id = match roster.household().entries().get(self.member_cursor) {
            Some(entry) => entry.id,
            None => return,
        };
        roster.remove_member(id);
        self.member_cursor = self
            .member_cursor
            .min(roster.household().len().saturating_sub(1));
    }

    /// Serialize the household and reveal/update the output panel.
    fn submit(&mut self, roster: &mut Roster) {
        match roster.to_json() {
            Ok(json) => self.json_output = Some(json),
            Err(e) => {
                log::error!("Serialization failed: {}", e);
                self.notice = Some(format!("Serialization failed: {}", e));
            }
        }
    }

    /// Render the current app state
    pub fn render(&self, frame: &mut Frame, roster: &Roster) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        let mut constraints = vec![Constraint::Length(5), Constraint::Min(4)];
        if self.json_output.is_some() {
            constraints.push(Constraint::Percentage(40));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        self.render_form(frame, chunks[0]);

        let list = MemberListWidget::new(roster.household())
            .cursor(self.member_cursor)
            .focused(self.focus == Focus::Members);
        frame.render_widget(list, chunks[1]);

        if let Some(json) = &self.json_output {
            self.render_json_panel(frame, chunks[2], json);
        }
        self.render_footer(frame, chunks[chunks.len() - 1]);

        if let Some(notice) = &self.notice {
            self.render_notice(frame, notice);
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let label_style = Style::default().fg(Color::Gray);
        let value_style = |focused: bool| {
            if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };

        let age_focused = self.focus == Focus::Age;
        let age_value = if age_focused {
            format!("{}_", self.form.age())
        } else {
            self.form.age().to_string()
        };
        let smoker_box = if self.form.smoker() { "[x]" } else { "[ ]" };

        let lines = vec![
            Line::from(vec![
                Span::styled("Age:          ", label_style),
                Span::styled(age_value, value_style(age_focused)),
            ]),
            Line::from(vec![
                Span::styled("Relationship: ", label_style),
                Span::styled(
                    format!("< {} >", self.form.relationship_label()),
                    value_style(self.focus == Focus::Relationship),
                ),
            ]),
            Line::from(vec![
                Span::styled("Smoker:       ", label_style),
                Span::styled(smoker_box, value_style(self.focus == Focus::Smoker)),
            ]),
        ];

        let block = Block::default()
            .title("Add a member")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 100, 120)));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_json_panel(&self, frame: &mut Frame, area: Rect, json: &str) {
        let block = Block::default()
            .title("Serialized household")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 100, 120)));
        let para = Paragraph::new(json)
            .style(Style::default().fg(Color::Green))
            .block(block);
        frame.render_widget(para, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::styled(" Next field  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(" Add  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Ctrl+S]", Style::default().fg(Color::Yellow)),
            Span::styled(" Serialize  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[x]", Style::default().fg(Color::Yellow)),
            Span::styled(" Remove  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(help), area);
    }

    fn render_notice(&self, frame: &mut Frame, message: &str) {
        let popup_area = centered_rect(50, 20, frame.area());
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Notice ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Any key] Dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Center a popup rect inside `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Relationship;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Type out a valid member: age 30, relationship parent, smoker off.
    fn fill_valid_member(app: &mut App, roster: &mut Roster) {
        app.handle_input(key(KeyCode::Char('3')), roster).unwrap();
        app.handle_input(key(KeyCode::Char('0')), roster).unwrap();
        app.handle_input(key(KeyCode::Tab), roster).unwrap();
        // placeholder -> self -> spouse -> child -> parent
        for _ in 0..4 {
            app.handle_input(key(KeyCode::Right), roster).unwrap();
        }
    }

    #[test]
    fn test_add_member_through_keys() {
        let mut app = App::new();
        let mut roster = Roster::new();

        fill_valid_member(&mut app, &mut roster);
        app.handle_input(key(KeyCode::Enter), &mut roster).unwrap();

        assert_eq!(roster.household().len(), 1);
        let member = roster.household().members().next().unwrap();
        assert_eq!(member.relationship, Relationship::Parent);
        assert_eq!(member.age, 30);
        assert!(!member.smoker);
    }

    #[test]
    fn test_invalid_add_opens_modal_notice() {
        let mut app = App::new();
        let mut roster = Roster::new();

        // Empty age fails first
        app.handle_input(key(KeyCode::Enter), &mut roster).unwrap();
        assert_eq!(app.notice.as_deref(), Some("Please enter in a valid age."));
        assert_eq!(roster.household().len(), 0);

        // The next key only dismisses the notice, it is not typed
        app.handle_input(key(KeyCode::Char('5')), &mut roster).unwrap();
        assert!(app.notice.is_none());
        assert_eq!(app.form.age(), "");
    }

    #[test]
    fn test_missing_relationship_notice() {
        let mut app = App::new();
        let mut roster = Roster::new();

        app.handle_input(key(KeyCode::Char('3')), &mut roster).unwrap();
        app.handle_input(key(KeyCode::Enter), &mut roster).unwrap();
        assert_eq!(
            app.notice.as_deref(),
            Some("Please select a valid relationship.")
        );
    }

    #[test]
    fn test_inputs_survive_successful_add() {
        let mut app = App::new();
        let mut roster = Roster::new();

        fill_valid_member(&mut app, &mut roster);
        app.handle_input(key(KeyCode::Enter), &mut roster).unwrap();

        assert_eq!(app.form.age(), "30");
        assert_eq!(app.form.relationship(), Some(Relationship::Parent));
    }

    #[test]
    fn test_remove_selected_row() {
        let mut app = App::new();
        let mut roster = Roster::new();
        roster
            .add_member("30", Some(Relationship::Parent), false)
            .unwrap();
        roster
            .add_member("5", Some(Relationship::Child), false)
            .unwrap();

        // Tab to the members list, cursor starts on the first row
        app.handle_input(key(KeyCode::Tab), &mut roster).unwrap();
        app.handle_input(key(KeyCode::Tab), &mut roster).unwrap();
        app.handle_input(key(KeyCode::Tab), &mut roster).unwrap();
        assert_eq!(app.focus, Focus::Members);

        app.handle_input(key(KeyCode::Char('x')), &mut roster).unwrap();
        assert_eq!(roster.household().len(), 1);
        assert_eq!(
            roster.household().members().next().unwrap().relationship,
            Relationship::Child
        );
    }

    #[test]
    fn test_submit_reveals_panel_and_esc_hides_then_quits() {
        let mut app = App::new();
        let mut roster = Roster::new();

        app.handle_input(ctrl('s'), &mut roster).unwrap();
        assert!(app.json_output.is_some());

        let quit = app.handle_input(key(KeyCode::Esc), &mut roster).unwrap();
        assert!(!quit);
        assert!(app.json_output.is_none());

        let quit = app.handle_input(key(KeyCode::Esc), &mut roster).unwrap();
        assert!(quit);
    }

    #[test]
    fn test_ctrl_q_quits_anywhere() {
        let mut app = App::new();
        let mut roster = Roster::new();
        assert!(app.handle_input(ctrl('q'), &mut roster).unwrap());
    }
}
