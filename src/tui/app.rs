//! TUI application state.
//!
//! `App` owns the catalogue view model, the site content, the per-view
//! input state, and the pending-submission handoff slot the runner drains.
//! All keyboard handling lives here so it can be tested without a
//! terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input::TextInput;
use crate::catalog::{CatalogView, Tool};
use crate::content::{Announcement, Contributor};
use crate::submit::{ContactMessage, SubmissionPayload, ToolProposal};

/// Active view in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Browse,
    About,
    Contribute,
    Contact,
}

impl ActiveView {
    /// Cycle to the next view
    pub fn next(self) -> Self {
        match self {
            Self::Browse => Self::About,
            Self::About => Self::Contribute,
            Self::Contribute => Self::Contact,
            Self::Contact => Self::Browse,
        }
    }

    /// Cycle to the previous view
    pub fn prev(self) -> Self {
        match self {
            Self::Browse => Self::Contact,
            Self::About => Self::Browse,
            Self::Contribute => Self::About,
            Self::Contact => Self::Contribute,
        }
    }

    /// Get the view name for display
    pub fn name(self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::About => "About",
            Self::Contribute => "Contribute",
            Self::Contact => "Contact",
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Typing in the search box
    Search,
    /// Typing in a form field
    Form,
}

/// Inline status line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Contact form fields.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: TextInput,
    pub email: TextInput,
    pub message: TextInput,
    pub focus: usize,
}

impl ContactForm {
    pub const FIELDS: usize = 3;

    pub fn labels() -> [&'static str; Self::FIELDS] {
        ["Name", "Email", "Message"]
    }

    pub fn fields(&self) -> [&TextInput; Self::FIELDS] {
        [&self.name, &self.email, &self.message]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }

    pub fn active_field_mut(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage::new(
            self.name.content().trim(),
            self.email.content().trim(),
            self.message.content().trim(),
        )
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = 0;
    }
}

/// Tool proposal form fields.
#[derive(Debug, Clone, Default)]
pub struct ProposalForm {
    pub name: TextInput,
    pub link: TextInput,
    pub description: TextInput,
    pub tags: TextInput,
    pub focus: usize,
}

impl ProposalForm {
    pub const FIELDS: usize = 4;

    pub fn labels() -> [&'static str; Self::FIELDS] {
        ["Tool name", "Link", "Description", "Tags (comma-separated)"]
    }

    pub fn fields(&self) -> [&TextInput; Self::FIELDS] {
        [&self.name, &self.link, &self.description, &self.tags]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELDS - 1) % Self::FIELDS;
    }

    pub fn active_field_mut(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.link,
            2 => &mut self.description,
            _ => &mut self.tags,
        }
    }

    /// Name and link carry the listing; the rest is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.link.is_empty()
    }

    pub fn to_proposal(&self) -> ToolProposal {
        let mut proposal = ToolProposal::new(self.name.content().trim(), self.link.content().trim());
        proposal.description = self.description.content().trim().to_string();
        proposal.tags = self
            .tags
            .content()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        proposal
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.link.clear();
        self.description.clear();
        self.tags.clear();
        self.focus = 0;
    }
}

/// Main TUI application state.
pub struct App {
    /// Catalogue view model
    pub view: CatalogView,
    /// Announcement banner config
    pub announcement: Announcement,
    /// Maintainer roster for the About view
    pub contributors: Vec<Contributor>,

    /// Current active view
    pub active_view: ActiveView,
    /// Current interaction mode
    pub mode: InteractionMode,

    // Browse state
    /// Search box contents (mirrored into the view model on each edit)
    pub search_input: TextInput,
    /// Whether the tag bar is open
    pub show_tags: bool,
    /// Tag bar cursor: 0 selects "All", i selects tags()[i - 1]
    pub tag_cursor: usize,
    /// Selection within the visible list
    pub selected: Option<usize>,
    /// Whether the tool detail overlay is open
    pub detail_open: bool,

    /// Scroll offset of the About view
    pub about_scroll: u16,

    // Forms
    pub contact_form: ContactForm,
    pub proposal_form: ProposalForm,

    /// Inline status region content
    pub status: Option<StatusMessage>,
    /// Submission staged for the runner to send
    pub pending_submission: Option<SubmissionPayload>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(view: CatalogView, announcement: Announcement, contributors: Vec<Contributor>) -> Self {
        Self {
            view,
            announcement,
            contributors,
            active_view: ActiveView::default(),
            mode: InteractionMode::default(),
            search_input: TextInput::new(),
            show_tags: false,
            tag_cursor: 0,
            selected: None,
            detail_open: false,
            about_scroll: 0,
            contact_form: ContactForm::default(),
            proposal_form: ProposalForm::default(),
            status: None,
            pending_submission: None,
            should_quit: false,
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match self.mode {
            InteractionMode::Search => self.handle_search_key(&key),
            InteractionMode::Form => self.handle_form_key(&key),
            InteractionMode::Normal => self.handle_normal_key(&key),
        }

        self.should_quit
    }

    fn handle_search_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = InteractionMode::Normal;
            }
            _ => {
                if self.search_input.handle_key(key) {
                    // Live filtering: every edit flows into the view model
                    self.view.set_query(self.search_input.content().to_string());
                    self.selected = None;
                }
            }
        }
    }

    fn handle_form_key(&mut self, key: &KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.stage_submission();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.mode = InteractionMode::Normal;
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => match self.active_view {
                ActiveView::Contact => self.contact_form.focus_next(),
                ActiveView::Contribute => self.proposal_form.focus_next(),
                _ => self.mode = InteractionMode::Normal,
            },
            KeyCode::BackTab | KeyCode::Up => match self.active_view {
                ActiveView::Contact => self.contact_form.focus_prev(),
                ActiveView::Contribute => self.proposal_form.focus_prev(),
                _ => self.mode = InteractionMode::Normal,
            },
            _ => {
                let field = match self.active_view {
                    ActiveView::Contact => self.contact_form.active_field_mut(),
                    ActiveView::Contribute => self.proposal_form.active_field_mut(),
                    _ => {
                        self.mode = InteractionMode::Normal;
                        return;
                    }
                };
                field.handle_key(key);
            }
        }
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) {
        // The detail overlay swallows navigation until dismissed
        if self.detail_open {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => self.detail_open = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_view(self.active_view.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_view(self.active_view.prev());
                return;
            }
            _ => {}
        }

        match self.active_view {
            ActiveView::Browse => self.handle_browse_key(key),
            ActiveView::About => self.handle_about_key(key),
            ActiveView::Contribute | ActiveView::Contact => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('i')) {
                    self.status = None;
                    self.mode = InteractionMode::Form;
                }
            }
        }
    }

    fn handle_browse_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('/') => self.mode = InteractionMode::Search,
            KeyCode::Char('t') => self.show_tags = !self.show_tags,
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Char('m') => self.view.show_more(),
            KeyCode::Char('u') => {
                self.view.show_less();
                self.clamp_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Left if self.show_tags => {
                self.tag_cursor = self.tag_cursor.saturating_sub(1);
            }
            KeyCode::Right if self.show_tags => {
                if self.tag_cursor < self.view.tags().len() {
                    self.tag_cursor += 1;
                }
            }
            KeyCode::Char('a') if self.show_tags => {
                self.tag_cursor = 0;
                self.apply_tag_cursor();
            }
            KeyCode::Enter if self.show_tags => {
                self.apply_tag_cursor();
                self.show_tags = false;
            }
            KeyCode::Enter => {
                if self.selected_tool().is_some() {
                    self.detail_open = true;
                }
            }
            KeyCode::Esc => self.show_tags = false,
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.about_scroll = self.about_scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.about_scroll = self.about_scroll.saturating_sub(1),
            KeyCode::Home => self.about_scroll = 0,
            _ => {}
        }
    }

    fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.mode = InteractionMode::Normal;
        self.detail_open = false;
        self.status = None;
    }

    /// Apply the tag bar cursor to the view model.
    fn apply_tag_cursor(&mut self) {
        let tag = if self.tag_cursor == 0 {
            None
        } else {
            self.view.tags().get(self.tag_cursor - 1).cloned()
        };
        self.view.select_tag(tag);
        self.selected = None;
    }

    /// Reset query and tag in one step.
    fn clear_filters(&mut self) {
        self.view.clear_filters();
        self.search_input.clear();
        self.tag_cursor = 0;
        self.selected = None;
    }

    fn select_next(&mut self) {
        let len = self.view.visible().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) if i + 1 >= len => 0,
            Some(i) => i + 1,
        });
    }

    fn select_prev(&mut self) {
        let len = self.view.visible().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => len - 1,
            Some(0) => len - 1,
            Some(i) => i - 1,
        });
    }

    fn clamp_selection(&mut self) {
        let len = self.view.visible().len();
        if let Some(i) = self.selected {
            self.selected = if len == 0 {
                None
            } else {
                Some(i.min(len - 1))
            };
        }
    }

    /// Currently selected tool, if any.
    pub fn selected_tool(&self) -> Option<&Tool> {
        self.selected.and_then(|i| self.view.visible().get(i).copied())
    }

    /// Validate the active form and stage its payload for the runner.
    fn stage_submission(&mut self) {
        match self.active_view {
            ActiveView::Contact => {
                if self.contact_form.is_complete() {
                    self.pending_submission =
                        Some(SubmissionPayload::Contact(self.contact_form.to_message()));
                    self.status = Some(StatusMessage::ok("Sending message..."));
                } else {
                    self.status = Some(StatusMessage::error(
                        "Name, email, and message are all required",
                    ));
                }
            }
            ActiveView::Contribute => {
                if self.proposal_form.is_complete() {
                    self.pending_submission =
                        Some(SubmissionPayload::Proposal(self.proposal_form.to_proposal()));
                    self.status = Some(StatusMessage::ok("Sending proposal..."));
                } else {
                    self.status = Some(StatusMessage::error("Tool name and link are required"));
                }
            }
            _ => {}
        }
    }

    /// Called by the runner after a successful POST: clear the form and
    /// report success.
    pub fn submission_succeeded(&mut self, payload: &SubmissionPayload) {
        match payload {
            SubmissionPayload::Contact(_) => {
                self.contact_form.clear();
                self.status = Some(StatusMessage::ok(
                    "Message sent. We'll get back within two business days.",
                ));
            }
            SubmissionPayload::Proposal(_) => {
                self.proposal_form.clear();
                self.status = Some(StatusMessage::ok("Proposal submitted for review."));
            }
        }
        self.mode = InteractionMode::Normal;
    }

    /// Called by the runner on failure: keep the fields, surface the error.
    pub fn submission_failed(&mut self, message: String) {
        self.status = Some(StatusMessage::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogView;

    fn tool(name: &str, tags: &[&str]) -> Tool {
        Tool {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn app() -> App {
        let view = CatalogView::new(vec![
            tool("Alpha", &["gis"]),
            tool("Beta", &["seismic", "gis"]),
            tool("Gamma", &["well-logs"]),
        ]);
        App::new(view, Announcement::default(), Vec::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_active_view_cycle() {
        let view = ActiveView::Browse;
        assert_eq!(view.next(), ActiveView::About);
        assert_eq!(view.next().next(), ActiveView::Contribute);
        assert_eq!(view.next().next().next(), ActiveView::Contact);
        assert_eq!(view.next().next().next().next(), ActiveView::Browse);
        assert_eq!(view.prev(), ActiveView::Contact);
    }

    #[test]
    fn test_active_view_names() {
        assert_eq!(ActiveView::Browse.name(), "Browse");
        assert_eq!(ActiveView::About.name(), "About");
        assert_eq!(ActiveView::Contribute.name(), "Contribute");
        assert_eq!(ActiveView::Contact.name(), "Contact");
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        assert!(a.handle_key(key(KeyCode::Char('q'))));
        assert!(a.should_quit);

        let mut b = app();
        assert!(b.handle_key(ctrl('c')));
    }

    #[test]
    fn test_ctrl_c_quits_in_search_mode() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('/')));
        assert_eq!(a.mode, InteractionMode::Search);
        assert!(a.handle_key(ctrl('c')));
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut a = app();
        a.handle_key(key(KeyCode::Tab));
        assert_eq!(a.active_view, ActiveView::About);
        a.handle_key(key(KeyCode::BackTab));
        assert_eq!(a.active_view, ActiveView::Browse);
    }

    #[test]
    fn test_search_mode_updates_query() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('/')));
        assert_eq!(a.mode, InteractionMode::Search);

        // 'q' is typed into the search box, not a quit
        for c in "beta".chars() {
            assert!(!a.handle_key(key(KeyCode::Char(c))));
        }
        assert_eq!(a.view.search_query(), "beta");
        assert_eq!(a.view.filtered_len(), 1);

        a.handle_key(key(KeyCode::Esc));
        assert_eq!(a.mode, InteractionMode::Normal);
        // Leaving search keeps the filter
        assert_eq!(a.view.filtered_len(), 1);
    }

    #[test]
    fn test_tag_bar_apply_and_clear() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('t')));
        assert!(a.show_tags);

        // tags are ["gis", "seismic", "well-logs"]; move to the first one
        a.handle_key(key(KeyCode::Right));
        a.handle_key(key(KeyCode::Enter));
        assert_eq!(a.view.selected_tag(), Some("gis"));
        assert!(!a.show_tags);
        assert_eq!(a.view.filtered_len(), 2);

        a.handle_key(key(KeyCode::Char('c')));
        assert_eq!(a.view.selected_tag(), None);
        assert_eq!(a.view.filtered_len(), 3);
    }

    #[test]
    fn test_tag_cursor_bounds() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('t')));
        a.handle_key(key(KeyCode::Left));
        assert_eq!(a.tag_cursor, 0);

        for _ in 0..10 {
            a.handle_key(key(KeyCode::Right));
        }
        assert_eq!(a.tag_cursor, a.view.tags().len());
    }

    #[test]
    fn test_selection_wraps() {
        let mut a = app();
        assert!(a.selected.is_none());

        a.handle_key(key(KeyCode::Down));
        assert_eq!(a.selected, Some(0));
        a.handle_key(key(KeyCode::Down));
        a.handle_key(key(KeyCode::Down));
        assert_eq!(a.selected, Some(2));
        a.handle_key(key(KeyCode::Down));
        assert_eq!(a.selected, Some(0));
        a.handle_key(key(KeyCode::Up));
        assert_eq!(a.selected, Some(2));
    }

    #[test]
    fn test_detail_overlay() {
        let mut a = app();
        a.handle_key(key(KeyCode::Down));
        a.handle_key(key(KeyCode::Enter));
        assert!(a.detail_open);

        // Arrow keys are swallowed while the overlay is open
        a.handle_key(key(KeyCode::Down));
        assert_eq!(a.selected, Some(0));

        a.handle_key(key(KeyCode::Esc));
        assert!(!a.detail_open);
    }

    #[test]
    fn test_enter_without_selection_does_not_open_detail() {
        let mut a = app();
        a.handle_key(key(KeyCode::Enter));
        assert!(!a.detail_open);
    }

    #[test]
    fn test_form_mode_entry_and_typing() {
        let mut a = app();
        a.switch_view(ActiveView::Contact);
        a.handle_key(key(KeyCode::Char('i')));
        assert_eq!(a.mode, InteractionMode::Form);

        for c in "Ada".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(a.contact_form.name.content(), "Ada");

        a.handle_key(key(KeyCode::Tab));
        assert_eq!(a.contact_form.focus, 1);
        a.handle_key(key(KeyCode::BackTab));
        assert_eq!(a.contact_form.focus, 0);
    }

    #[test]
    fn test_incomplete_contact_form_not_staged() {
        let mut a = app();
        a.switch_view(ActiveView::Contact);
        a.handle_key(key(KeyCode::Char('i')));
        a.handle_key(ctrl('s'));

        assert!(a.pending_submission.is_none());
        assert!(a.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_complete_contact_form_staged() {
        let mut a = app();
        a.switch_view(ActiveView::Contact);
        a.handle_key(key(KeyCode::Char('i')));

        for c in "Ada".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        a.handle_key(key(KeyCode::Tab));
        for c in "ada@example.org".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        a.handle_key(key(KeyCode::Tab));
        for c in "hello".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        a.handle_key(ctrl('s'));

        match a.pending_submission {
            Some(SubmissionPayload::Contact(ref msg)) => {
                assert_eq!(msg.name, "Ada");
                assert_eq!(msg.email, "ada@example.org");
            }
            _ => panic!("Expected staged contact payload"),
        }
    }

    #[test]
    fn test_proposal_form_staged_with_tags() {
        let mut a = app();
        a.switch_view(ActiveView::Contribute);
        a.handle_key(key(KeyCode::Char('i')));

        for c in "Verde".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        a.handle_key(key(KeyCode::Tab));
        for c in "https://x.example".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        a.handle_key(key(KeyCode::Tab));
        a.handle_key(key(KeyCode::Tab));
        for c in "gis, python ,".chars() {
            a.handle_key(key(KeyCode::Char(c)));
        }
        a.handle_key(ctrl('s'));

        match a.pending_submission {
            Some(SubmissionPayload::Proposal(ref p)) => {
                assert_eq!(p.name, "Verde");
                assert_eq!(p.tags, vec!["gis".to_string(), "python".to_string()]);
            }
            _ => panic!("Expected staged proposal payload"),
        }
    }

    #[test]
    fn test_submission_succeeded_clears_form() {
        let mut a = app();
        a.contact_form.name.insert('x');
        let payload = SubmissionPayload::Contact(ContactMessage::new("x", "y", "z"));

        a.submission_succeeded(&payload);
        assert!(a.contact_form.name.is_empty());
        assert!(!a.status.as_ref().unwrap().is_error);
        assert_eq!(a.mode, InteractionMode::Normal);
    }

    #[test]
    fn test_submission_failed_keeps_fields() {
        let mut a = app();
        a.contact_form.name.insert('x');
        a.submission_failed("Submission failed: endpoint returned 503".to_string());

        assert_eq!(a.contact_form.name.content(), "x");
        let status = a.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("503"));
    }

    #[test]
    fn test_show_less_clamps_selection() {
        let tools: Vec<Tool> = (0..45).map(|i| tool(&format!("t{:02}", i), &[])).collect();
        let mut a = App::new(CatalogView::new(tools), Announcement::default(), Vec::new());

        a.handle_key(key(KeyCode::Char('m')));
        a.selected = Some(35);
        a.handle_key(key(KeyCode::Char('u')));
        assert_eq!(a.selected, Some(19));
    }

    #[test]
    fn test_switch_view_resets_transient_state() {
        let mut a = app();
        a.handle_key(key(KeyCode::Down));
        a.handle_key(key(KeyCode::Enter));
        assert!(a.detail_open);

        a.handle_key(key(KeyCode::Esc));
        a.handle_key(key(KeyCode::Tab));
        assert_eq!(a.active_view, ActiveView::About);
        assert!(!a.detail_open);
        assert_eq!(a.mode, InteractionMode::Normal);
    }
}
