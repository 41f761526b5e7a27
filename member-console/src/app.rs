//! Console application state and key handling
//!
//! Four panels, one expanded at a time. Submissions are spawned as tasks;
//! their results come back as [`ViewEvent`]s and are applied in arrival
//! order, so the last search to resolve owns the detail card.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use member_client::{
    ChannelView, CreateForm, DeleteForm, DetailCard, MemberFormController, MessageKind,
    NetworkHttpClient, SearchForm, UpdateForm, UpdatePolicy, ViewEvent, required_field_hint,
};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::ui;

pub type Controller = MemberFormController<NetworkHttpClient, ChannelView>;

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Create,
    Search,
    Update,
    Delete,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Create, Panel::Search, Panel::Update, Panel::Delete];

    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Crear miembro",
            Self::Search => "Consultar miembro",
            Self::Update => "Actualizar miembro",
            Self::Delete => "Eliminar miembro",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Create => &[Field::FirstName, Field::LastName, Field::Email, Field::Active],
            Self::Search | Self::Delete => &[Field::Id],
            Self::Update => &[
                Field::Id,
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Active,
            ],
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Email,
    Active,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::FirstName => "Nombre",
            Self::LastName => "Apellido",
            Self::Email => "Email",
            Self::Active => "Activo",
        }
    }
}

/// Field values of one panel
#[derive(Debug, Default)]
pub struct FormState {
    pub id: Input,
    pub first_name: Input,
    pub last_name: Input,
    pub email: Input,
    pub active: bool,
    pub focus: usize,
}

impl FormState {
    pub fn input(&self, field: Field) -> Option<&Input> {
        match field {
            Field::Id => Some(&self.id),
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Active => None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut Input> {
        match field {
            Field::Id => Some(&mut self.id),
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Active => None,
        }
    }

    fn clear(&mut self) {
        *self = Self {
            focus: self.focus,
            ..Self::default()
        };
    }
}

/// Modal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: MessageKind,
    pub text: String,
}

/// Raw values of one form at the moment it was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CreateForm),
    Search(SearchForm),
    Update(UpdateForm),
    Delete(DeleteForm),
}

pub struct App {
    pub selected: Panel,
    pub forms: [FormState; 4],
    pub dialog: Option<Dialog>,
    pub card: Option<DetailCard>,
    pub base_url: String,
    update_policy: UpdatePolicy,
    should_quit: bool,
}

impl App {
    pub fn new(base_url: impl Into<String>, update_policy: UpdatePolicy) -> Self {
        Self {
            selected: Panel::Create,
            forms: Default::default(),
            dialog: None,
            card: None,
            base_url: base_url.into(),
            update_policy,
            should_quit: false,
        }
    }

    pub fn form(&self, panel: Panel) -> &FormState {
        &self.forms[panel.index()]
    }

    fn form_mut(&mut self, panel: Panel) -> &mut FormState {
        &mut self.forms[panel.index()]
    }

    pub fn focused_field(&self, panel: Panel) -> Field {
        let fields = panel.fields();
        fields[self.form(panel).focus.min(fields.len() - 1)]
    }

    /// Live hint for an empty update text field. Only the full policy
    /// requires every field.
    pub fn required_hint(&self, panel: Panel, field: Field) -> Option<&'static str> {
        if panel != Panel::Update
            || self.update_policy != UpdatePolicy::Full
            || matches!(field, Field::Id | Field::Active)
        {
            return None;
        }
        self.form(panel)
            .input(field)
            .and_then(|input| required_field_hint(input.value()))
    }

    /// Main loop: draw, apply view events, handle one key.
    pub fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        controller: Controller,
        mut events: UnboundedReceiver<ViewEvent>,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            while let Ok(event) = events.try_recv() {
                self.apply(event);
            }

            terminal.draw(|frame| ui::draw(frame, &self))?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && let Some(submission) = self.handle_key(key)
            {
                spawn_submission(&controller, submission);
            }
        }
        Ok(())
    }

    /// Apply one controller side effect.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Detail(card) => self.card = Some(card),
            ViewEvent::ClearForm => self.form_mut(Panel::Create).clear(),
            ViewEvent::Message { kind, text } => self.dialog = Some(Dialog { kind, text }),
        }
    }

    /// Returns a submission when the key submits the selected form.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Submission> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('x') => self.card = None,
                _ => {}
            }
            return None;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return None;
        }

        let panel = self.selected;
        let field_count = panel.fields().len();
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.selected = panel.next(),
            KeyCode::BackTab => self.selected = panel.prev(),
            KeyCode::Down => {
                let form = self.form_mut(panel);
                form.focus = (form.focus + 1) % field_count;
            }
            KeyCode::Up => {
                let form = self.form_mut(panel);
                form.focus = (form.focus + field_count - 1) % field_count;
            }
            KeyCode::Enter => return Some(self.snapshot(panel)),
            _ => {
                let field = self.focused_field(panel);
                let form = self.form_mut(panel);
                if field == Field::Active {
                    if key.code == KeyCode::Char(' ') {
                        form.active = !form.active;
                    }
                } else if let Some(input) = form.input_mut(field) {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
        None
    }

    fn snapshot(&self, panel: Panel) -> Submission {
        let form = self.form(panel);
        match panel {
            Panel::Create => Submission::Create(CreateForm::new(
                form.first_name.value(),
                form.last_name.value(),
                form.email.value(),
                form.active,
            )),
            Panel::Search => Submission::Search(SearchForm::new(form.id.value())),
            Panel::Update => Submission::Update(UpdateForm::new(
                form.id.value(),
                form.first_name.value(),
                form.last_name.value(),
                form.email.value(),
                form.active,
            )),
            Panel::Delete => Submission::Delete(DeleteForm::new(form.id.value())),
        }
    }
}

/// Each submission runs on its own task; nothing orders them.
fn spawn_submission(controller: &Controller, submission: Submission) {
    let controller = controller.clone();
    tokio::spawn(async move {
        let outcome = match &submission {
            Submission::Create(form) => controller.submit_create(form).await,
            Submission::Search(form) => controller.submit_search(form).await,
            Submission::Update(form) => controller.submit_update(form).await,
            Submission::Delete(form) => controller.submit_delete(form).await,
        };
        tracing::debug!(?outcome, "submission finished");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use member_client::Member;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn card(id: i64) -> DetailCard {
        DetailCard::new(Member {
            id,
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            email: "ana@x.com".into(),
            active: true,
        })
    }

    #[test]
    fn test_create_submission_snapshot() {
        let mut app = App::new("http://localhost:8080/miembros", UpdatePolicy::Full);
        type_text(&mut app, "Ana");
        app.handle_key(press(KeyCode::Down));
        type_text(&mut app, "Lopez");
        app.handle_key(press(KeyCode::Down));
        type_text(&mut app, "ana@x.com");
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Char(' ')));

        let submission = app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            submission,
            Some(Submission::Create(CreateForm::new("Ana", "Lopez", "ana@x.com", true)))
        );
    }

    #[test]
    fn test_clear_form_resets_create_panel_only() {
        let mut app = App::new("", UpdatePolicy::Full);
        type_text(&mut app, "Ana");
        app.form_mut(Panel::Create).active = true;
        app.selected = Panel::Search;
        type_text(&mut app, "7");

        app.apply(ViewEvent::ClearForm);

        let create = app.form(Panel::Create);
        assert_eq!(create.first_name.value(), "");
        assert!(!create.active);
        assert_eq!(app.form(Panel::Search).id.value(), "7");
    }

    #[test]
    fn test_new_card_replaces_previous() {
        let mut app = App::new("", UpdatePolicy::Full);
        app.apply(ViewEvent::Detail(card(1)));
        app.apply(ViewEvent::Detail(card(2)));
        assert_eq!(app.card.as_ref().map(|c| c.member.id), Some(2));

        app.handle_key(ctrl('x'));
        assert!(app.card.is_none());
    }

    #[test]
    fn test_dialog_blocks_input_until_dismissed() {
        let mut app = App::new("", UpdatePolicy::Full);
        app.apply(ViewEvent::Message {
            kind: MessageKind::Error,
            text: "Miembro no encontrado".into(),
        });

        assert_eq!(app.handle_key(press(KeyCode::Enter)), None);
        assert!(app.dialog.is_none());

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.selected, Panel::Search);
    }

    #[test]
    fn test_panel_cycle() {
        let mut app = App::new("", UpdatePolicy::Full);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.selected, Panel::Delete);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.selected, Panel::Create);
    }

    #[test]
    fn test_required_hint_follows_update_policy() {
        let mut app = App::new("", UpdatePolicy::Full);
        app.selected = Panel::Update;
        app.handle_key(press(KeyCode::Down));
        type_text(&mut app, "Ana");

        assert_eq!(app.required_hint(Panel::Update, Field::FirstName), None);
        assert_eq!(
            app.required_hint(Panel::Update, Field::LastName),
            Some("Debes completar este campo.")
        );
        assert_eq!(app.required_hint(Panel::Update, Field::Id), None);
        assert_eq!(app.required_hint(Panel::Create, Field::LastName), None);

        let app = App::new("", UpdatePolicy::Partial);
        assert_eq!(app.required_hint(Panel::Update, Field::LastName), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new("", UpdatePolicy::Full);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }
}
