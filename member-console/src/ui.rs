//! Rendering

use member_client::MessageKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{App, Panel};

const LABEL_WIDTH: u16 = 11;

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, log] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(12),
        Constraint::Length(8),
    ])
    .areas(frame.area());

    frame.render_widget(
        Line::from(vec![
            Span::styled(" Miembros ", Style::new().bold().reversed()),
            Span::raw(format!(" {}  ", app.base_url)),
            Span::styled(
                "Tab panel · ↑↓ campo · Espacio activo · Enter enviar · Ctrl-X cerrar ficha · Esc salir",
                Style::new().dark_gray(),
            ),
        ]),
        header,
    );

    let [forms, card] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
    draw_panels(frame, app, forms);
    draw_card(frame, app, card);

    let logs = TuiLoggerWidget::default()
        .block(
            Block::bordered()
                .title(" Logs ")
                .border_style(Style::new().fg(Color::White).add_modifier(Modifier::DIM)),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::new().fg(Color::White));
    frame.render_widget(logs, log);

    draw_dialog(frame, app);
}

/// The selected panel is expanded; the others collapse to their header.
fn draw_panels(frame: &mut Frame, app: &App, area: Rect) {
    let constraints = Panel::ALL.map(|panel| {
        if panel == app.selected {
            Constraint::Min(panel_height(panel))
        } else {
            Constraint::Length(1)
        }
    });
    let areas = Layout::vertical(constraints).split(area);

    for (panel, area) in Panel::ALL.into_iter().zip(areas.iter().copied()) {
        if panel == app.selected {
            draw_panel(frame, app, panel, area);
        } else {
            frame.render_widget(
                Line::from(format!("▸ {}", panel.title())).style(Style::new().dark_gray()),
                area,
            );
        }
    }
}

fn panel_height(panel: Panel) -> u16 {
    panel.fields().len() as u16 + 2
}

fn draw_panel(frame: &mut Frame, app: &App, panel: Panel, area: Rect) {
    let block = Block::bordered()
        .title(format!(" ▾ {} ", panel.title()))
        .border_style(Style::new().cyan());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.form(panel);
    let focused = app.focused_field(panel);
    let rows = Layout::vertical(panel.fields().iter().map(|_| Constraint::Length(1))).split(inner);

    for (field, row) in panel.fields().iter().copied().zip(rows.iter().copied()) {
        let is_focused = field == focused && app.dialog.is_none();
        let label_style = if is_focused {
            Style::new().yellow().add_modifier(Modifier::BOLD)
        } else {
            Style::new()
        };
        let label = Span::styled(
            format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
            label_style,
        );

        let line = match form.input(field) {
            Some(input) => {
                let mut spans = vec![label, Span::raw(input.value().to_string())];
                if let Some(hint) = app.required_hint(panel, field) {
                    spans.push(Span::styled(format!("  {hint}"), Style::new().yellow()));
                }
                if is_focused {
                    frame.set_cursor_position(Position::new(
                        row.x + LABEL_WIDTH + input.visual_cursor() as u16,
                        row.y,
                    ));
                }
                Line::from(spans)
            }
            None => {
                let mark = if form.active { "[x]" } else { "[ ]" };
                Line::from(vec![label, Span::raw(mark)])
            }
        };
        frame.render_widget(line, row);
    }
}

fn draw_card(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" Ficha del miembro ");
    let Some(card) = &app.card else {
        frame.render_widget(
            Paragraph::new("Consulta un miembro por ID para ver su ficha.")
                .style(Style::new().dark_gray())
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
        return;
    };

    let lines: Vec<Line> = card
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::new().bold()),
                Span::raw(value),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(block.title_top(Line::from(" × Ctrl-X ").right_aligned())),
        area,
    );
}

fn draw_dialog(frame: &mut Frame, app: &App) {
    let Some(dialog) = &app.dialog else {
        return;
    };

    let color = match dialog.kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
    };
    let area = centered(frame.area(), 60, 7);
    let block = Block::bordered()
        .title(format!(" {} ", dialog.kind.title()))
        .title_bottom(Line::from(" Enter aceptar ").centered())
        .border_style(Style::new().fg(color));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(dialog.text.as_str())
            .wrap(Wrap { trim: true })
            .centered()
            .block(block),
        area,
    );
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
