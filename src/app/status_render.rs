use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::LoadingState;
use crate::theme;

fn separator() -> Span<'static> {
    Span::styled(" \u{2022} ", theme::status::SEPARATOR)
}

fn loading_span(state: &LoadingState) -> Span<'static> {
    match state {
        LoadingState::Loading => Span::styled("loading", theme::status::LOADING),
        LoadingState::Following => Span::styled("following", theme::status::LOADING),
        LoadingState::Complete => Span::styled("done", theme::status::COMPLETE),
        LoadingState::Error(err) => Span::styled(format!("error: {}", err), theme::status::ERROR),
    }
}

pub(super) fn build_styled_spans(app: &App) -> Vec<Span<'static>> {
    let offset = app.viewport.offset();
    let count = app.line_count();

    let mut spans = Vec::with_capacity(16);
    spans.push(Span::styled(" ", theme::status::TEXT));
    spans.push(Span::styled(app.source.clone(), theme::status::SOURCE));
    spans.push(separator());
    spans.push(Span::styled(
        format!("{} {}", count, if count == 1 { "line" } else { "lines" }),
        theme::status::TEXT,
    ));
    spans.push(separator());
    spans.push(Span::styled("offset ", theme::status::MUTED));
    spans.push(Span::styled(
        format!("{},{}", offset.x, offset.y),
        theme::status::TEXT,
    ));

    if app.follow {
        spans.push(Span::styled(" [follow]", theme::status::MARKER));
    }
    if app.autoscroll() {
        spans.push(Span::styled(" [autoscroll]", theme::status::MARKER));
    }

    spans.push(separator());
    spans.push(loading_span(app.loading_state()));

    if let Some(warning) = &app.config_warning {
        spans.push(separator());
        spans.push(Span::styled(warning.clone(), theme::status::WARNING));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(build_styled_spans(app))).style(theme::status::BACKGROUND);
    frame.render_widget(status, area);
}
