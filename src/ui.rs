use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, LineGauge, Paragraph},
    Frame,
};

use crate::app::{App, ParamKey, PARAM_KEYS};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Min(8),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Mortgage Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_controls(f, app, chunks[1]);
    render_total(f, app, chunks[2]);
    render_chart(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 6].as_ref())
        .split(area);

    for (i, key) in PARAM_KEYS.iter().enumerate() {
        let selected = i == app.selected;
        let row = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
            .split(rows[i]);

        let value = key.get(&app.params);
        let shown = match (&app.entry, selected) {
            (Some(buffer), true) => format!("{}_", buffer),
            _ => format_value(*key, value),
        };
        let marker = if selected { "▶ " } else { "  " };
        let label_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = Paragraph::new(format!("{}{}: {}", marker, key.label(), shown))
            .style(label_style);
        f.render_widget(label, row[0]);

        let gauge_area = Rect {
            x: row[1].x + 2,
            width: row[1].width.saturating_sub(2),
            ..row[1]
        };
        let gauge = LineGauge::default()
            .ratio(slider_ratio(
                value,
                key.min(),
                key.max(&app.params),
            ))
            .label("")
            .gauge_style(if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        f.render_widget(gauge, gauge_area);
    }
}

fn render_total(f: &mut Frame, app: &App, area: Rect) {
    let breakdown = app.breakdown();
    let total = Paragraph::new(Line::from(vec![
        Span::styled(
            "Total Monthly Payment: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("${:.2}", breakdown.total),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(total, area);
}

fn render_chart(f: &mut Frame, app: &App, area: Rect) {
    let breakdown = app.breakdown();
    let segments = [
        ("P&I", breakdown.principal_and_interest, Color::Green),
        ("Tax", breakdown.tax, Color::Yellow),
        ("Ins", breakdown.insurance, Color::Red),
    ];

    let bars: Vec<Bar> = segments
        .iter()
        .map(|(name, amount, color)| {
            Bar::default()
                .value(bar_value(*amount))
                .label(Line::from(*name))
                .text_value(String::new())
                .style(Style::default().fg(*color))
        })
        .collect();

    let bar_width = (area.width as usize / 4).clamp(3, 14) as u16;

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monthly Payment Proportions"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);
    f.render_widget(chart, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.entry.is_some() {
        "type digits | Enter: apply | Backspace: delete | Esc: cancel".to_string()
    } else {
        let bindings =
            "j/k or ↑/↓: select | h/l or ←/→: adjust | Ctrl-u/d: coarse | i/Enter: type | e: export | q: quit";
        match &app.status {
            Some(status) => format!("{} — {}", status, bindings),
            None => bindings.to_string(),
        }
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

fn format_value(key: ParamKey, value: f64) -> String {
    match key {
        ParamKey::AnnualInterestRate => format!("{:.1}%", value),
        ParamKey::LoanTermYears => format!("{:.0} years", value),
        _ => format!("${:.0}", value),
    }
}

/// Position of a value within its control's bounds, sanitized for display:
/// non-finite ratios and empty ranges pin the gauge to zero, finite
/// out-of-range values pin to the nearest end. State itself is never
/// clamped.
fn slider_ratio(value: f64, min: f64, max: f64) -> f64 {
    let ratio = (value - min) / (max - min);
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Whole-dollar bar height; non-finite or negative amounts flatten to zero.
fn bar_value(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_ratio_stays_in_unit_interval() {
        assert_eq!(slider_ratio(75.0, 50.0, 100.0), 0.5);
        assert_eq!(slider_ratio(200.0, 50.0, 100.0), 1.0);
        assert_eq!(slider_ratio(0.0, 50.0, 100.0), 0.0);
    }

    #[test]
    fn slider_ratio_sanitizes_degenerate_inputs() {
        assert_eq!(slider_ratio(f64::NAN, 0.0, 100.0), 0.0);
        assert_eq!(slider_ratio(f64::INFINITY, 0.0, 100.0), 0.0);
        // down payment slider when price == min bound
        assert_eq!(slider_ratio(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn bar_value_flattens_non_finite_amounts() {
        assert_eq!(bar_value(1193.54), 1194);
        assert_eq!(bar_value(f64::NAN), 0);
        assert_eq!(bar_value(f64::INFINITY), 0);
        assert_eq!(bar_value(-10.0), 0);
    }

    #[test]
    fn value_formatting_per_control() {
        assert_eq!(format_value(ParamKey::HomePrice, 312_500.0), "$312500");
        assert_eq!(format_value(ParamKey::AnnualInterestRate, 4.0), "4.0%");
        assert_eq!(format_value(ParamKey::LoanTermYears, 30.0), "30 years");
    }
}
