use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

use crate::app::App;
use crate::catalog::{self, TxKind};
use crate::utils::{format_qty, format_usd};

use super::components::masked;

pub fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let mut constraints = Vec::new();
    if app.show_welcome_banner {
        constraints.push(Constraint::Length(5)); // Welcome banner
    }
    constraints.push(Constraint::Length(5)); // Portfolio hero
    constraints.push(Constraint::Length(10)); // 24h chart
    constraints.push(Constraint::Min(6)); // Assets and transactions
    constraints.push(Constraint::Length(3)); // Market signal

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    if app.show_welcome_banner {
        render_welcome_banner(f, chunks[idx]);
        idx += 1;
    }

    render_hero(f, app, chunks[idx]);
    render_portfolio_chart(f, chunks[idx + 1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[idx + 2]);
    render_assets(f, app, bottom[0]);
    render_transactions(f, app, bottom[1]);

    let signal = Paragraph::new(
        "SidraChain (SDA) showing positive momentum (+12.5%). Zakat threshold reached.",
    )
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Market Signal Analysis"),
    );
    f.render_widget(signal, chunks[idx + 3]);
}

fn render_welcome_banner(f: &mut Frame, area: Rect) {
    let banner = Paragraph::new(vec![
        Line::from(
            "SidraChain connection established. All compliance modules are active and monitoring real-time transactions.",
        ),
        Line::from(Span::styled(
            "✓ Compliance Verified (AAOIFI Standards Met)",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "b: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("System Status: Operational")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(banner, area);
}

fn render_hero(f: &mut Frame, app: &App, area: Rect) {
    let total = masked(format_usd(app.portfolio_total_usd()), app.hide_balances);
    let hero = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("TOTAL PORTFOLIO VALUE  ", Style::default().fg(Color::White)),
            Span::styled("[Halal Certified]", Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            total,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("+18.7%", Style::default().fg(Color::Green)),
            Span::styled("  +$23,750.00 this month", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(hero, area);
}

fn render_portfolio_chart(f: &mut Frame, area: Rect) {
    let data = catalog::portfolio_history();

    let min_value = data.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max_value = data
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    // Headroom so the line is not glued to the chart border.
    let y_min = min_value - 1000.0;
    let y_max = max_value + 1000.0;

    let datasets = vec![
        Dataset::default()
            .name("Portfolio")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(Color::Cyan))
            .graph_type(GraphType::Line)
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Portfolio Value (24h)")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 24.0])
                .labels(vec![
                    Span::from("00:00"),
                    Span::from("12:00"),
                    Span::from("24:00"),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::from(format!("${:.0}k", y_min / 1000.0)),
                    Span::from(format!("${:.0}k", (y_min + y_max) / 2000.0)),
                    Span::from(format!("${:.0}k", y_max / 1000.0)),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_assets(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["Asset", "Balance", "Value", "24h"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = app.catalog.assets().iter().map(|asset| {
        let mut name_spans = vec![Span::from(asset.name.clone())];
        if asset.halal_certified {
            name_spans.push(Span::styled(" Halal", Style::default().fg(Color::Green)));
        }
        let balance = masked(
            format!("{} {}", format_qty(asset.balance), asset.symbol),
            app.hide_balances,
        );
        let value = masked(format_usd(asset.value_usd()), app.hide_balances);
        let change_style = if asset.change_24h >= 0.0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        Row::new(vec![
            Cell::from(Line::from(name_spans)),
            Cell::from(balance),
            Cell::from(value),
            Cell::from(format!("{:+.1}%", asset.change_24h)).style(change_style),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(27),
            Constraint::Percentage(23),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Your Assets"))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn render_transactions(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["Type", "Amount", "USD", "When"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows = app.transactions.iter().map(|tx| {
        let kind_style = match tx.kind {
            TxKind::Received => Style::default().fg(Color::Green),
            TxKind::Sent => Style::default().fg(Color::Red),
            TxKind::Swap => Style::default().fg(Color::Cyan),
        };
        Row::new(vec![
            Cell::from(tx.kind.label()).style(kind_style),
            Cell::from(tx.amount.clone()),
            Cell::from(tx.usd.clone()),
            Cell::from(tx.age.clone()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Transactions"),
    )
    .column_spacing(1);

    f.render_widget(table, area);
}
