use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, SettingsField};
use crate::assistant::{QuickAction, Sender};
use crate::config::{DEPOSIT_CONFIRMATIONS, MIN_DEPOSIT};
use crate::utils::format_usd;

use super::components::{centered_rect, focus_style};

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect(60, 70, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Brand
            Constraint::Min(6),    // Phrase entry
            Constraint::Length(3), // Action line
        ])
        .split(panel);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            "S I D E X",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Non-Custodial Sharia-Compliant Wallet",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(brand, chunks[0]);

    let phrase_line = if app.login.phrase.is_empty() {
        Line::from(Span::styled(
            "Enter your 12 or 24 word recovery phrase separated by spaces...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.login.phrase.clone())
    };
    let phrase_box = Paragraph::new(phrase_line).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Secret Recovery Phrase")
            .title_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(phrase_box, chunks[1]);

    let action = if app.login.submitting() {
        Paragraph::new("Decrypting vault...")
            .style(Style::default().fg(Color::Yellow))
    } else if app.login.can_submit() {
        Paragraph::new("Enter: Decrypt Vault | Esc: Quit")
            .style(Style::default().fg(Color::Green))
    } else {
        Paragraph::new("Type your recovery phrase to continue | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        action
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}

pub fn render_deposit(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Token
            Constraint::Length(4), // Address
            Constraint::Length(5), // Important notes
            Constraint::Length(3), // Recent deposits
            Constraint::Min(0),
        ])
        .split(area);

    let token_text = match app.catalog.get(&app.deposit.asset) {
        Some(asset) => format!("{} ({}) | Network: {}", asset.name, asset.symbol, asset.network),
        None => app.deposit.asset.clone(),
    };
    let token_box = Paragraph::new(token_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select Token")
            .title_style(focus_style(true)),
    );
    f.render_widget(token_box, chunks[0]);

    let mut address_spans = vec![Span::from(app.deposit.address())];
    if app.deposit.copied() {
        address_spans.push(Span::styled(
            "  ✓ Copied",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    let address_box = Paragraph::new(vec![
        Line::from(address_spans),
        Line::from(Span::styled(
            format!(
                "Only send {} tokens to this address. Sending other tokens may result in permanent loss.",
                app.deposit.asset
            ),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Wallet Address (c: copy)"),
    );
    f.render_widget(address_box, chunks[1]);

    let notes = Paragraph::new(vec![
        Line::from(format!("• Minimum deposit: {MIN_DEPOSIT} {}", app.deposit.asset)),
        Line::from(format!(
            "• Deposits require {DEPOSIT_CONFIRMATIONS} network confirmations"
        )),
        Line::from("• Deposits are screened for Sharia compliance on arrival"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Important Notes"));
    f.render_widget(notes, chunks[2]);

    let recent = Paragraph::new(Span::styled(
        "No recent deposits",
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::default().borders(Borders::ALL).title("Recent Deposits"));
    f.render_widget(recent, chunks[3]);
}

pub fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Security toggles
            Constraint::Length(3), // Nisab threshold
            Constraint::Length(3), // Display currency
            Constraint::Length(5), // Zakat panel
            Constraint::Min(0),
        ])
        .split(area);

    let toggles = Paragraph::new(vec![
        toggle_line(
            "Transaction Alerts",
            app.settings.notifications,
            app.settings.field == SettingsField::Notifications,
        ),
        toggle_line(
            "Biometric Authentication",
            app.settings.biometrics,
            app.settings.field == SettingsField::Biometrics,
        ),
        toggle_line(
            "Zakat Reminders",
            app.settings.zakat_reminders,
            app.settings.field == SettingsField::ZakatReminders,
        ),
    ])
    .block(Block::default().borders(Borders::ALL).title("Security & Alerts"));
    f.render_widget(toggles, chunks[0]);

    let nisab_line = if app.settings.nisab_input.is_empty() {
        Line::from(Span::styled(
            "Minimum wealth required for Zakat (typically $5,000)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.settings.nisab_input.clone())
    };
    let nisab_box = Paragraph::new(nisab_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Nisab Threshold (USD)")
            .title_style(focus_style(app.settings.field == SettingsField::Nisab)),
    );
    f.render_widget(nisab_box, chunks[1]);

    let currency_box = Paragraph::new(app.settings.currency.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Display Currency")
            .title_style(focus_style(app.settings.field == SettingsField::Currency)),
    );
    f.render_widget(currency_box, chunks[2]);

    let z = app.settings.zakat_estimate(&app.catalog);
    let verdict = if z.nisab_met {
        Line::from(Span::styled(
            format!(
                "You are above the Nisab threshold. Zakat due: {} (2.5%)",
                format_usd(z.due_usd)
            ),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "You are below the Nisab threshold. No Zakat is due.",
            Style::default().fg(Color::Gray),
        ))
    };
    let zakat_panel = Paragraph::new(vec![
        Line::from(format!(
            "Current Portfolio: {}",
            format_usd(z.eligible_usd)
        )),
        verdict,
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Zakat Calculator Settings")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(zakat_panel, chunks[3]);
}

fn toggle_line(label: &str, enabled: bool, focused: bool) -> Line<'static> {
    let state = if enabled {
        Span::styled("[ON] ", Style::default().fg(Color::Green))
    } else {
        Span::styled("[OFF]", Style::default().fg(Color::DarkGray))
    };
    Line::from(vec![
        state,
        Span::from(" "),
        Span::styled(label.to_string(), focus_style(focused)),
    ])
}

pub fn render_assistant(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Message log
            Constraint::Length(6), // Quick actions
            Constraint::Length(3), // Input line
        ])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat.messages {
        let (who, style) = match message.sender {
            Sender::User => ("You", Style::default().fg(Color::Yellow)),
            Sender::Assistant => ("SidEx Intelligence", Style::default().fg(Color::Cyan)),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("{who}: "), style.add_modifier(Modifier::BOLD)),
        ]));
        for body_line in message.body.lines() {
            lines.push(Line::from(format!("  {body_line}")));
        }
    }
    if app.chat.typing() {
        lines.push(Line::from(Span::styled(
            "SidEx Intelligence is typing...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }
    // Keep the tail of the conversation in view.
    let visible = chunks[0].height.saturating_sub(2) as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }
    let log = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("SidEx Intelligence"),
    );
    f.render_widget(log, chunks[0]);

    let items: Vec<ListItem> = QuickAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if i == app.chat.selected_action {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(action.to_string(), style),
                Span::styled(
                    format!(": {}", action.description()),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();
    let actions = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quick Actions (↑↓ + Enter)"),
    );
    f.render_widget(actions, chunks[1]);

    let input_line = if app.chat.input.is_empty() {
        Line::from(Span::styled(
            "Ask about Sharia compliance, Zakat, or transactions...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.chat.input.clone())
    };
    let input = Paragraph::new(input_line)
        .block(Block::default().borders(Borders::ALL).title("Message"));
    f.render_widget(input, chunks[2]);
}
