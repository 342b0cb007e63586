//! Send and swap screens. Both render from the flow stage: an editing
//! form, a review summary, an in-flight notice, and a completion card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FlowStage, SendField, SwapField};
use crate::config::{
    OUTPUT_DECIMALS, SEND_FEE_SDA, SEND_FEE_USD_LABEL, SWAP_FEE_LABEL, SWAP_FEE_USD_LABEL,
};
use crate::quote::{QuoteCalculator, parse_amount};
use crate::utils::{format_qty, format_usd, shorten_address};

use super::components::{centered_rect, focus_style};

pub fn render_send(f: &mut Frame, app: &App, area: Rect) {
    match app.send.stage {
        FlowStage::Editing => render_send_form(f, app, area),
        FlowStage::Reviewing => render_send_review(f, app, area),
        FlowStage::Submitting => render_in_flight(f, "Sending", "Broadcasting transaction to the network...", area),
        FlowStage::Complete => render_send_complete(f, app, area),
    }
}

fn render_send_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Token
            Constraint::Length(3), // Recipient
            Constraint::Length(3), // Amount
            Constraint::Length(4), // Fee summary
            Constraint::Min(0),
        ])
        .split(area);

    let asset_text = match app.catalog.get(&app.send.asset) {
        Some(asset) => format!(
            "{} ({}) | Balance: {} {}",
            asset.name,
            asset.symbol,
            format_qty(asset.balance),
            asset.symbol
        ),
        None => app.send.asset.clone(),
    };
    let asset_box = Paragraph::new(asset_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select Token")
            .title_style(focus_style(app.send.field == SendField::Asset)),
    );
    f.render_widget(asset_box, chunks[0]);

    let recipient_line = if app.send.recipient.is_empty() {
        Line::from(Span::styled("0x...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(app.send.recipient.clone())
    };
    let recipient_box = Paragraph::new(recipient_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recipient Address")
            .title_style(focus_style(app.send.field == SendField::Recipient)),
    );
    f.render_widget(recipient_box, chunks[1]);

    let amount_line = if app.send.amount.is_empty() {
        Line::from(Span::styled("0.00", Style::default().fg(Color::DarkGray)))
    } else {
        let mut spans = vec![Span::from(app.send.amount.clone())];
        if let (Some(amount), Some(asset)) =
            (parse_amount(&app.send.amount), app.catalog.get(&app.send.asset))
        {
            spans.push(Span::styled(
                format!("  ≈ {}", format_usd(amount * asset.unit_price_usd)),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans)
    };
    let amount_box = Paragraph::new(amount_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Amount (*: Max)")
            .title_style(focus_style(app.send.field == SendField::Amount)),
    );
    f.render_widget(amount_box, chunks[2]);

    let mut fee_lines = vec![Line::from(format!(
        "Network Fee: {SEND_FEE_SDA} SDA ({SEND_FEE_USD_LABEL})"
    ))];
    if let Some(total) = app.send.total_cost() {
        fee_lines.push(Line::from(format!(
            "Total Cost: {} {}",
            format_qty(total),
            app.send.asset
        )));
    } else {
        fee_lines.push(Line::from(Span::styled(
            "Enter a recipient and a positive amount to continue",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let fees = Paragraph::new(fee_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Estimated Fee"),
    );
    f.render_widget(fees, chunks[3]);
}

fn render_send_review(f: &mut Frame, app: &App, area: Rect) {
    let total = app
        .send
        .total_cost()
        .map(format_qty)
        .unwrap_or_default();
    let review = Paragraph::new(vec![
        Line::from(format!("You'll Send:  {} {}", app.send.amount, app.send.asset)),
        Line::from(format!("To Address:   {}", app.send.recipient)),
        Line::from(format!(
            "Network Fee:  {SEND_FEE_SDA} SDA ({SEND_FEE_USD_LABEL})"
        )),
        Line::from(format!("Total Cost:   {} {}", total, app.send.asset)),
        Line::from(""),
        Line::from(Span::styled(
            "✓ Compliance Verified",
            Style::default().fg(Color::Green),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm Transaction")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(review, centered_rect(70, 60, area));
}

fn render_send_complete(f: &mut Frame, app: &App, area: Rect) {
    let card = Paragraph::new(vec![
        Line::from(format!(
            "Sent {} {} to {}",
            app.send.amount,
            app.send.asset,
            shorten_address(&app.send.recipient)
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to the dashboard",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Broadcast Successful")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(card, centered_rect(60, 40, area));
}

pub fn render_swap(f: &mut Frame, app: &App, area: Rect) {
    match app.swap.stage {
        FlowStage::Editing => render_swap_form(f, app, area),
        FlowStage::Reviewing => render_swap_review(f, app, area),
        FlowStage::Submitting => render_in_flight(f, "Swapping", "Executing order...", area),
        FlowStage::Complete => render_swap_complete(f, app, area),
    }
}

fn render_swap_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // From
            Constraint::Length(1), // Flip hint
            Constraint::Length(3), // To
            Constraint::Length(3), // Rate
            Constraint::Length(4), // Fee breakdown
            Constraint::Min(0),
        ])
        .split(area);

    render_swap_side(
        f,
        app,
        "From",
        "You Pay",
        &app.swap.from_asset,
        &app.swap.from_amount,
        app.swap.field == SwapField::FromAsset,
        app.swap.field == SwapField::FromAmount,
        chunks[0],
    );

    let flip = Paragraph::new("x: flip direction ⇅")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(flip, chunks[1]);

    render_swap_side(
        f,
        app,
        "To",
        "You Receive",
        &app.swap.to_asset,
        &app.swap.to_amount,
        app.swap.field == SwapField::ToAsset,
        false,
        chunks[2],
    );

    let calculator = QuoteCalculator::new(&app.catalog);
    let rate_line = match calculator.rate(&app.swap.from_asset, &app.swap.to_asset) {
        Ok(rate) => format!(
            "1 {} ≈ {rate:.prec$} {}",
            app.swap.from_asset,
            app.swap.to_asset,
            prec = OUTPUT_DECIMALS
        ),
        Err(_) => "—".to_string(),
    };
    let rate = Paragraph::new(rate_line)
        .block(Block::default().borders(Borders::ALL).title("Exchange Rate"));
    f.render_widget(rate, chunks[3]);

    let fees = Paragraph::new(vec![
        Line::from(format!("Swap Fee ({SWAP_FEE_LABEL}): {SWAP_FEE_USD_LABEL}")),
        Line::from("Network Fee: Included"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Fee Breakdown"));
    f.render_widget(fees, chunks[4]);
}

#[allow(clippy::too_many_arguments)]
fn render_swap_side(
    f: &mut Frame,
    app: &App,
    token_title: &str,
    amount_title: &str,
    symbol: &str,
    amount: &str,
    token_focused: bool,
    amount_focused: bool,
    area: Rect,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let token_text = match app.catalog.get(symbol) {
        Some(asset) => format!(
            "{symbol} | Balance: {}",
            format_qty(asset.balance)
        ),
        None => symbol.to_string(),
    };
    let token_box = Paragraph::new(token_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(token_title.to_string())
            .title_style(focus_style(token_focused)),
    );
    f.render_widget(token_box, halves[0]);

    let amount_line = if amount.is_empty() {
        Line::from(Span::styled("0.00", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(amount.to_string())
    };
    let amount_box = Paragraph::new(amount_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(amount_title.to_string())
            .title_style(focus_style(amount_focused)),
    );
    f.render_widget(amount_box, halves[1]);
}

fn render_swap_review(f: &mut Frame, app: &App, area: Rect) {
    let calculator = QuoteCalculator::new(&app.catalog);
    let rate_line = match calculator.rate(&app.swap.from_asset, &app.swap.to_asset) {
        Ok(rate) => format!(
            "1 {} ≈ {rate:.prec$} {}",
            app.swap.from_asset,
            app.swap.to_asset,
            prec = OUTPUT_DECIMALS
        ),
        Err(_) => "—".to_string(),
    };
    let review = Paragraph::new(vec![
        Line::from(format!(
            "You Pay:      {} {}",
            app.swap.from_amount, app.swap.from_asset
        )),
        Line::from(format!(
            "You Receive:  {} {}",
            app.swap.to_amount, app.swap.to_asset
        )),
        Line::from(format!("Rate:         {rate_line}")),
        Line::from(format!(
            "Swap Fee ({SWAP_FEE_LABEL}): {SWAP_FEE_USD_LABEL} | Network Fee: Included"
        )),
        Line::from(""),
        Line::from(Span::styled(
            "✓ Compliance Check Passed",
            Style::default().fg(Color::Green),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm Swap")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(review, centered_rect(70, 60, area));
}

fn render_swap_complete(f: &mut Frame, app: &App, area: Rect) {
    let card = Paragraph::new(vec![
        Line::from(format!(
            "You Paid:     {} {}",
            app.swap.from_amount, app.swap.from_asset
        )),
        Line::from(format!(
            "You Received: {} {}",
            app.swap.to_amount, app.swap.to_asset
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to the dashboard",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Order Executed")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(card, centered_rect(60, 40, area));
}

fn render_in_flight(f: &mut Frame, title: &str, message: &str, area: Rect) {
    let notice = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        );
    f.render_widget(notice, centered_rect(50, 30, area));
}
