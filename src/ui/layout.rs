use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, FlowStage, Screen};

use super::components::{centered_rect, render_nav_bar};
use super::dashboard::render_dashboard;
use super::flows::{render_send, render_swap};
use super::screens::{render_assistant, render_deposit, render_login, render_settings};

pub fn render_ui(f: &mut Frame, app: &mut App) {
    if app.screen == Screen::Login {
        // Login takes the whole terminal; there is no nav bar before unlock.
        render_login(f, app, f.area());
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Nav bar
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Footer
            ])
            .split(f.area());

        render_nav_bar(f, app, chunks[0]);

        match app.screen {
            Screen::Dashboard => render_dashboard(f, app, chunks[1]),
            Screen::Send => render_send(f, app, chunks[1]),
            Screen::Swap => render_swap(f, app, chunks[1]),
            Screen::Deposit => render_deposit(f, app, chunks[1]),
            Screen::Settings => render_settings(f, app, chunks[1]),
            Screen::Assistant => render_assistant(f, app, chunks[1]),
            Screen::Login => {}
        }

        let footer = Paragraph::new(footer_text(app))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, chunks[2]);
    }

    // Error overlay
    if let Some(ref error) = app.error_message {
        let area = centered_rect(60, 20, f.area());
        f.render_widget(Clear, area);
        let error_block = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Error")
                    .style(Style::default().fg(Color::Red)),
            );
        f.render_widget(error_block, area);
    }

    // Status message overlay
    if let Some(ref status) = app.status_message {
        let area = centered_rect(60, 15, f.area());
        f.render_widget(Clear, area);
        let status_block = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Status")
                    .style(Style::default().fg(Color::Green)),
            );
        f.render_widget(status_block, area);
    }
}

fn footer_text(app: &App) -> String {
    match app.screen {
        Screen::Dashboard => {
            "s: Send | w: Swap | d: Deposit | g: Settings | a: Assistant | h: Hide balances | ◄►: Switch screens | q: Quit".to_string()
        }
        Screen::Send => match app.send.stage {
            FlowStage::Editing => {
                "Tab/↑↓: Fields | ◄►: Token | *: Max | Enter: Review | Esc: Back | q: Quit".to_string()
            }
            FlowStage::Reviewing => "Enter: Confirm Transaction | Esc: Edit | q: Quit".to_string(),
            FlowStage::Submitting => "Broadcasting transaction...".to_string(),
            FlowStage::Complete => "Enter: Back to Dashboard".to_string(),
        },
        Screen::Swap => match app.swap.stage {
            FlowStage::Editing => {
                "Tab/↑↓: Fields | ◄►: Token | x: Flip direction | m: Max | Enter: Review | Esc: Back | q: Quit".to_string()
            }
            FlowStage::Reviewing => "Enter: Confirm Swap | Esc: Edit | q: Quit".to_string(),
            FlowStage::Submitting => "Executing swap...".to_string(),
            FlowStage::Complete => "Enter: Back to Dashboard".to_string(),
        },
        Screen::Deposit => {
            "◄►: Token | c: Copy address | Esc: Back | q: Quit".to_string()
        }
        Screen::Settings => {
            "↑↓: Fields | Enter/Space: Toggle | ◄►: Currency | Esc: Back | q: Quit".to_string()
        }
        Screen::Assistant => {
            "Type to ask | ↑↓: Quick action | Enter: Send / Run action | Esc: Back".to_string()
        }
        Screen::Login => String::new(),
    }
}
