//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use std::cmp::Ordering;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::models::{Feedback, SECRET_MAX, SECRET_MIN};
use components::{render_card_framework, render_input_widget, render_stat};
use layouts::centered_rect;

const RULES: [&str; 5] = [
    "• I'll think of a number between 1 and 100",
    "• Type your guess and press Enter",
    "• I'll tell you if your guess is too high or too low",
    "• Keep guessing until you find the correct number!",
    "• Try to win in as few attempts as possible",
];

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 100, frame.area());
    let inner = render_card_framework(frame, area, " 🎯 ");

    let won = app.session.is_won();
    let has_history = !app.session.history().is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(4), // 统计
            Constraint::Length(4), // 反馈
            Constraint::Length(if won { 0 } else { 3 }), // 输入
            Constraint::Length(if has_history { 4 } else { 0 }), // 历史
            Constraint::Length(1), // 帮助
            Constraint::Length(if app.show_rules { 7 } else { 0 }), // 规则
            Constraint::Min(0),
        ])
        .split(inner);

    render_header(frame, chunks[0]);
    render_stats(frame, app, chunks[1]);
    render_feedback(frame, app, chunks[2]);
    if !won {
        render_input_widget(
            frame,
            chunks[3],
            "Your guess",
            &app.input_buffer,
            "Enter your guess...",
            Color::Indexed(99),
        );
    }
    if has_history {
        render_history(frame, app, chunks[4]);
    }
    render_help(frame, app, chunks[5]);
    if app.show_rules {
        render_rules(frame, chunks[6]);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Number Guessing Game",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Test your luck and intuition!",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let won = app.session.is_won();
    let columns = if won { 4 } else { 3 };
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, columns)))
        .split(inner);

    render_stat(
        frame,
        cells[0],
        &app.session.attempts().to_string(),
        "Attempts",
        Color::Indexed(99),
    );
    render_stat(
        frame,
        cells[1],
        &format!("{}-{}", SECRET_MIN, SECRET_MAX),
        "Range",
        Color::Green,
    );
    render_stat(
        frame,
        cells[2],
        &app.session.started_at().format("%H:%M").to_string(),
        "Started",
        Color::Cyan,
    );
    if won {
        render_stat(frame, cells[3], "🏆", "Winner!", Color::Yellow);
    }
}

fn render_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let feedback = app.session.feedback();
    let icon = match feedback {
        Feedback::TooHigh => Some(Span::styled("↓ ", Style::default().fg(Color::Red))),
        Feedback::TooLow => Some(Span::styled("↑ ", Style::default().fg(Color::Green))),
        Feedback::Won { .. } => Some(Span::styled("🏆 ", Style::default().fg(Color::Yellow))),
        Feedback::Prompt | Feedback::Invalid => None,
    };

    let mut spans: Vec<Span> = icon.into_iter().collect();
    spans.push(Span::raw(app.session.last_message()));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(Color::Blue)),
        );
    frame.render_widget(paragraph, area);
}

/// 猜中为绿色，偏小为红色，偏大为橙色
fn guess_color(ordering: Ordering) -> Color {
    match ordering {
        Ordering::Equal => Color::Green,
        Ordering::Less => Color::Red,
        Ordering::Greater => Color::Indexed(208),
    }
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for &guess in app.session.history() {
        let color = guess_color(app.session.compare(guess));
        spans.push(Span::styled(
            format!(" {} ", guess),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    let history = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Your Guesses:").borders(Borders::TOP));
    frame.render_widget(history, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.is_won() {
        "[n] New Game  [q] Quit"
    } else {
        "[Enter] Guess  [Tab] New Game  [Esc] Quit"
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn render_rules(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = RULES.iter().map(|rule| Line::from(*rule)).collect();
    let rules = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title("How to Play:").borders(Borders::TOP));
    frame.render_widget(rules, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::Config;
    use crate::random::FixedSecret;
    use crate::ui::actions::Action;

    fn app_with(secret: u32, config: &Config) -> App {
        App::new(Box::new(FixedSecret(secret)), config)
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn guess(app: &mut App, input: &str) {
        for c in input.chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::Submit);
    }

    #[test]
    fn test_initial_screen() {
        let mut app = app_with(50, &Config::default());
        let screen = draw(&mut app);

        assert!(screen.contains("Number Guessing Game"));
        assert!(screen.contains("Attempts"));
        assert!(screen.contains("1-100"));
        assert!(screen.contains("Enter your guess..."));
        assert!(screen.contains("How to Play:"));
        assert!(!screen.contains("Your Guesses:"));
        assert!(!screen.contains("Winner!"));
    }

    #[test]
    fn test_history_and_feedback() {
        let mut app = app_with(50, &Config::default());
        guess(&mut app, "70");
        let screen = draw(&mut app);

        assert!(screen.contains("Your Guesses:"));
        assert!(screen.contains(" 70 "));
        assert!(screen.contains("Too high!"));
    }

    #[test]
    fn test_won_screen_hides_input() {
        let mut app = app_with(50, &Config::default());
        guess(&mut app, "50");
        let screen = draw(&mut app);

        assert!(screen.contains("Winner!"));
        assert!(screen.contains("Congratulations!"));
        assert!(!screen.contains("Enter your guess..."));
        assert!(screen.contains("[n] New Game"));
    }

    #[test]
    fn test_rules_can_be_hidden() {
        let config = Config {
            show_rules: false,
            ..Config::default()
        };
        let mut app = app_with(50, &config);
        let screen = draw(&mut app);
        assert!(!screen.contains("How to Play:"));
    }

    #[test]
    fn test_guess_color() {
        assert_eq!(guess_color(Ordering::Equal), Color::Green);
        assert_eq!(guess_color(Ordering::Less), Color::Red);
        assert_eq!(guess_color(Ordering::Greater), Color::Indexed(208));
    }
}
