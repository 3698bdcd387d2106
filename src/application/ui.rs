use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Composer;
use crate::domain::models::Event;
use crate::domain::models::Session;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Submission;

fn paste(textarea: &mut TextArea, text: &str) {
    for c in text.chars() {
        match c {
            '\n' => textarea.insert_newline(),
            '\r' => (),
            _ => textarea.insert_char(c),
        }
    }
}

fn header_line(app_state: &AppState) -> Line<'static> {
    return Line::from(vec![
        Span::styled(
            format!(" {} ", Author::Bot),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("· "),
        Span::styled(
            app_state.session_label(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = Composer::build(false);
    let mut was_awaiting = false;

    #[cfg(feature = "dev")]
    {
        paste(&mut textarea, "Find shortest path from Paris to Berlin");
    }

    loop {
        let awaiting = app_state.controller.is_awaiting_response();
        if awaiting != was_awaiting {
            Composer::set_title(&mut textarea, awaiting);
            was_awaiting = awaiting;
        }

        terminal.draw(|frame| {
            let mut typing_height = 0;
            if awaiting {
                typing_height = 1;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(typing_height),
                    Constraint::Length(Composer::height(&textarea)),
                ])
                .split(frame.size());

            frame.render_widget(Paragraph::new(header_line(app_state)), layout[0]);

            if layout[1].width != app_state.last_known_width
                || layout[1].height != app_state.last_known_height
            {
                app_state.set_rect(layout[1]);
            }

            app_state
                .bubble_list
                .render(frame, layout[1], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[1].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if awaiting {
                app_state.typing.render(frame, layout[2]);
            }

            frame.render_widget(textarea.widget(), layout[3]);
        })?;

        match events.next().await? {
            Event::ChatResponse(res) => {
                app_state.handle_chat_response(res);
            }
            Event::NewSessionResponse(res) => {
                app_state.handle_new_session_response(res);
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
            }
            Event::KeyboardPaste(text) => {
                paste(&mut textarea, &text);
            }
            Event::KeyboardNewline() => {
                textarea.insert_newline();
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLN() => {
                app_state.request_new_session(&tx)?;
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                match app_state.submit(&input_str, &tx)? {
                    Submission::Quit => {
                        break;
                    }
                    Submission::Accepted => {
                        was_awaiting = app_state.controller.is_awaiting_response();
                        textarea = Composer::build(was_awaiting);
                    }
                    Submission::Rejected => (),
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                app_state.typing.tick();
            }
            Event::UIResize() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new(Session::default());

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
