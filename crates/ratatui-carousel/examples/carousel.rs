use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_carousel::autoplay::Autoplay;
use ratatui_carousel::buttons::NavButton;
use ratatui_carousel::buttons::NavButtonKind;
use ratatui_carousel::crossterm_input::input_event_from_crossterm;
use ratatui_carousel::dots::DotGroup;
use ratatui_carousel::slider::SliderView;
use ratatui_carousel::theme::Theme;
use ratatui_carousel_core::input::InputEvent;
use ratatui_carousel_core::input::KeyCode;
use ratatui_carousel_core::state::CarouselOptions;
use ratatui_carousel_core::store::CarouselStore;
use std::io;
use std::time::Duration;
use std::time::Instant;

const SLIDES: [&str; 8] = [
    "Lorem ipsum dolor sit amet",
    "Consectetur adipiscing elit",
    "Sed do eiusmod tempor",
    "Incididunt ut labore",
    "Et dolore magna aliqua",
    "Ut enim ad minim veniam",
    "Quis nostrud exercitation",
    "Ullamco laboris nisi",
];

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    let theme = Theme::default();
    let mut store = CarouselStore::new(
        CarouselOptions::new(SLIDES.len())
            .with_visible_slides(3)
            .with_infinite(true)
            .with_playing(true),
    )
    .expect("valid carousel config");

    let slider = SliderView::new();
    let mut back = NavButton::new(NavButtonKind::Back);
    let mut next = NavButton::new(NavButtonKind::Next);
    let mut play = NavButton::new(NavButtonKind::Play);
    let dots = DotGroup::new();
    let mut autoplay = Autoplay::new(Duration::from_secs(2));

    loop {
        let mut areas = (Rect::ZERO, Rect::ZERO, Rect::ZERO, Rect::ZERO, Rect::ZERO);
        terminal.draw(|f| {
            let area = f.area();
            let [strip, controls] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(3)])
                .areas(area);

            let block = Block::default()
                .title("ratatui-carousel (←/→ move, Space play/pause, click, q quits)")
                .borders(Borders::ALL);
            let inner = block.inner(strip);
            f.render_widget(block, strip);

            let [back_a, dots_a, play_a, next_a] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(10),
                    Constraint::Min(10),
                    Constraint::Length(10),
                    Constraint::Length(10),
                ])
                .areas(controls);
            areas = (inner, back_a, dots_a, play_a, next_a);

            let buf = f.buffer_mut();
            let state = store.state();
            slider.render(inner, buf, &theme, &state, |cell, ctx, buf, theme| {
                let style = if ctx.is_current {
                    theme.accent
                } else {
                    theme.text_primary
                };
                let line = format!("[{}] {}", ctx.index, SLIDES[ctx.index]);
                buf.set_stringn(cell.x, cell.y + cell.height / 2, line, cell.width as usize, style);
            });
            back.render_ref(back_a, buf, &theme, &state);
            dots.render_ref(dots_a, buf, &theme, &state);
            play.render_ref(play_a, buf, &theme, &state);
            next.render_ref(next_a, buf, &theme, &state);
        })?;

        if crossterm::event::poll(Duration::from_millis(100))? {
            let raw = crossterm::event::read()?;
            let Some(event) = input_event_from_crossterm(raw) else {
                continue;
            };
            if let InputEvent::Key(key) = &event {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
            let (strip_a, back_a, dots_a, play_a, next_a) = areas;
            let _ = back.handle_event(&event, back_a, &mut store)
                || next.handle_event(&event, next_a, &mut store)
                || play.handle_event(&event, play_a, &mut store)
                || dots.handle_event(&event, dots_a, &mut store)
                || slider.handle_event(&event, strip_a, &mut store);
        }

        autoplay.poll(Instant::now(), &mut store);
    }
}
