//! Rendering for each page

use crate::domain::content::{
    Accent, BIRTHDAY_EMOJI, BIRTHDAY_GREETING, BIRTHDAY_LINE, BIRTHDAY_NAME, COUNTDOWN_TAGLINE,
    COUNTDOWN_TITLE, GALLERY_CLOSING, GALLERY_SIGNOFF, GALLERY_TITLE, GATE_HINT, GATE_QUESTION,
    GATE_SUCCESS, GATE_TITLE, MESSAGE_TITLE, PHOTOS, WISHES, WISHES_DONE, WISHES_PROMPT,
    WISHES_TITLE,
};
use crate::domain::types::{Stage, STAGE_COUNT};
use crate::ui::app::App;
use crate::ui::pages::{
    BirthdayPage, CountdownPage, GalleryPage, GatePage, MessagePage, Page, WishesPage,
    CONFETTI_COLORS, WISH_COLUMNS,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CONFETTI_PALETTE: [Color; CONFETTI_COLORS] = [
    Color::LightRed,
    Color::LightMagenta,
    Color::Yellow,
    Color::LightCyan,
    Color::LightGreen,
    Color::LightBlue,
];

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Gold => Color::Yellow,
        Accent::Rose => Color::LightRed,
        Accent::Violet => Color::Magenta,
        Accent::Teal => Color::Cyan,
        Accent::Sky => Color::LightBlue,
        Accent::Ruby => Color::Red,
    }
}

fn title_style() -> Style {
    Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn draw_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Page
            Constraint::Length(3), // Footer / route bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    match app.page() {
        Page::Gate(page) => draw_gate(f, chunks[1], page),
        Page::Countdown(page) => draw_countdown(f, chunks[1], page),
        Page::Birthday(page) => draw_birthday(f, chunks[1], page),
        Page::Message(page) => draw_message(f, chunks[1], page),
        Page::Wishes(page) => draw_wishes(f, chunks[1], page),
        Page::Gallery(page) => draw_gallery(f, chunks[1], page),
    }

    match app.route_bar() {
        Some(route) => draw_route_bar(f, chunks[2], route),
        None => draw_footer(f, chunks[2], app.current_stage()),
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let stage = app.current_stage();
    let furthest = app.controller().furthest_stage();

    let mut progress = Vec::with_capacity(STAGE_COUNT as usize);
    for s in Stage::ALL {
        let (symbol, style) = if s == stage {
            ("●", Style::default().fg(Color::LightMagenta))
        } else if s <= furthest {
            ("●", muted())
        } else {
            ("○", muted())
        };
        progress.push(Span::styled(format!("{} ", symbol), style));
    }

    let mut spans = vec![
        Span::styled("Birthday Journey ", title_style()),
        Span::raw("| "),
    ];
    spans.extend(progress);
    spans.extend([
        Span::raw("| "),
        Span::styled(stage.route(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("  {}/{}", stage.rank(), STAGE_COUNT),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("  {}", env!("GIT_HASH")), muted()),
    ]);

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, stage: Stage) {
    let hint = match stage {
        Stage::DateGate => "type YYYY-MM-DD, Enter to submit",
        Stage::Countdown => "s skip, Enter when it's time",
        Stage::Birthday | Stage::Message => "Enter to continue",
        Stage::Wishes => "arrows select, Enter/space or 1-6 reveal",
        Stage::Gallery => "←/→ browse, space play/pause, 1-6 jump",
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(hint, Style::default().fg(Color::Gray)),
        Span::styled("  | : route | q quit", muted()),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn draw_route_bar(f: &mut Frame, area: Rect, route: &str) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(":", Style::default().fg(Color::Yellow)),
        Span::raw(route),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .title(" Go to ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(bar, area);
}

fn page_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), title_style()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
}

fn draw_gate(f: &mut Frame, area: Rect, page: &GatePage) {
    let input_style = if page.success_visible() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let placeholder = if page.input().is_empty() { "YYYY-MM-DD" } else { page.input() };
    let submit_style = if page.can_submit() { Style::default().fg(Color::LightMagenta) } else { muted() };

    let mut lines = vec![
        Line::from(""),
        Line::from(GATE_QUESTION),
        Line::from(""),
        Line::from(Span::styled(format!("[ {:<10} ]", placeholder), input_style)),
        Line::from(Span::styled("Enter ↵ Submit", submit_style)),
        Line::from(""),
    ];
    if page.hint_visible() {
        lines.push(Line::from(Span::styled(GATE_HINT, Style::default().fg(Color::LightRed))));
    }
    if page.success_visible() {
        lines.push(Line::from(Span::styled(GATE_SUCCESS, Style::default().fg(Color::Green))));
    }

    let gate = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(page_block(GATE_TITLE));
    f.render_widget(gate, area);
}

fn draw_countdown(f: &mut Frame, area: Rect, page: &CountdownPage) {
    let remaining = page.remaining();
    let unit = |value: u64, label: &str| {
        vec![
            Span::styled(format!("{:02}", value), Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}   ", label), muted()),
        ]
    };

    let mut clock = Vec::new();
    clock.extend(unit(remaining.days, "days"));
    clock.extend(unit(remaining.hours, "hours"));
    clock.extend(unit(remaining.minutes, "minutes"));
    clock.extend(unit(remaining.seconds, "seconds"));

    let mut lines = vec![
        Line::from(""),
        Line::from(clock),
        Line::from(""),
        Line::from(Span::styled(COUNTDOWN_TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    if page.celebration_ready() {
        lines.push(Line::from(Span::styled(
            "It's Time! 🎉  (Enter)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled("Skip countdown (s)", muted())));

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(page_block(COUNTDOWN_TITLE));
    f.render_widget(countdown, area);
}

fn draw_birthday(f: &mut Frame, area: Rect, page: &BirthdayPage) {
    let block = page_block("🎉");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Confetti falls behind the greeting
    let buf = f.buffer_mut();
    if inner.width > 0 && inner.height > 0 {
        for piece in page.confetti() {
            let x = inner.x + (piece.column * inner.width as f32) as u16 % inner.width;
            let y = inner.y + (piece.height_at(page.frame()) * inner.height as f32) as u16 % inner.height;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("▪").set_fg(CONFETTI_PALETTE[piece.color]);
            }
        }
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(BIRTHDAY_GREETING, title_style())),
        Line::from(Span::styled(BIRTHDAY_NAME, title_style())),
        Line::from(""),
    ];
    if page.message_visible() {
        lines.push(Line::from(BIRTHDAY_LINE));
        lines.push(Line::from(BIRTHDAY_EMOJI.join(" ")));
        lines.push(Line::from(""));
    }
    if page.button_visible() {
        lines.push(Line::from(Span::styled(
            "Continue Your Journey 💝  (Enter)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }

    let text_height = lines.len() as u16;
    let text_area = Rect {
        y: inner.y + inner.height.saturating_sub(text_height) / 2,
        height: text_height.min(inner.height),
        ..inner
    };
    let greeting = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    f.render_widget(greeting, text_area);
}

fn draw_message(f: &mut Frame, area: Rect, page: &MessagePage) {
    let mut lines = vec![Line::from("")];
    for paragraph in page.visible_paragraphs() {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }
    if page.button_visible() {
        lines.push(Line::from(Span::styled(
            "Continue to Wishes 💝  (Enter)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }

    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(page_block(MESSAGE_TITLE));
    f.render_widget(message, area);
}

fn draw_wishes(f: &mut Frame, area: Rect, page: &WishesPage) {
    let block = page_block(WISHES_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = WISHES.len().div_ceil(WISH_COLUMNS);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Min(0),    // Cards
            Constraint::Length(2), // Continue
        ])
        .split(inner);

    let prompt = Paragraph::new(Span::styled(WISHES_PROMPT, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Center);
    f.render_widget(prompt, chunks[0]);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(chunks[1]);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, WISH_COLUMNS as u32); WISH_COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * WISH_COLUMNS + col;
            if index < WISHES.len() {
                draw_wish_card(f, *cell, index, page);
            }
        }
    }

    if page.all_revealed() {
        let done = Paragraph::new(Line::from(vec![
            Span::styled(WISHES_DONE, Style::default().fg(Color::Gray)),
            Span::styled("  View Our Memories 📸 (Enter)", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(done, chunks[2]);
    }
}

fn draw_wish_card(f: &mut Frame, area: Rect, index: usize, page: &WishesPage) {
    let card = WISHES[index];
    let color = accent_color(card.accent);
    let border = if index == page.selected() {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let body = if page.is_revealed(index) {
        Paragraph::new(card.content).style(Style::default().fg(Color::White))
    } else {
        Paragraph::new(vec![
            Line::from(Span::styled(card.icon, Style::default().fg(color))),
            Line::from(Span::styled(format!("press {}", index + 1), muted())),
        ])
    };

    let widget = body
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", card.title))
                .borders(Borders::ALL)
                .border_style(border),
        );
    f.render_widget(widget, area);
}

fn draw_gallery(f: &mut Frame, area: Rect, page: &GalleryPage) {
    let block = page_block(GALLERY_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Photo
            Constraint::Length(2), // Controls
            Constraint::Length(3), // Closing
        ])
        .split(inner);

    let photo = PHOTOS[page.current()];
    let slide = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(photo.caption, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(photo.date, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(Span::styled(photo.url, muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(muted()));
    f.render_widget(slide, chunks[0]);

    if page.controls_visible() {
        let mut dots = vec![Span::raw("◀  ")];
        for i in 0..PHOTOS.len() {
            let style = if i == page.current() { Style::default().fg(Color::LightMagenta) } else { muted() };
            dots.push(Span::styled(if i == page.current() { "● " } else { "○ " }, style));
        }
        dots.push(Span::raw(" ▶   "));
        dots.push(Span::styled(
            if page.playing() { "⏸ pause" } else { "▶ play" },
            Style::default().fg(Color::Cyan),
        ));
        f.render_widget(Paragraph::new(Line::from(dots)).alignment(Alignment::Center), chunks[1]);
    }

    let closing = Paragraph::new(vec![
        Line::from(Span::styled(GALLERY_CLOSING, title_style())),
        Line::from(Span::styled(GALLERY_SIGNOFF, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(closing, chunks[2]);
}
