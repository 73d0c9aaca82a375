use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::canvas::StrokeCanvas;
use crate::celebration::CelebrationAnimation;
use crate::config::Config;
use crate::content::{Content, TracingGlyph};
use crate::feedback::{FeedbackSink, Sound};
use crate::games::matching::{self, MatchingDeck};
use crate::games::tracing::TracingPrompts;
use crate::games::{GameKind, Question, QuizQuestions};
use crate::match_grid::{FlipOutcome, Resolution};
use crate::pacing::{Delay, Pacing};
use crate::round::{Advance, AnswerOutcome, Phase, RoundSession};
use crate::runtime::GameEvent;
use crate::ui::layout;
use crate::util::{matching_stars, quiz_stars};

const MENU_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Start,
    Playing,
    Complete,
}

/// The core component behind the screen currently being played
pub enum ActiveGame {
    Quiz {
        session: RoundSession<Question, QuizQuestions>,
    },
    Tracing {
        session: RoundSession<TracingGlyph, TracingPrompts>,
        canvas: StrokeCanvas,
    },
    Matching {
        deck: MatchingDeck,
        cursor: usize,
    },
}

/// Binds input and timer expiry to the game cores.
///
/// Every time-dependent call takes `now` so the event loop (or a test) owns the
/// clock.
pub struct App {
    config: Config,
    pacing: Pacing,
    content: Arc<Content>,
    pub state: AppState,
    pub menu_index: usize,
    kind: Option<GameKind>,
    game: Option<ActiveGame>,
    pub celebration: CelebrationAnimation,
    shake: Delay,
    wrong_choice: Option<usize>,
    advance: Delay,
    feedback: Box<dyn FeedbackSink>,
    viewport: Rect,
    frame: u64,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, content: Arc<Content>, feedback: Box<dyn FeedbackSink>) -> Self {
        let config = config.sanitized();
        let pacing = Pacing::from(&config);
        Self {
            celebration: CelebrationAnimation::new(pacing.celebration),
            config,
            pacing,
            content,
            state: AppState::Menu,
            menu_index: 0,
            kind: None,
            game: None,
            shake: Delay::default(),
            wrong_choice: None,
            advance: Delay::default(),
            feedback,
            viewport: Rect::new(0, 0, 80, 24),
            frame: 0,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: GameEvent, now: Instant) {
        match event {
            GameEvent::Tick => self.on_tick(now),
            GameEvent::Resize => {}
            GameEvent::Key(key) => self.on_key(key, now),
            GameEvent::Mouse(mouse) => self.on_mouse(mouse, now),
        }
    }

    /// Fires whichever deadlines have passed
    pub fn on_tick(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);
        self.celebration.update(now);

        if self.shake.fire(now) {
            self.wrong_choice = None;
        }
        if self.advance.fire(now) {
            self.advance_game(now);
        }
    }

    /// Sets the area hit-testing works against, same as the last drawn frame
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
    }

    /// Selects a game and shows its start screen
    pub fn launch(&mut self, kind: GameKind) {
        self.clear_timers();
        self.kind = Some(kind);
        if let Some(pos) = GameKind::ALL.iter().position(|k| *k == kind) {
            self.menu_index = pos;
        }
        self.game = Some(self.new_game(kind));
        self.state = AppState::Start;
        debug!(game = %kind, "game selected");
    }

    fn new_game(&self, kind: GameKind) -> ActiveGame {
        let rounds = self.config.total_rounds;
        match kind {
            GameKind::Tracing => ActiveGame::Tracing {
                session: RoundSession::new(rounds, TracingPrompts::new(self.content.clone())),
                canvas: StrokeCanvas::new(),
            },
            GameKind::Matching => ActiveGame::Matching {
                deck: matching::deal(&self.content, self.config.matching_pairs, &mut rand::thread_rng()),
                cursor: 0,
            },
            quiz => {
                let game = quiz.quiz().unwrap_or(crate::games::QuizGame::Counting);
                ActiveGame::Quiz {
                    session: RoundSession::new(
                        rounds,
                        QuizQuestions::new(game, self.content.clone(), self.config.difficulty),
                    ),
                }
            }
        }
    }

    /// Starts the selected game from its first round, also used for "play again"
    pub fn begin(&mut self) {
        let Some(kind) = self.kind else {
            return;
        };
        self.clear_timers();

        match &mut self.game {
            Some(ActiveGame::Quiz { session }) => session.start(),
            Some(ActiveGame::Tracing { session, canvas }) => {
                canvas.clear();
                session.start();
            }
            Some(ActiveGame::Matching { deck, cursor }) => {
                if deck.moves() > 0 || !deck.revealed().is_empty() {
                    *deck = matching::deal(&self.content, self.config.matching_pairs, &mut rand::thread_rng());
                }
                *cursor = 0;
            }
            None => return,
        }
        self.feedback.play(Sound::Click);
        self.state = AppState::Playing;
        info!(game = %kind, "game started");
    }

    pub fn back_to_menu(&mut self) {
        self.clear_timers();
        self.game = None;
        self.state = AppState::Menu;
    }

    fn clear_timers(&mut self) {
        self.shake.cancel();
        self.advance.cancel();
        self.wrong_choice = None;
        self.celebration.stop();
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.on_menu_key(key),
            AppState::Start => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.begin(),
                KeyCode::Esc => self.back_to_menu(),
                _ => {}
            },
            AppState::Playing => {
                if key.code == KeyCode::Esc {
                    self.back_to_menu();
                } else {
                    self.on_playing_key(key, now);
                }
            }
            AppState::Complete => match key.code {
                KeyCode::Enter => self.begin(),
                KeyCode::Esc => self.back_to_menu(),
                _ => {}
            },
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        let count = GameKind::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left => self.menu_index = (self.menu_index + count - 1) % count,
            KeyCode::Right => self.menu_index = (self.menu_index + 1) % count,
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(MENU_COLUMNS),
            KeyCode::Down => {
                self.menu_index = (self.menu_index + MENU_COLUMNS).min(count - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.launch(GameKind::ALL[self.menu_index]),
            KeyCode::Char(c) => {
                if let Some(kind) = digit_choice(c).and_then(|i| GameKind::ALL.get(i)) {
                    self.launch(*kind);
                }
            }
            _ => {}
        }
    }

    fn on_playing_key(&mut self, key: KeyEvent, now: Instant) {
        match &mut self.game {
            Some(ActiveGame::Quiz { .. }) => {
                if let KeyCode::Char(c) = key.code {
                    if let Some(choice) = digit_choice(c) {
                        self.choose(choice, now);
                    }
                }
            }
            Some(ActiveGame::Tracing { session, canvas }) => match key.code {
                KeyCode::Enter => self.finish_tracing(now),
                KeyCode::Char('c') => {
                    if session.phase() == Phase::AwaitingAnswer {
                        canvas.clear();
                    }
                }
                _ => {}
            },
            Some(ActiveGame::Matching { deck, cursor }) => {
                let count = deck.cards().len();
                let cols = layout::card_columns(count);
                match key.code {
                    KeyCode::Left => *cursor = cursor.saturating_sub(1),
                    KeyCode::Right => *cursor = (*cursor + 1).min(count.saturating_sub(1)),
                    KeyCode::Up => *cursor = cursor.saturating_sub(cols),
                    KeyCode::Down => {
                        if *cursor + cols < count {
                            *cursor += cols;
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let pos = *cursor;
                        self.flip_card(pos, now);
                    }
                    _ => {}
                }
            }
            None => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        let left_down = mouse.kind == MouseEventKind::Down(MouseButton::Left);

        match self.state {
            AppState::Menu if left_down => {
                let grid = layout::menu_areas(self.viewport).grid;
                let rects = layout::menu_rects(grid, GameKind::ALL.len());
                if let Some(i) = layout::hit(&rects, column, row) {
                    self.launch(GameKind::ALL[i]);
                }
            }
            AppState::Start if left_down => self.begin(),
            AppState::Playing => self.on_playing_mouse(mouse, now),
            _ => {}
        }
    }

    fn on_playing_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        let left_down = mouse.kind == MouseEventKind::Down(MouseButton::Left);
        let viewport = self.viewport;

        match &mut self.game {
            Some(ActiveGame::Quiz { session }) if left_down => {
                let count = session.question().map_or(0, |q| q.option_count());
                let areas = layout::playing_areas(viewport, count);
                let rects = layout::option_rects(areas.options, count);
                if let Some(choice) = layout::hit(&rects, column, row) {
                    self.choose(choice, now);
                }
            }
            Some(ActiveGame::Tracing { session, canvas }) => {
                let rect = layout::canvas_rect(layout::playing_areas(viewport, 0).stage);
                let point = layout::cell_to_canvas_point(rect, column, row);
                let drawing = session.phase() == Phase::AwaitingAnswer;
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let (true, Some(p)) = (drawing, point) {
                            canvas.begin_stroke(p);
                        }
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        if let Some(p) = point {
                            canvas.extend_stroke(p);
                        }
                    }
                    MouseEventKind::Up(MouseButton::Left) => canvas.end_stroke(),
                    _ => {}
                }
            }
            Some(ActiveGame::Matching { deck, .. }) if left_down => {
                let stage = layout::playing_areas(viewport, 0).stage;
                let rects = layout::card_rects(stage, deck.cards().len());
                if let Some(pos) = layout::hit(&rects, column, row) {
                    self.flip_card(pos, now);
                }
            }
            _ => {}
        }
    }

    /// Picks answer `choice` (zero based) in a quiz game
    pub fn choose(&mut self, choice: usize, now: Instant) {
        let Some(ActiveGame::Quiz { session }) = &mut self.game else {
            return;
        };
        let Some(question) = session.question() else {
            return;
        };
        if choice >= question.option_count() {
            return;
        }
        let is_correct = question.is_correct(choice);

        match session.submit_answer(is_correct) {
            AnswerOutcome::Ignored => {}
            AnswerOutcome::Correct => self.on_correct(now),
            AnswerOutcome::Wrong => self.on_wrong(Some(choice), now),
        }
    }

    /// "Done" on the tracing screen, scores only if something was drawn
    pub fn finish_tracing(&mut self, now: Instant) {
        let Some(ActiveGame::Tracing { session, canvas }) = &mut self.game else {
            return;
        };
        if canvas.is_capturing() {
            canvas.end_stroke();
        }

        match session.submit_answer(canvas.has_content()) {
            AnswerOutcome::Ignored => {}
            AnswerOutcome::Correct => self.on_correct(now),
            AnswerOutcome::Wrong => self.on_wrong(None, now),
        }
    }

    /// Flips the card at layout position `pos`
    pub fn flip_card(&mut self, pos: usize, now: Instant) {
        let Some(ActiveGame::Matching { deck, cursor }) = &mut self.game else {
            return;
        };
        let Some(id) = deck.cards().get(pos).map(|c| c.id) else {
            return;
        };
        *cursor = pos;

        match deck.flip(id) {
            FlipOutcome::Ignored => {}
            FlipOutcome::Revealed => self.feedback.play(Sound::Click),
            FlipOutcome::PairPending => {
                let delay = if deck.pending_is_match() == Some(true) {
                    self.pacing.match_delay
                } else {
                    self.pacing.mismatch_delay
                };
                self.feedback.play(Sound::Click);
                self.advance.arm(now, delay);
            }
        }
    }

    fn on_correct(&mut self, now: Instant) {
        self.feedback.play(Sound::Correct);
        self.shake.cancel();
        self.wrong_choice = None;
        self.celebration
            .start(now, self.viewport.width, self.viewport.height);
        self.advance.arm(now, self.pacing.celebration);
    }

    fn on_wrong(&mut self, choice: Option<usize>, now: Instant) {
        self.feedback.play(Sound::Wrong);
        self.wrong_choice = choice;
        self.shake.arm(now, self.pacing.shake);
    }

    fn advance_game(&mut self, now: Instant) {
        let finished = match &mut self.game {
            Some(ActiveGame::Quiz { session }) => {
                session.acknowledge_resolution() == Advance::Complete
            }
            Some(ActiveGame::Tracing { session, canvas }) => match session.acknowledge_resolution() {
                Advance::NextRound(_) => {
                    canvas.clear();
                    false
                }
                Advance::Complete => true,
                Advance::Ignored => false,
            },
            Some(ActiveGame::Matching { deck, .. }) => match deck.resolve() {
                Resolution::Match => {
                    self.feedback.play(Sound::Correct);
                    deck.is_complete()
                }
                Resolution::Mismatch => {
                    self.feedback.play(Sound::Wrong);
                    false
                }
                Resolution::Ignored => false,
            },
            None => false,
        };

        if finished {
            self.finish(now);
        }
    }

    fn finish(&mut self, now: Instant) {
        self.state = AppState::Complete;
        self.celebration
            .start(now, self.viewport.width, self.viewport.height);
        info!(
            game = ?self.kind,
            stars = ?self.stars(),
            "game complete"
        );
    }

    /// One to three stars once the game is complete
    pub fn stars(&self) -> Option<u8> {
        match self.game.as_ref()? {
            ActiveGame::Quiz { session } if session.is_complete() => {
                Some(quiz_stars(session.score(), session.total_rounds()))
            }
            ActiveGame::Tracing { session, .. } if session.is_complete() => {
                Some(quiz_stars(session.score(), session.total_rounds()))
            }
            ActiveGame::Matching { deck, .. } if deck.is_complete() => {
                Some(matching_stars(deck.moves(), deck.pairs()))
            }
            _ => None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn kind(&self) -> Option<GameKind> {
        self.kind
    }

    pub fn game(&self) -> Option<&ActiveGame> {
        self.game.as_ref()
    }

    /// The option that was just answered wrong, while it is shaking
    pub fn wrong_choice(&self) -> Option<usize> {
        self.wrong_choice
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_armed()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// '1' is the first option
fn digit_choice(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| *d >= 1)
        .map(|d| d as usize - 1)
}
