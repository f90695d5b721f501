//! Frame driver
//!
//! One call to [`Game::frame`] per display refresh: sample input, tick,
//! render, and on a terminal phase notify and restart.

use crate::config::GameConfig;
use crate::renderer::Renderer;
use crate::sim::{GameEvent, InputEvent, InputQueue, SessionState, tick};

/// Receives the end-of-game message
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that only logs
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

/// Game instance holding the session, its input queue and the notifier
pub struct Game<N: Notifier> {
    state: SessionState,
    input: InputQueue,
    notifier: N,
    /// Sessions started so far, including the first
    sessions: u32,
}

impl<N: Notifier> Game<N> {
    pub fn new(config: GameConfig, notifier: N) -> Self {
        log::info!(
            "Session started: {}x{} bricks, {} lives",
            config.grid.columns,
            config.grid.rows,
            config.lives
        );
        Self {
            state: SessionState::new(config),
            input: InputQueue::new(),
            notifier,
            sessions: 1,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame
    pub fn frame(&mut self, renderer: &mut impl Renderer) -> Vec<GameEvent> {
        let input = self.input.sample(self.state.paddle.width);
        let events = tick(&mut self.state, &input);
        renderer.render(&self.state);

        if let Some(message) = self.state.phase.message() {
            self.notifier.notify(message);
            self.restart();
        }

        events
    }

    /// Replace the session with a fresh one: new grid, zero score, full lives
    pub fn restart(&mut self) {
        let config = self.state.config.clone();
        self.state = SessionState::new(config);
        self.input.clear();
        self.sessions += 1;
        log::info!("Session restarted (#{})", self.sessions);
    }
}
