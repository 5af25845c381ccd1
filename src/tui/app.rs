use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::notify::{Notification, Toasts};
use crate::product::CardProduct;
use crate::tui::grid::GridState;
use crate::tui::search::SearchState;
use crate::tui::ui;
use crate::tui::worker::{spawn_worker, FetchOutcome, FetchRequest};
use crate::view::{RequestKind, Resolution, ViewState};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Action invoked when a card's add-to-cart button is pressed
pub type AddToCart = Box<dyn FnMut(&CardProduct)>;

pub struct App {
    // Page state
    pub view: ViewState,
    pub search: SearchState,
    pub grid: GridState,
    pub toasts: Toasts,
    pub status_message: String,

    debouncer: Debouncer<String>,
    on_add_to_cart: AddToCart,

    // Channels
    request_tx: Sender<FetchRequest>,
    outcome_rx: Receiver<FetchOutcome>,
    in_flight: usize,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    /// Build the page and start loading the full catalog.
    pub fn new(source: Arc<dyn CatalogSource>, config: &Config) -> Self {
        let (request_tx, request_rx) = unbounded();
        let (outcome_tx, outcome_rx) = unbounded();
        spawn_worker(source, request_rx, outcome_tx);

        let mut app = Self {
            view: ViewState::new(),
            search: SearchState::default(),
            grid: GridState::default(),
            toasts: Toasts::new(config.toast_duration, config.max_toasts),
            status_message: "Ready".to_string(),
            debouncer: Debouncer::new(config.debounce),
            on_add_to_cart: Box::new(|product| {
                tracing::debug!(id = %product.id, name = %product.name, "add to cart pressed");
            }),
            request_tx,
            outcome_rx,
            in_flight: 0,
            should_quit: false,
        };

        app.load_all();
        app
    }

    /// Replace the add-to-cart action (a no-op by default)
    pub fn with_add_to_cart(mut self, action: impl FnMut(&CardProduct) + 'static) -> Self {
        self.on_add_to_cart = Box::new(action);
        self
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);

        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| std::io::Error::other(e.to_string()))?;

            let now = Instant::now();
            let timeout = self
                .debouncer
                .remaining(now)
                .map_or(tick_rate, |left| left.min(tick_rate));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }

            self.tick(Instant::now());

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Advance timers and apply any finished requests
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.poll(now) {
            self.search(query);
        }
        self.process_messages(now);
        self.toasts.prune(now);
    }

    /// Requests issued but not yet answered by the worker
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn debounce_pending(&self) -> bool {
        self.debouncer.is_armed()
    }

    /// Fetch the full catalog
    pub fn load_all(&mut self) {
        self.dispatch(RequestKind::LoadAll);
    }

    /// Run a search right away, bypassing the debouncer
    pub fn search(&mut self, query: String) {
        self.dispatch(RequestKind::Search(query));
    }

    fn dispatch(&mut self, kind: RequestKind) {
        let seq = self.view.begin(&kind);
        match self.request_tx.send(FetchRequest { seq, kind }) {
            Ok(()) => self.in_flight += 1,
            Err(e) => {
                tracing::error!("fetch worker is gone: {}", e);
                let kind = e.into_inner().kind;
                let resolution = self.view.resolve(
                    seq,
                    &kind,
                    Err(crate::QkartError::Network("fetch worker stopped".into())),
                );
                self.apply(resolution, Instant::now());
            }
        }
    }

    fn process_messages(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.handle_outcome(outcome, now);
        }
    }

    /// Block until every issued request has been answered or `timeout`
    /// passes. Returns whether the worker went idle.
    pub fn wait_for_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.outcome_rx.recv_timeout(left) {
                Ok(outcome) => self.handle_outcome(outcome, Instant::now()),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return false
                }
            }
        }
        true
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome, now: Instant) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let resolution = self.view.resolve(outcome.seq, &outcome.kind, outcome.result);
        self.apply(resolution, now);
    }

    fn apply(&mut self, resolution: Resolution, now: Instant) {
        match resolution {
            Resolution::Replaced(count) => {
                self.grid.reset(count);
                self.status_message = format!("{} products", count);
            }
            Resolution::NoMatches => {
                self.grid.reset(0);
                self.status_message = "0 products".to_string();
            }
            Resolution::Failed(notification) => {
                self.status_message = "Request failed".to_string();
                self.toasts.push(notification, now);
            }
            Resolution::Stale => {}
        }
    }

    // --- Input handling ---

    /// The search text changed: re-arm the debounced search with it.
    fn on_search_change(&mut self, now: Instant) {
        self.debouncer
            .trigger(self.view.search_text().to_string(), now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.clear(self.view.search_text_mut()) {
                    self.on_search_change(now);
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::F(5) => {
                self.reload(now);
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key, now);
        } else {
            self.handle_grid_key(key, now);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let text = self.view.search_text_mut();
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.insert(text, c)
            }
            KeyCode::Char('u') => self.search.clear(text),
            KeyCode::Backspace => self.search.backspace(text),
            KeyCode::Delete => self.search.delete(text),
            KeyCode::Left => {
                self.search.move_left(text);
                false
            }
            KeyCode::Right => {
                self.search.move_right(text);
                false
            }
            KeyCode::Home => {
                self.search.move_home();
                false
            }
            KeyCode::End => {
                self.search.move_end(text);
                false
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
                false
            }
            _ => false,
        };

        if changed {
            self.on_search_change(now);
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent, now: Instant) {
        let total = self.view.products().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.grid.select_up(total),
            KeyCode::Down | KeyCode::Char('j') => self.grid.select_down(total),
            KeyCode::Left | KeyCode::Char('h') => self.grid.select_left(total),
            KeyCode::Right | KeyCode::Char('l') => self.grid.select_right(total),
            KeyCode::PageUp => self.grid.page_up(total),
            KeyCode::PageDown => self.grid.page_down(total),
            KeyCode::Home => self.grid.select_first(total),
            KeyCode::End => self.grid.select_last(total),

            KeyCode::Enter | KeyCode::Char('a') => self.add_selected_to_cart(),
            KeyCode::Char('o') => self.open_selected_image(now),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                let text = self.view.search_text_mut();
                self.search.move_end(text);
                self.search.insert(text, c);
                self.on_search_change(now);
            }

            _ => {}
        }
    }

    /// Drop the query and any pending search, then fetch the full catalog
    fn reload(&mut self, now: Instant) {
        self.debouncer.cancel();
        self.search.clear(self.view.search_text_mut());
        self.toasts
            .push(Notification::info("Reloading the full catalog"), now);
        self.load_all();
    }

    /// Card under the grid cursor
    pub fn selected_card(&self) -> Option<CardProduct> {
        let index = self.grid.selected?;
        self.view.products().get(index).map(CardProduct::from)
    }

    fn add_selected_to_cart(&mut self) {
        if let Some(card) = self.selected_card() {
            (self.on_add_to_cart)(&card);
        }
    }

    fn open_selected_image(&mut self, now: Instant) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if let Err(e) = open::that_detached(&card.image) {
            tracing::warn!(url = %card.image, "failed to open image: {}", e);
            self.toasts
                .push(Notification::error(format!("Could not open {}", card.image)), now);
        }
    }
}
