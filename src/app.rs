//! Application state management for the NASA viewer
//!
//! This module contains the main application state: the active section,
//! per-section fetch lifecycles, keyboard handling, and the trigger
//! pipeline that consults the session cache before spawning network
//! fetches. Fetch results arrive over a tokio channel and are applied
//! between renders, guarded by per-section generation tokens so a stale
//! response can never overwrite newer state.

use chrono::{NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::cache::SessionCache;
use crate::cli::StartupConfig;
use crate::data::{Apod, MarsPhoto, NasaClient, NeoFeed, Rover};
use crate::favorites::FavoriteStore;
use crate::fetch::{Debouncer, FetchMessage, FetchState, Generation};
use crate::validation::validate_sol;

/// Quiet period between the last sol keystroke and the Mars fetch
const SOL_DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

/// Capacity of the fetch result channel
const FETCH_CHANNEL_CAPACITY: usize = 32;

/// Message shown when the picture of the day cannot be loaded
const APOD_ERROR_MESSAGE: &str = "Error loading APOD.";

/// Message shown when a Mars photo query fails
const MARS_ERROR_MESSAGE: &str = "Failed to load Mars photos.";

/// Message shown when the asteroid feed cannot be loaded
const NEO_ERROR_MESSAGE: &str = "Failed to fetch asteroid data.";

/// Message shown when the user steps the picture date past today
const FUTURE_DATE_MESSAGE: &str = "Cannot select a future date.";

/// The viewer's sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Astronomy picture of the day
    Apod,
    /// Mars rover photo gallery
    Rovers,
    /// Near-Earth object feed
    Asteroids,
    /// Saved favorites
    Favorites,
}

impl Section {
    /// All sections in tab order.
    pub fn all() -> [Section; 4] {
        [
            Section::Apod,
            Section::Rovers,
            Section::Asteroids,
            Section::Favorites,
        ]
    }

    /// Tab bar title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Apod => "Picture",
            Section::Rovers => "Rovers",
            Section::Asteroids => "Asteroids",
            Section::Favorites => "Favorites",
        }
    }

    /// The next section in tab order, wrapping around.
    pub fn next(&self) -> Section {
        match self {
            Section::Apod => Section::Rovers,
            Section::Rovers => Section::Asteroids,
            Section::Asteroids => Section::Favorites,
            Section::Favorites => Section::Apod,
        }
    }

    /// The previous section in tab order, wrapping around.
    pub fn prev(&self) -> Section {
        match self {
            Section::Apod => Section::Favorites,
            Section::Rovers => Section::Apod,
            Section::Asteroids => Section::Rovers,
            Section::Favorites => Section::Asteroids,
        }
    }

    /// Looks up a section by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Section> {
        match name.to_lowercase().as_str() {
            "apod" | "picture" => Some(Section::Apod),
            "rovers" => Some(Section::Rovers),
            "asteroids" => Some(Section::Asteroids),
            "favorites" => Some(Section::Favorites),
            _ => None,
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Currently active section
    pub section: Section,
    /// Picture of the day state
    pub apod: FetchState<Apod>,
    /// Mars rover photos state
    pub mars: FetchState<Vec<MarsPhoto>>,
    /// Near-Earth object feed state
    pub neo: FetchState<NeoFeed>,
    /// Date shown in the picture section
    pub apod_date: NaiveDate,
    /// Message set when the user tries to step past today
    pub apod_date_error: Option<String>,
    /// Rover the photo query targets
    pub rover: Rover,
    /// Raw text of the sol input field
    pub sol_input: String,
    /// Index of the selected photo in the rover gallery
    pub photo_index: usize,
    /// Index of the selected favorite
    pub favorite_index: usize,
    /// Saved favorites
    pub favorites: FavoriteStore,
    /// Item shown in the detail overlay, if open
    pub detail: Option<Value>,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Session cache consulted before every fetch
    cache: SessionCache,
    /// NASA API client
    client: NasaClient,
    /// Debounce timer for the sol input
    sol_debounce: Debouncer,
    /// Generation token for picture fetches
    apod_generation: Generation,
    /// Generation token for Mars photo fetches
    mars_generation: Generation,
    /// Generation token for asteroid feed fetches
    neo_generation: Generation,
    /// Sender cloned into spawned fetch tasks
    fetch_tx: mpsc::Sender<FetchMessage>,
    /// Receiver drained between renders
    fetch_rx: mpsc::Receiver<FetchMessage>,
}

/// Today's date in UTC, matching the dates NASA keys its feeds by.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Cache key for a picture of the day entry
fn apod_key(date: NaiveDate) -> String {
    format!("apod-{}", date.format("%Y-%m-%d"))
}

/// Cache key for a Mars photo query
fn mars_key(rover: Rover, sol: u32) -> String {
    format!("mars-{}-{}", rover.as_str(), sol)
}

/// Cache key for a day's asteroid feed
fn neo_key(date: NaiveDate) -> String {
    format!("neo-{}", date.format("%Y-%m-%d"))
}

impl App {
    /// Creates a new App instance over explicitly constructed stores.
    ///
    /// Construction performs no I/O and spawns nothing; the caller kicks
    /// off the first fetch with [`App::activate`] once a runtime is up.
    pub fn new(client: NasaClient, cache: SessionCache, favorites: FavoriteStore) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel(FETCH_CHANNEL_CAPACITY);
        Self {
            section: Section::Apod,
            apod: FetchState::new(),
            mars: FetchState::new(),
            neo: FetchState::new(),
            apod_date: today(),
            apod_date_error: None,
            rover: Rover::Curiosity,
            sol_input: "1000".to_string(),
            photo_index: 0,
            favorite_index: 0,
            favorites,
            detail: None,
            show_help: false,
            should_quit: false,
            cache,
            client,
            sol_debounce: Debouncer::new(SOL_DEBOUNCE_DELAY),
            apod_generation: Generation::new(),
            mars_generation: Generation::new(),
            neo_generation: Generation::new(),
            fetch_tx,
            fetch_rx,
        }
    }

    /// Creates a new App instance with CLI startup options applied.
    pub fn with_startup_config(
        config: StartupConfig,
        client: NasaClient,
        cache: SessionCache,
        favorites: FavoriteStore,
    ) -> Self {
        let mut app = Self::new(client, cache, favorites);
        app.section = config.section;
        app.rover = config.rover;
        if let Some(sol) = config.sol {
            app.sol_input = sol.to_string();
        }
        app
    }

    /// Triggers the fetch for the currently active section.
    ///
    /// Called once at startup and again on every section activation and
    /// manual refresh. Must run inside the tokio runtime, since a cache
    /// miss spawns a fetch task.
    pub fn activate(&mut self) {
        match self.section {
            Section::Apod => self.trigger_apod(),
            Section::Rovers => self.trigger_mars(),
            Section::Asteroids => self.trigger_neo(),
            Section::Favorites => {}
        }
    }

    /// Switches to the given section.
    ///
    /// The departed section's generation is bumped so an in-flight fetch
    /// for it resolves into nothing, and any pending sol debounce is
    /// cancelled with it.
    pub fn select_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        self.leave_current_section();
        self.section = section;
        self.activate();
    }

    /// Invalidates in-flight work for the section being left.
    fn leave_current_section(&mut self) {
        match self.section {
            Section::Apod => {
                self.apod_generation.next();
            }
            Section::Rovers => {
                self.mars_generation.next();
                self.sol_debounce.cancel();
            }
            Section::Asteroids => {
                self.neo_generation.next();
            }
            Section::Favorites => {}
        }
    }

    /// Starts a picture-of-the-day fetch for the current date.
    ///
    /// A fresh cache entry resolves synchronously with no loading state;
    /// otherwise a task is spawned and tagged with a new generation.
    pub fn trigger_apod(&mut self) {
        let generation = self.apod_generation.next();
        let key = apod_key(self.apod_date);

        if let Some(apod) = self.cache.get::<Apod>(&key) {
            self.apod.resolve(apod);
            return;
        }

        self.apod.begin();
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        let date = self.apod_date;
        tokio::spawn(async move {
            let result = client.fetch_apod(Some(date)).await;
            let _ = tx
                .send(FetchMessage::Apod {
                    generation,
                    key,
                    result,
                })
                .await;
        });
    }

    /// Starts a Mars photo fetch for the current rover and sol input.
    ///
    /// The raw sol text is validated first; a rejected input fails the
    /// section with the validation message and no network call is made.
    pub fn trigger_mars(&mut self) {
        self.sol_debounce.cancel();
        let generation = self.mars_generation.next();

        let sol = match validate_sol(self.rover.as_str(), &self.sol_input) {
            Ok(sol) => sol,
            Err(err) => {
                self.mars.fail(err.to_string());
                return;
            }
        };

        let key = mars_key(self.rover, sol);
        if let Some(photos) = self.cache.get::<Vec<MarsPhoto>>(&key) {
            self.photo_index = 0;
            self.mars.resolve(photos);
            return;
        }

        self.mars.begin();
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        let rover = self.rover;
        tokio::spawn(async move {
            let result = client.fetch_mars_photos(rover.as_str(), sol).await;
            let _ = tx
                .send(FetchMessage::MarsPhotos {
                    generation,
                    key,
                    result,
                })
                .await;
        });
    }

    /// Starts an asteroid feed fetch for today.
    pub fn trigger_neo(&mut self) {
        let generation = self.neo_generation.next();
        let date = today();
        let key = neo_key(date);

        if let Some(feed) = self.cache.get::<NeoFeed>(&key) {
            self.neo.resolve(feed);
            return;
        }

        self.neo.begin();
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_neo_feed(date, date).await;
            let _ = tx
                .send(FetchMessage::NeoFeed {
                    generation,
                    key,
                    result,
                })
                .await;
        });
    }

    /// Applies a completed fetch, discarding it if its generation is stale.
    ///
    /// Successful payloads are written to the cache under the key the task
    /// carried; failures surface as the section's fixed message rather
    /// than the transport error.
    pub fn apply(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Apod {
                generation,
                key,
                result,
            } => {
                if !self.apod_generation.accepts(generation) {
                    return;
                }
                match result {
                    Ok(apod) => {
                        self.cache.put(&key, &apod);
                        self.apod.resolve(apod);
                    }
                    Err(_) => self.apod.fail(APOD_ERROR_MESSAGE),
                }
            }
            FetchMessage::MarsPhotos {
                generation,
                key,
                result,
            } => {
                if !self.mars_generation.accepts(generation) {
                    return;
                }
                match result {
                    Ok(photos) => {
                        self.cache.put(&key, &photos);
                        self.photo_index = 0;
                        self.mars.resolve(photos);
                    }
                    Err(_) => self.mars.fail(MARS_ERROR_MESSAGE),
                }
            }
            FetchMessage::NeoFeed {
                generation,
                key,
                result,
            } => {
                if !self.neo_generation.accepts(generation) {
                    return;
                }
                match result {
                    Ok(feed) => {
                        self.cache.put(&key, &feed);
                        self.neo.resolve(feed);
                    }
                    Err(_) => self.neo.fail(NEO_ERROR_MESSAGE),
                }
            }
        }
    }

    /// Drains and applies all completed fetches without blocking.
    pub fn poll_fetch_messages(&mut self) {
        while let Ok(message) = self.fetch_rx.try_recv() {
            self.apply(message);
        }
    }

    /// Fires the debounced Mars fetch once the sol input has gone quiet.
    ///
    /// Called from the event loop on every iteration.
    pub fn tick(&mut self) {
        if self.sol_debounce.ready() && self.section == Section::Rovers {
            self.trigger_mars();
        }
    }

    /// Steps the picture date back one day and refetches.
    pub fn apod_prev_day(&mut self) {
        if let Some(prev) = self.apod_date.pred_opt() {
            self.apod_date = prev;
            self.apod_date_error = None;
            self.trigger_apod();
        }
    }

    /// Steps the picture date forward one day, refusing to pass today.
    pub fn apod_next_day(&mut self) {
        let Some(next) = self.apod_date.succ_opt() else {
            return;
        };
        if next > today() {
            self.apod_date_error = Some(FUTURE_DATE_MESSAGE.to_string());
            return;
        }
        self.apod_date = next;
        self.apod_date_error = None;
        self.trigger_apod();
    }

    /// Jumps the picture date to today and refetches.
    pub fn apod_jump_to_today(&mut self) {
        self.apod_date = today();
        self.apod_date_error = None;
        self.trigger_apod();
    }

    /// The item the cursor is on in the active section, as a JSON value.
    ///
    /// This is what gets bookmarked or shown in the detail overlay; using
    /// the serialized form keeps one code path for all three payload
    /// shapes, favorites included.
    pub fn current_item(&self) -> Option<Value> {
        match self.section {
            Section::Apod => self
                .apod
                .data
                .as_ref()
                .and_then(|apod| serde_json::to_value(apod).ok()),
            Section::Rovers => self
                .mars
                .data
                .as_ref()
                .and_then(|photos| photos.get(self.photo_index))
                .and_then(|photo| serde_json::to_value(photo).ok()),
            Section::Asteroids => None,
            Section::Favorites => self.favorites.items().get(self.favorite_index).cloned(),
        }
    }

    /// Toggles the favorite state of the item under the cursor.
    fn toggle_current_favorite(&mut self) {
        if let Some(item) = self.current_item() {
            self.favorites.toggle(&item);
            // Keep the favorites cursor on the list after a removal
            self.favorite_index = self
                .favorite_index
                .min(self.favorites.len().saturating_sub(1));
        }
    }

    /// Opens the detail overlay for the item under the cursor.
    fn open_detail(&mut self) {
        self.detail = self.current_item();
    }

    /// Number of rows the cursor can move over in the active section.
    fn selection_len(&self) -> usize {
        match self.section {
            Section::Rovers => self.mars.data.as_ref().map_or(0, Vec::len),
            Section::Favorites => self.favorites.len(),
            _ => 0,
        }
    }

    fn selection_index(&mut self) -> &mut usize {
        match self.section {
            Section::Favorites => &mut self.favorite_index,
            _ => &mut self.photo_index,
        }
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.selection_len();
        if count == 0 {
            return;
        }
        let index = self.selection_index();
        if *index == 0 {
            *index = count - 1;
        } else {
            *index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.selection_len();
        if count == 0 {
            return;
        }
        let index = self.selection_index();
        *index = (*index + 1) % count;
    }

    /// Appends a character to the sol input and restarts the debounce.
    fn push_sol_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.sol_input.push(c);
            self.sol_debounce.touch();
        }
    }

    /// Removes the last sol character and restarts the debounce.
    fn pop_sol_char(&mut self) {
        if self.sol_input.pop().is_some() {
            self.sol_debounce.touch();
        }
    }

    /// Cycles to the next rover and refetches with the current sol.
    fn cycle_rover(&mut self) {
        self.rover = self.rover.next();
        self.trigger_mars();
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// - `q`: Quit (closes an open overlay first)
    /// - `Esc`: Close overlay, or quit when none is open
    /// - `Tab`/`BackTab`: Cycle sections
    /// - `1`-`4`: Jump to section (outside the rover section)
    /// - `r`: Re-fetch the active section
    /// - `?`: Toggle the help overlay
    /// - `f`: Toggle favorite for the item under the cursor
    /// - `Enter`: Open the detail overlay
    /// - Picture: `Left`/`Right` step the date, `t` jumps to today
    /// - Rovers: digits edit the sol, `Backspace` deletes, `c` cycles rover
    /// - Rovers/Favorites: `Up`/`Down` or `k`/`j` move the selection
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Detail overlay likewise
        if self.detail.is_some() {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.detail = None;
                }
                _ => {}
            }
            return;
        }

        // Bindings shared by every section
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.select_section(self.section.next());
                return;
            }
            KeyCode::BackTab => {
                self.select_section(self.section.prev());
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('r') => {
                self.activate();
                return;
            }
            _ => {}
        }

        match self.section {
            Section::Apod => match key_event.code {
                KeyCode::Left => self.apod_prev_day(),
                KeyCode::Right => self.apod_next_day(),
                KeyCode::Char('t') => self.apod_jump_to_today(),
                KeyCode::Char('f') => self.toggle_current_favorite(),
                KeyCode::Enter => self.open_detail(),
                KeyCode::Char('2') => self.select_section(Section::Rovers),
                KeyCode::Char('3') => self.select_section(Section::Asteroids),
                KeyCode::Char('4') => self.select_section(Section::Favorites),
                _ => {}
            },
            Section::Rovers => match key_event.code {
                // Digits edit the sol query here, so no section shortcuts
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                    self.push_sol_char(c);
                }
                KeyCode::Backspace => self.pop_sol_char(),
                KeyCode::Char('c') => self.cycle_rover(),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Char('f') => self.toggle_current_favorite(),
                KeyCode::Enter => self.open_detail(),
                _ => {}
            },
            Section::Asteroids => match key_event.code {
                KeyCode::Char('1') => self.select_section(Section::Apod),
                KeyCode::Char('2') => self.select_section(Section::Rovers),
                KeyCode::Char('4') => self.select_section(Section::Favorites),
                _ => {}
            },
            Section::Favorites => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Char('f') => self.toggle_current_favorite(),
                KeyCode::Enter => self.open_detail(),
                KeyCode::Char('1') => self.select_section(Section::Apod),
                KeyCode::Char('2') => self.select_section(Section::Rovers),
                KeyCode::Char('3') => self.select_section(Section::Asteroids),
                _ => {}
            },
        }
    }
}
