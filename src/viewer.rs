use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;
use storydeck::{DeckController, Key, LogSink, SlideRequest, SystemClock};

use crate::texture_loader::load_texture_with_exif_rotation;

const ARROW_FADE_MS: f32 = 400.0;       // Arrow fade-in once the debounce fires
const TOAST_MS: u64 = 2000;             // How long the copy acknowledgement stays up
const ARROW_SIZE: f32 = 28.0;
const ARROW_MARGIN: f32 = 24.0;

/// Raylib window acting as the navigation engine for a deck: it turns
/// input into slide transitions and draws whatever the controller resolved.
pub struct Viewer {
    deck: DeckController<LogSink, SystemClock>,
    clock: SystemClock,
    textures: HashMap<String, Option<Texture2D>>,
    touch: bool,
    fade_started_ms: Option<u64>,
    toast: Option<(&'static str, u64)>,
}

impl Viewer {
    pub fn new(deck: DeckController<LogSink, SystemClock>, clock: SystemClock, touch: bool) -> Self {
        Self {
            deck,
            clock,
            textures: HashMap::new(),
            touch,
            fade_started_ms: None,
            toast: None,
        }
    }

    pub fn run(mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.deck.on_ready();

        while !rl.window_should_close() {
            if rl.is_window_resized() {
                self.deck
                    .on_resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            }

            self.handle_input(rl);

            if self.deck.tick() {
                self.fade_started_ms = Some(self.clock.now_ms());
            }

            self.load_resolved_textures(rl, thread);

            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            self.draw_slide(&mut d);
            self.draw_arrows(&mut d);
            self.draw_overlay(&mut d);
        }
    }

    fn handle_input(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.deck.on_key(Key::Right);
            self.deck.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.deck.on_key(Key::Left);
            self.deck.prev();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            self.deck.on_key(Key::Escape);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_C) {
            let acknowledgement = self.deck.on_copy();
            self.toast = Some((acknowledgement, self.clock.now_ms()));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_N) {
            match self.deck.on_next_post() {
                Some(url) => info!("Next post: {}", url),
                None => info!("No next post configured"),
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(SlideRequest::Next) = self.deck.on_slide_click(self.touch) {
                self.deck.next();
            }
        }
    }

    // Load any background the controller resolved that has no texture yet.
    fn load_resolved_textures(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for element in self.deck.elements() {
            let Some(path) = element.background() else {
                continue;
            };
            if self.textures.contains_key(path) {
                continue;
            }
            let texture = match load_texture_with_exif_rotation(rl, thread, Path::new(path)) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("{:#}", e);
                    None
                }
            };
            self.textures.insert(path.to_string(), texture);
        }
    }

    fn draw_slide(&self, d: &mut RaylibDrawHandle) {
        let Some(element) = self.deck.elements().get(self.deck.current()) else {
            return;
        };
        let viewport = self.deck.viewport();
        let texture = element
            .background()
            .and_then(|path| self.textures.get(path))
            .and_then(Option::as_ref);

        match texture {
            Some(texture) => {
                // Content box is centered and may overflow the window on one axis.
                let content = viewport.content;
                let x = (viewport.width - content.width) * 0.5;
                let y = (viewport.height - content.height) * 0.5;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    Rectangle::new(x, y, content.width, content.height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                let label = element
                    .slide
                    .background
                    .as_ref()
                    .map_or_else(|| "(no background)".to_string(), |asset| asset.to_string());
                d.draw_text(&label, 20, 20, 20, Color::GRAY);
            }
        }
    }

    fn draw_arrows(&self, d: &mut RaylibDrawHandle) {
        let Some(started) = self.fade_started_ms else {
            return;
        };
        let chrome = self.deck.chrome();
        let t = ((self.clock.now_ms() - started) as f32 / ARROW_FADE_MS).min(1.0);
        let color = Color::new(255, 255, 255, (t * 200.0) as u8);

        let viewport = self.deck.viewport();
        let mid = viewport.height * 0.5;

        if chrome.show_prev {
            let x = ARROW_MARGIN;
            d.draw_triangle(
                Vector2::new(x, mid),
                Vector2::new(x + ARROW_SIZE, mid + ARROW_SIZE),
                Vector2::new(x + ARROW_SIZE, mid - ARROW_SIZE),
                color,
            );
        }
        if chrome.show_next {
            let x = viewport.width - ARROW_MARGIN;
            d.draw_triangle(
                Vector2::new(x, mid),
                Vector2::new(x - ARROW_SIZE, mid - ARROW_SIZE),
                Vector2::new(x - ARROW_SIZE, mid + ARROW_SIZE),
                color,
            );
        }
    }

    fn draw_overlay(&mut self, d: &mut RaylibDrawHandle) {
        let viewport = self.deck.viewport();
        let status = format!(
            "{}/{}  {:.0}%",
            self.deck.current() + 1,
            self.deck.len(),
            self.deck.completion().completion() * 100.0
        );
        d.draw_text(&status, 20, viewport.height as i32 - 40, 20, Color::LIGHTGRAY);

        if let Some((text, shown_at)) = self.toast {
            if self.clock.now_ms() - shown_at < TOAST_MS {
                d.draw_text(text, 20, 50, 24, Color::LIME);
            } else {
                self.toast = None;
            }
        }
    }
}
