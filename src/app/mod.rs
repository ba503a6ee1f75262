// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the cart store, the toast
//! channel, and the decorative background, and translates user intents into
//! cart mutations. Cart mutations return events rather than performing UI
//! side effects themselves; the reactions (opening the panel, showing the
//! toast) live here so they are easy to audit in one place.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::cart::{self, CartStore};
use crate::catalog::{self, Product};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::{cart_panel, header, product_grid, toast};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Background rotation advance per animation frame, in radians.
const ROTATION_STEP: f32 = 0.01;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Vec<Product>,
    cart: CartStore,
    cart_open: bool,
    toast: toast::State,
    rotation: f32,
    animate: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cart_lines", &self.cart.line_count())
            .field("cart_open", &self.cart_open)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: catalog::products(),
            cart: CartStore::new(),
            cart_open: false,
            toast: toast::State::new(),
            rotation: 0.0,
            animate: true,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.animate = config.animation.unwrap_or(true);

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_animation_subscription(self.animate)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProductGrid(product_grid::Message::AddToCart(product)) => {
                match self.cart.add_item(&product) {
                    cart::Event::Added => {
                        // Adding always reveals the cart so the user sees the
                        // line appear.
                        self.cart_open = true;
                        self.toast.notify("toast-added-to-cart").map(Message::Toast)
                    }
                    cart::Event::None => Task::none(),
                }
            }
            Message::Header(header::Message::ToggleCart) => {
                self.cart_open = !self.cart_open;
                Task::none()
            }
            Message::CartPanel(panel_message) => self.handle_cart_panel(panel_message),
            Message::Toast(toast_message) => {
                self.toast.handle_message(toast_message);
                Task::none()
            }
            Message::AnimationTick(_instant) => {
                self.rotation += ROTATION_STEP;
                Task::none()
            }
        }
    }

    fn handle_cart_panel(&mut self, message: cart_panel::Message) -> Task<Message> {
        match message {
            cart_panel::Message::Close => {
                self.cart_open = false;
            }
            cart_panel::Message::Increment(id) => {
                self.cart.update_quantity(&id, 1);
            }
            cart_panel::Message::Decrement(id) => {
                self.cart.update_quantity(&id, -1);
            }
            cart_panel::Message::Remove(id) => {
                self.cart.remove_item(&id);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            cart: &self.cart,
            cart_open: self.cart_open,
            toast: &self.toast,
            rotation: self.rotation,
        })
    }

    /// Read access for the presentation layer and tests.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The fixed catalog, in display order.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Whether the cart panel is currently open.
    #[must_use]
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Explicit panel visibility intent, alongside the toggle message.
    pub fn set_panel_visible(&mut self, visible: bool) {
        self.cart_open = visible;
    }

    /// The toast channel state.
    #[must_use]
    pub fn toast(&self) -> &toast::State {
        &self.toast
    }
}
