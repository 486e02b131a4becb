// SPDX-License-Identifier: MPL-2.0
//! Application root state and routing between the grid and the detail view.
//!
//! The `App` owns the pieces that outlive a single screen: the gallery, the
//! grid layout, the transition coordinator, the context menu and the toast
//! queue. Component effects are turned into screen switches, clipboard writes
//! and share tasks here.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::geometry::ViewportSize;
use crate::domain::item::{Collection, Ordinal};
use crate::error::{Error, Result};
use crate::gallery::share::{NativeShare, NoShareSheet};
use crate::gallery::transition::TransitionCoordinator;
use crate::gallery::{self, Gallery, GallerySettings};
use crate::i18n::fluent::I18n;
use crate::scheduler::{Clock, SystemClock};
use crate::ui::context_menu::ContextMenu;
use crate::ui::events::EventMapper;
use crate::ui::{grid, notifications, wall};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// What the application has to show.
#[derive(Debug)]
pub enum Content {
    Gallery(Box<Gallery>),
    /// No gallery: the catalog was empty (`error` is `None`) or failed to load.
    Unavailable { error: Option<String> },
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    content: Content,
    grid: grid::State,
    wall: wall::State,
    transitions: TransitionCoordinator,
    clock: SystemClock,
    /// Time of the message being handled, read by the view.
    now: Duration,
    events: EventMapper,
    window: ViewportSize,
    context_menu: Option<ContextMenu>,
    notifications: notifications::Manager,
    share_sheet: Arc<dyn NativeShare>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("content", &self.content)
            .field("window", &self.window)
            .field("context_menu", &self.context_menu)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
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

    // iced 0.14 requires an Fn boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
            screen: Screen::default(),
            content: Content::Unavailable { error: None },
            grid: grid::State::new(),
            wall: wall::State::new(),
            transitions: TransitionCoordinator::default(),
            clock: SystemClock::new(),
            now: Duration::ZERO,
            events: EventMapper::new(),
            window: ViewportSize::default(),
            context_menu: None,
            notifications: notifications::Manager::new(),
            share_sheet: Arc::new(NoShareSheet),
        }
    }
}

impl App {
    /// Loads config, locale and catalog, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog = match config::resolve_catalog_path(&config, flags.catalog_path.clone()) {
            Some(path) => crate::catalog::load_from_path(&path),
            None => Err(Error::Catalog("no catalog path could be resolved".to_string())),
        };

        let (mut app, task) = Self::from_catalog(i18n, &config, catalog, &flags);
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        (app, task)
    }

    /// Builds the application around an already loaded catalog.
    fn from_catalog(
        i18n: I18n,
        config: &Config,
        catalog: Result<Collection>,
        flags: &Flags,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            i18n,
            transitions: TransitionCoordinator::new(config.animation(), config.clear_delay()),
            ..Self::default()
        };

        app.content = match catalog {
            Ok(collection) => Content::Gallery(Box::new(Gallery::new(
                collection,
                flags.initial_ordinal.map(Ordinal::new),
                GallerySettings::from_config(config),
            ))),
            Err(Error::EmptyCollection) => {
                tracing::info!("Catalog is empty, nothing to review");
                Content::Unavailable { error: None }
            }
            Err(err) => {
                tracing::error!("Failed to load catalog: {}", err);
                let error = err.to_string();
                app.notifications.push(
                    notifications::Notification::error("notification-catalog-error")
                        .with_arg("error", error.clone()),
                );
                Content::Unavailable { error: Some(error) }
            }
        };

        app.screen = if flags.start_on_grid {
            Screen::Grid
        } else {
            Screen::Detail
        };

        let task = match (&app.content, app.screen) {
            (Content::Gallery(_), Screen::Detail) => {
                Task::done(Message::Gallery(gallery::Message::Mounted))
            }
            (Content::Gallery(_), Screen::Grid) => Task::done(Message::Grid(grid::Message::Mounted)),
            _ => Task::none(),
        };

        (app, task)
    }

    fn gallery(&self) -> Option<&Gallery> {
        match &self.content {
            Content::Gallery(gallery) => Some(gallery.as_ref()),
            Content::Unavailable { .. } => None,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (self.screen, self.gallery()) {
            (Screen::Detail, Some(gallery)) => {
                format!("{} - {app_name}", gallery.current_ordinal().padded())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let has_pending_timers = self.gallery().is_some_and(Gallery::has_pending_timers)
            || self.transitions.next_deadline().is_some();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                has_pending_timers,
                self.notifications.has_notifications(),
            ),
            subscription::create_frame_subscription(self.transitions.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(instant) | Message::Frame(instant) => self.clock.at(*instant),
            _ => self.clock.now(),
        };

        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            content: &mut self.content,
            grid: &mut self.grid,
            wall: &mut self.wall,
            transitions: &mut self.transitions,
            now: self.now,
            events: &mut self.events,
            window: &mut self.window,
            context_menu: &mut self.context_menu,
            notifications: &mut self.notifications,
            share_sheet: &self.share_sheet,
        };

        match message {
            Message::Event(event, status) => update::handle_event(&mut ctx, &event, status),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Wall(wall_message) => update::handle_wall_message(&mut ctx, wall_message),
            Message::ContextMenu(menu_message) => {
                update::handle_context_menu_message(&mut ctx, menu_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::Frame(_instant) => update::handle_frame(&mut ctx),
            Message::ShareCompleted(outcome) => update::handle_share_completed(&mut ctx, outcome),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            content: &self.content,
            grid: &self.grid,
            wall: &self.wall,
            transitions: &self.transitions,
            now: self.now,
            window: self.window,
            context_menu: self.context_menu.as_ref(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::fixtures::collection;
    use crate::ui::context_menu;
    use iced::{event, keyboard, mouse, touch, Point, Size};
    use std::time::{Duration, Instant};

    fn build(catalog: Result<Collection>, flags: Flags) -> App {
        let (app, _task) = App::from_catalog(I18n::default(), &Config::default(), catalog, &flags);
        app
    }

    fn gallery_of(app: &App) -> &Gallery {
        app.gallery().expect("app should hold a gallery")
    }

    fn send_event(app: &mut App, event: iced::Event) {
        let _ = app.update(Message::Event(event, event::Status::Ignored));
    }

    #[test]
    fn starts_on_requested_item_in_detail_view() {
        let flags = Flags {
            initial_ordinal: Some(7),
            ..Flags::default()
        };
        let app = build(Ok(collection(&[3, 7, 9])), flags);

        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(gallery_of(&app).current_ordinal(), Ordinal::new(7));
        assert!(app.title().starts_with("0007 - "));
    }

    #[test]
    fn grid_flag_starts_on_grid() {
        let flags = Flags {
            start_on_grid: true,
            ..Flags::default()
        };
        let app = build(Ok(collection(&[1, 2])), flags);
        assert_eq!(app.screen, Screen::Grid);
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn empty_catalog_is_unavailable_without_toast() {
        let app = build(Err(Error::EmptyCollection), Flags::default());
        assert!(matches!(app.content, Content::Unavailable { error: None }));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn broken_catalog_reports_the_error() {
        let app = build(Err(Error::Catalog("duplicate ordinal 4".into())), Flags::default());
        let Content::Unavailable { error: Some(error) } = &app.content else {
            panic!("expected an unavailable catalog with an error");
        };
        assert!(error.contains("duplicate ordinal 4"));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn mounting_renders_the_detail_view() {
        let mut app = build(Ok(collection(&[1, 2])), Flags::default());
        assert!(!gallery_of(&app).is_mounted());
        let _ = app.update(Message::Gallery(gallery::Message::Mounted));
        assert!(gallery_of(&app).is_mounted());
    }

    #[test]
    fn grid_selection_opens_detail_and_starts_transition() {
        let flags = Flags {
            start_on_grid: true,
            ..Flags::default()
        };
        let mut app = build(Ok(collection(&[1, 2, 3])), flags);
        send_event(
            &mut app,
            iced::Event::Window(window::Event::Resized(Size::new(1000.0, 800.0))),
        );

        let _ = app.update(Message::Grid(grid::Message::Selected(Ordinal::new(3))));

        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(gallery_of(&app).current_ordinal(), Ordinal::new(3));
        assert!(app.transitions.is_animating());
        assert!(app
            .transitions
            .descriptor()
            .is_some_and(|descriptor| descriptor.source_rect.is_some()));
    }

    #[test]
    fn wall_opens_from_grid_and_returns() {
        let flags = Flags {
            start_on_grid: true,
            ..Flags::default()
        };
        let mut app = build(Ok(collection(&[1, 2])), flags);
        let _ = app.update(Message::Grid(grid::Message::Mounted));
        assert!(app.grid.is_mounted());

        let _ = app.update(Message::Grid(grid::Message::OpenWall));
        assert_eq!(app.screen, Screen::Wall);
        assert!(!app.wall.is_mounted());

        let _ = app.update(Message::Wall(wall::Message::Mounted));
        assert!(app.wall.is_mounted());

        let _ = app.update(Message::Wall(wall::Message::Back));
        assert_eq!(app.screen, Screen::Grid);
    }

    #[test]
    fn keys_are_ignored_on_the_wall() {
        let flags = Flags {
            start_on_grid: true,
            ..Flags::default()
        };
        let mut app = build(Ok(collection(&[1, 2])), flags);
        let _ = app.update(Message::Grid(grid::Message::OpenWall));
        let arrow = keyboard::Key::Named(keyboard::key::Named::ArrowRight);
        send_event(
            &mut app,
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: arrow.clone(),
                modified_key: arrow,
                physical_key: keyboard::key::Physical::Code(keyboard::key::Code::ArrowRight),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        );
        assert_eq!(gallery_of(&app).position(), 0);
    }

    #[test]
    fn back_to_grid_switches_screen() {
        let mut app = build(Ok(collection(&[1, 2])), Flags::default());
        let _ = app.update(Message::Gallery(gallery::Message::BackToGrid));
        assert_eq!(app.screen, Screen::Grid);
    }

    #[test]
    fn right_click_opens_menu_and_dismissal_restores_interception() {
        let mut app = build(Ok(collection(&[1, 2])), Flags::default());
        send_event(
            &mut app,
            iced::Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
        );
        send_event(
            &mut app,
            iced::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(600.0, 300.0),
            }),
        );
        send_event(
            &mut app,
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
        );

        assert!(app.context_menu.is_some());
        assert_eq!(gallery_of(&app).position(), 0);
        assert!(!gallery_of(&app).input().is_intercepting());

        let _ = app.update(Message::ContextMenu(context_menu::Message::Dismissed));
        assert!(app.context_menu.is_none());
        assert!(gallery_of(&app).input().is_intercepting());
    }

    #[test]
    fn input_is_ignored_while_menu_is_open() {
        let mut app = build(Ok(collection(&[1, 2])), Flags::default());
        send_event(
            &mut app,
            iced::Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
        );
        send_event(
            &mut app,
            iced::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(600.0, 300.0),
            }),
        );
        send_event(
            &mut app,
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
        );
        send_event(
            &mut app,
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        );
        send_event(
            &mut app,
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        );

        assert_eq!(gallery_of(&app).position(), 0);
    }

    fn finger(app: &mut App, id: u64, pressed: bool) {
        let finger = touch::Finger(id);
        let position = Point::new(600.0, 300.0);
        let event = if pressed {
            touch::Event::FingerPressed { id: finger, position }
        } else {
            touch::Event::FingerLifted { id: finger, position }
        };
        send_event(app, iced::Event::Touch(event));
    }

    #[test]
    fn touch_navigation_survives_a_long_press_menu() {
        let mut config = Config::default();
        config.gallery.touch_session = Some(true);
        let (mut app, _task) = App::from_catalog(
            I18n::default(),
            &config,
            Ok(collection(&[1, 2, 3])),
            &Flags::default(),
        );
        send_event(
            &mut app,
            iced::Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
        );

        finger(&mut app, 1, true);
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(700)));
        assert!(app.context_menu.is_some());

        finger(&mut app, 1, false);
        let _ = app.update(Message::ContextMenu(context_menu::Message::Dismissed));
        assert_eq!(gallery_of(&app).position(), 0);

        finger(&mut app, 2, true);
        finger(&mut app, 2, false);
        assert_eq!(gallery_of(&app).position(), 1);
    }

    #[test]
    fn dismissing_before_lift_frees_the_touch() {
        let mut config = Config::default();
        config.gallery.touch_session = Some(true);
        let (mut app, _task) = App::from_catalog(
            I18n::default(),
            &config,
            Ok(collection(&[1, 2, 3])),
            &Flags::default(),
        );
        send_event(
            &mut app,
            iced::Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
        );

        finger(&mut app, 1, true);
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(700)));
        let _ = app.update(Message::ContextMenu(context_menu::Message::Dismissed));

        finger(&mut app, 2, true);
        finger(&mut app, 2, false);
        assert_eq!(gallery_of(&app).position(), 1);
    }

    fn open_menu(app: &mut App) {
        app.context_menu = Some(ContextMenu {
            position: crate::domain::geometry::ScreenPoint::new(1.0, 1.0),
            ordinal: Ordinal::new(1),
            has_location: false,
        });
    }

    fn toast_keys(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect()
    }

    #[test]
    fn copy_link_confirms_with_a_toast() {
        let mut app = build(Ok(collection(&[1])), Flags::default());
        open_menu(&mut app);

        let _ = app.update(Message::ContextMenu(context_menu::Message::Selected(
            context_menu::Action::CopyLink,
        )));

        assert!(app.context_menu.is_none());
        assert_eq!(toast_keys(&app), ["notification-link-copied"]);
    }

    #[test]
    fn copy_link_without_base_url_reports_an_error() {
        let mut config = Config::default();
        config.gallery.base_url = None;
        let (mut app, _task) = App::from_catalog(
            I18n::default(),
            &config,
            Ok(collection(&[1])),
            &Flags::default(),
        );
        open_menu(&mut app);

        let _ = app.update(Message::ContextMenu(context_menu::Message::Selected(
            context_menu::Action::CopyLink,
        )));

        assert_eq!(toast_keys(&app), ["share-error-missing-base-url"]);
    }
}
