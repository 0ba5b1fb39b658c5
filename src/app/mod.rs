// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the scan and about views.
//!
//! The `App` struct wires together the scan controller, the classifier
//! adapter, localization and persisted settings, and translates messages
//! into side effects like config persistence or background classification.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::Classifier;
use crate::config::{self, Config};
use crate::domain::upload::UploadSource;
use crate::i18n::fluent::I18n;
use crate::infrastructure::build_classifier;
use crate::scan::ScanController;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::animated_spinner;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    scan: ScanController,
    classifier: Arc<dyn Classifier>,
    config: Config,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Whether a file is dragged over the window.
    drag_hovering: bool,
    /// Spinner angle in radians, advanced on every tick while scanning.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("scan_state", self.scan.state())
            .field("classifier", &self.classifier.descriptor())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

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

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
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
        Self::with_config(Config::default(), I18n::default())
    }
}

impl App {
    fn with_config(config: Config, i18n: I18n) -> Self {
        let classifier = build_classifier(&config.classifier);
        Self {
            i18n,
            screen: Screen::Scan,
            scan: ScanController::new(config.scan.model(), config.scan.upload_limit()),
            classifier,
            theme_mode: config.general.theme_mode,
            config,
            notifications: notifications::Manager::new(),
            drag_hovering: false,
            spinner_rotation: 0.0,
        }
    }

    /// Initializes application state and optionally loads the image given
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_config(config, i18n);

        let descriptor = app.classifier.descriptor();
        tracing::info!(
            backend = descriptor.backend,
            simulated = descriptor.simulated,
            model = app.scan.model().id(),
            locale = %app.i18n.current_locale(),
            "CerebroScan starting"
        );

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.file_path {
            Some(path) => {
                let mut ctx = app.update_context();
                update::load_from_path(&mut ctx, PathBuf::from(path), UploadSource::CommandLine)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            scan: &mut self.scan,
            classifier: &self.classifier,
            config: &mut self.config,
            notifications: &mut self.notifications,
            drag_hovering: &mut self.drag_hovering,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.scan.image() {
            Some(image) => format!("{} - {app_name}", image.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.scan.is_scanning(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                if self.scan.is_scanning() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                self.notifications.tick();
                Task::none()
            }
            Message::DragHover(hovering) => {
                self.drag_hovering = hovering;
                Task::none()
            }
            message => {
                let mut ctx = self.update_context();
                match message {
                    Message::Navbar(navbar_message) => {
                        update::handle_navbar_message(&mut ctx, navbar_message)
                    }
                    Message::Scan(scan_message) => update::handle_scan_message(&mut ctx, scan_message),
                    Message::FilePicked(path) => update::handle_file_picked(&mut ctx, path),
                    Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
                    Message::PasteRequested => update::handle_paste(&mut ctx),
                    Message::CandidateLoaded(result) => {
                        update::handle_candidate_loaded(&mut ctx, result)
                    }
                    Message::ScanFinished { cycle, result } => {
                        update::handle_scan_finished(&mut ctx, cycle, result)
                    }
                    Message::Notification(_) | Message::Tick(_) | Message::DragHover(_) => {
                        Task::none()
                    }
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            scan: &self.scan,
            notifications: &self.notifications,
            drag_hovering: self.drag_hovering,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
