//! Bloom Letter - Entry point for the Iced GUI application.

use bloom_letter::animation::{Easing, GardenState, LetterState, SkyState, Timeline};
use bloom_letter::canvas::{Bursts, Garden, NightSky};
use bloom_letter::styles::{letter_card_style, open_button_style};
use bloom_letter::{
    palette, FireworkSpawner, GardenLayout, Scene, ScenePalette, Viewport, FIREWORK_INTERVAL_MS,
    LETTER_HOVER_SCALE, LETTER_PADDING, LETTER_WIDTH, TICK_INTERVAL_MS, TITLE_REVEAL_DELAY_MS,
};

use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration};
use iced::widget::canvas::{self, Canvas};
use iced::widget::{button, column, container, mouse_area, stack, text, Space};
use iced::{window, Element, Length, Size, Subscription, Task};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

const CLOSED_CAPTION: &str = "With love, on our special day";
const OPEN_BUTTON_LABEL: &str = "Open Letter";
const TITLE: &str = "Happy 5 Year Anniversary";
const MESSAGE: &str = "Ashley, these five years have bloomed into something beautiful.\n\n\
I love you more than words can express.";

/// Application state.
struct App {
    scene: Scene,
    viewport: Viewport,
    layout: GardenLayout,
    spawner: FireworkSpawner,
    rng: StdRng,
    sky_state: SkyState,
    garden_state: GardenState,
    letter_state: LetterState,
    bursts_cache: canvas::Cache,
    /// Monotonic clock sampled once per frame; every view reads this instead
    /// of calling `Instant::now` itself.
    now: Instant,
}

/// Application messages.
#[derive(Debug, Clone, Copy)]
enum Message {
    LetterHovered(bool),
    LetterClicked,
    RevealTitle,
    Tick,
    SpawnTick,
    Resized(Size),
}

impl App {
    fn init() -> (Self, Task<Message>) {
        let mut rng = StdRng::from_entropy();
        let viewport = Viewport::default();
        let layout = GardenLayout::generate(viewport, &mut rng);

        let app = Self {
            scene: Scene::default(),
            viewport,
            layout,
            spawner: FireworkSpawner::new(),
            rng,
            sky_state: SkyState::default(),
            garden_state: GardenState::default(),
            letter_state: LetterState::default(),
            bursts_cache: canvas::Cache::default(),
            now: Instant::now(),
        };

        // The default viewport is a placeholder until the real window size
        // arrives.
        let measure = window::latest()
            .and_then(window::size)
            .map(Message::Resized);

        (app, measure)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LetterHovered(hovered) => {
                self.letter_state.set_hovered(hovered);
                Task::none()
            }
            Message::LetterClicked => {
                let now = Instant::now();
                if !self.scene.open(now) {
                    return Task::none();
                }
                info!("letter opened");

                self.garden_state.restart();
                self.spawner.set_active(true);

                // Title reveal follows after a fixed pause. Scheduled only on
                // the Closed -> Opened edge, so it can never double-fire.
                Task::future(async {
                    tokio::time::sleep(Duration::from_millis(TITLE_REVEAL_DELAY_MS)).await;
                    Message::RevealTitle
                })
            }
            Message::RevealTitle => {
                if self.scene.reveal(Instant::now()) {
                    info!("title revealed");
                }
                Task::none()
            }
            Message::Tick => {
                self.now = Instant::now();
                self.sky_state.update();
                self.letter_state.update();
                if self.scene.is_open() {
                    self.garden_state.update();
                    self.spawner.prune(self.now);
                    self.bursts_cache.clear();
                }
                Task::none()
            }
            Message::SpawnTick => {
                self.spawner.tick(Instant::now(), self.viewport, &mut self.rng);
                Task::none()
            }
            Message::Resized(size) => {
                self.viewport = Viewport::from_size(size);
                self.layout = GardenLayout::generate(self.viewport, &mut self.rng);
                self.sky_state.cache.clear();
                self.garden_state.cache.clear();
                self.bursts_cache.clear();
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);
        let resizes = window::resize_events().map(|(_id, size)| Message::Resized(size));

        let mut subs = vec![ticks, resizes];
        if self.spawner.is_active() {
            subs.push(
                time::every(Duration::from_millis(FIREWORK_INTERVAL_MS))
                    .map(|_| Message::SpawnTick),
            );
        }
        Subscription::batch(subs)
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette();

        let sky = Canvas::new(NightSky::<Message>::new(
            &self.sky_state,
            &self.layout.stars,
            pal,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers: Vec<Element<'_, Message>> = vec![sky.into()];

        if self.scene.is_open() {
            layers.push(
                Canvas::new(Bursts::<Message>::new(
                    &self.bursts_cache,
                    self.spawner.live(),
                    self.now,
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            );
            layers.push(
                Canvas::new(Garden::<Message>::new(&self.garden_state, &self.layout, pal))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            );
            layers.push(self.opened_letter(pal));
        } else {
            layers.push(self.closed_letter(pal));
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The closed card: caption plus the open button, scaling up slightly
    /// while hovered.
    fn closed_letter(&self, pal: ScenePalette) -> Element<'_, Message> {
        let hover = self.letter_state.hover_progress();
        let scale = 1.0 + LETTER_HOVER_SCALE * hover;

        let caption = text(CLOSED_CAPTION)
            .size(18.0 * scale)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.letter_muted),
            });

        let open_button = button(text(OPEN_BUTTON_LABEL).size(16.0 * scale))
            .padding([10, 24])
            .style(open_button_style(pal))
            .on_press(Message::LetterClicked);

        let card = container(
            column![
                caption,
                Space::new().height(Length::Fixed(20.0)),
                open_button,
            ]
            .align_x(iced::Alignment::Center),
        )
        .padding(LETTER_PADDING * scale)
        .width(Length::Fixed(LETTER_WIDTH * scale))
        .style(letter_card_style(pal, 1.0));

        let interactive = mouse_area(card)
            .on_enter(Message::LetterHovered(true))
            .on_exit(Message::LetterHovered(false));

        container(interactive)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    /// The opened card: fades in, message first, the title joining it once
    /// the reveal fires.
    fn opened_letter(&self, pal: ScenePalette) -> Element<'_, Message> {
        let since_open = self
            .scene
            .opened_at()
            .map(|at| self.now.saturating_duration_since(at).as_secs_f32())
            .unwrap_or(0.0);

        let card_fade = Timeline::new(0.0, 0.5, Easing::EaseOut).progress(since_open);
        let message_fade = Timeline::new(0.5, 0.4, Easing::EaseOut).progress(since_open);
        // Entrance pop: the card grows from 80% to full width as it fades in.
        let pop = 0.8 + 0.2 * card_fade;

        let mut content: Vec<Element<'_, Message>> = Vec::new();

        if let Some(revealed_at) = self.scene.revealed_at() {
            let since_reveal = self.now.saturating_duration_since(revealed_at).as_secs_f32();
            let title_fade = Timeline::new(0.0, 0.5, Easing::EaseOut).progress(since_reveal);
            content.push(
                text(TITLE)
                    .size(32)
                    .align_x(Horizontal::Center)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(iced::Color {
                            a: title_fade,
                            ..pal.letter_text
                        }),
                    })
                    .into(),
            );
            content.push(Space::new().height(Length::Fixed(16.0)).into());
        }

        content.push(
            text(MESSAGE)
                .size(18)
                .align_x(Horizontal::Center)
                .style(move |_| iced::widget::text::Style {
                    color: Some(iced::Color {
                        a: message_fade,
                        ..pal.letter_muted
                    }),
                })
                .into(),
        );

        let card = container(column(content).align_x(iced::Alignment::Center))
            .padding(LETTER_PADDING * pop)
            .width(Length::Fixed((LETTER_WIDTH + 2.0 * LETTER_PADDING) * pop))
            .style(letter_card_style(pal, card_fade));

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    fn get_theme(_: &App) -> iced::Theme {
        iced::Theme::Dark
    }

    iced::application(App::init, App::update, App::view)
        .title("Bloom Letter")
        .subscription(App::subscription)
        .theme(get_theme)
        .run()
}
