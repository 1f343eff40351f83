use crate::{audio::AudioLog, controls::Controls, prelude::*, render::GameRender};

pub struct Game {
    geng: Geng,
    render: GameRender,
    audio: AudioLog,
    controls: Controls,
    model: Model,
    framebuffer_size: vec2<usize>,
    cursor_pos: vec2<f64>,
    /// Simulation time not yet consumed by ticks.
    tick_accumulator: f64,
}

impl Game {
    pub fn new(geng: &Geng, config: Config, settings: Settings) -> Self {
        Self {
            geng: geng.clone(),
            render: GameRender::new(geng, &config),
            audio: AudioLog::default(),
            controls: Controls::new(),
            model: Model::new(config, settings),
            framebuffer_size: vec2(1, 1),
            cursor_pos: vec2::ZERO,
            tick_accumulator: 0.0,
        }
    }

    fn flush_audio(&mut self) {
        for command in self.model.drain_audio() {
            self.audio.apply(command);
        }
    }

    fn check_exit(&self) {
        if self.model.exit_requested {
            log::info!("Exiting");
            std::process::exit(0);
        }
    }
}

impl geng::State for Game {
    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        self.framebuffer_size = framebuffer.size();
        ugli::clear(framebuffer, Some(Color::BLACK), None, None);
        self.render.draw(&self.model, framebuffer);
    }

    fn handle_event(&mut self, event: geng::Event) {
        if let geng::Event::CursorMove { position } = &event {
            self.cursor_pos = *position;
        }

        if self.controls.is_attack(&event) {
            self.model.player_action(PlayerInput::Attack);
        }

        if geng_utils::key::is_event_press(&event, [geng::MouseButton::Left]) {
            let position = self
                .render
                .screen_to_viewport(self.framebuffer_size.as_f32(), self.cursor_pos.as_f32());
            self.model.player_action(PlayerInput::Click(position));
        }

        self.flush_audio();
        self.check_exit();
    }

    fn update(&mut self, delta_time: f64) {
        let tick = self.model.config.tick_duration();
        let max_ticks = self.model.config.max_ticks_per_frame;

        self.tick_accumulator += delta_time;
        let mut ticks = 0;
        while self.tick_accumulator >= tick {
            if ticks == max_ticks {
                // Drop the backlog instead of spiralling.
                self.tick_accumulator = 0.0;
                break;
            }
            let input = self.controls.sample(self.geng.window());
            self.model.tick(&input);
            self.tick_accumulator -= tick;
            ticks += 1;
        }

        self.flush_audio();
    }
}
