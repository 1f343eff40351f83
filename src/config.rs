use crate::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fixed simulation rate.
    pub ticks_per_second: f64,
    /// Upper bound on simulation ticks run in a single rendered frame.
    pub max_ticks_per_frame: usize,
    /// Logical screen size, the hero is anchored at its center.
    pub viewport: (f32, f32),
    pub player: PlayerConfig,
    pub adversary: AdversaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Camera displacement per tick of movement input.
    pub speed: f32,
    pub max_health: Hp,
    /// Ticks between walk cycle frames.
    pub walk_interval: u32,
    /// Ticks between attack frames.
    pub attack_interval: u32,
    /// Ticks between death frames.
    pub death_interval: u32,
    pub attack_damage: Hp,
    /// Distance under which a swing connects.
    pub attack_reach: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversaryConfig {
    pub speed: f32,
    /// Maximum displacement from the origin on either axis while patrolling.
    pub patrol_radius: f32,
    pub aggro_radius: f32,
    /// Distance under which an adversary hurts the hero.
    pub contact_radius: f32,
    pub idle_interval: u32,
    pub aggro_interval: u32,
    pub death_interval: u32,
    /// World coordinates of the roster, one adversary per entry.
    pub spawns: Vec<(f32, f32)>,
}

impl Config {
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = file::load_string(path)
            .await
            .context(format!("when loading config file at {:?}", path))?;
        ::ron::from_str(&content).context(format!("when parsing config file at {:?}", path))
    }

    pub fn viewport_size(&self) -> vec2<f32> {
        vec2(self.viewport.0, self.viewport.1)
    }

    /// The fixed screen position of the hero.
    pub fn anchor(&self) -> vec2<f32> {
        self.viewport_size() / 2.0
    }

    pub fn tick_duration(&self) -> f64 {
        1.0 / self.ticks_per_second
    }
}

impl AdversaryConfig {
    pub fn spawn_points(&self) -> impl Iterator<Item = vec2<f32>> + '_ {
        self.spawns.iter().map(|&(x, y)| vec2(x, y))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            max_ticks_per_frame: 5,
            viewport: (800.0, 600.0),
            player: PlayerConfig {
                speed: 4.0,
                max_health: 100.0,
                walk_interval: 6,
                attack_interval: 4,
                death_interval: 10,
                attack_damage: 10.0,
                attack_reach: 60.0,
            },
            adversary: AdversaryConfig {
                speed: 1.5,
                patrol_radius: 100.0,
                aggro_radius: 120.0,
                contact_radius: 40.0,
                idle_interval: 8,
                aggro_interval: 6,
                death_interval: 10,
                spawns: vec![
                    (200.0, 1200.0),
                    (700.0, 1400.0),
                    (900.0, 300.0),
                    (1100.0, 900.0),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let content = include_str!("../assets/config.ron");
        let config: Config = ::ron::from_str(content).unwrap();
        let default = Config::default();
        assert_eq!(config.viewport, default.viewport);
        assert_eq!(config.adversary.spawns, default.adversary.spawns);
        assert_eq!(config.player.attack_interval, default.player.attack_interval);
        assert_eq!(config.adversary.aggro_radius, default.adversary.aggro_radius);
    }

    #[test]
    fn anchor_is_viewport_center() {
        let config = Config::default();
        assert_eq!(config.anchor(), vec2(400.0, 300.0));
    }
}
