pub use generational_arena::{Arena, Index as Id};
pub use geng::prelude::*;
pub use geng_utils::conversions::*;

pub use crate::{config::*, model::*};

pub type Color = Rgba<f32>;
