//! Инфраструктурный слой вокруг расчётного ядра:
//! - RNG-реализации и случайные раздачи;
//! - инициализация логирования для CLI.

pub mod logging;
pub mod rng;

pub use rng::*;
