use serde::{Deserialize, Serialize};

/// Настройки перебора досок.
///
/// Любое поле можно опустить в JSON-конфиге — подставится значение по умолчанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EquityConfig {
    /// Разрешить параллельный перебор через rayon.
    pub parallel: bool,
    /// Меньше этого числа досок — всегда последовательно.
    pub min_parallel_boards: u64,
    /// Отдельный пул на N потоков; `None` — глобальный пул rayon.
    pub threads: Option<usize>,
}

impl EquityConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub(crate) fn runs_parallel(&self, boards: u64) -> bool {
        self.parallel && boards >= self.min_parallel_boards && self.threads != Some(1)
    }
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_boards: 2_000,
            threads: None,
        }
    }
}
