use log::LevelFilter;

/// Уровень логов по числу флагов `-v`: 0 → warn, 1 → info, 2 → debug, 3+ → trace.
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Инициализировать логирование в терминал (stderr).
///
/// Повторная инициализация возвращает ошибку `log`, её можно игнорировать.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
