pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

pub enum EngineEvent {
    /// Advance the automaton by one generation while paused
    Step,
}

pub enum AppEvent {
    /// Stop or resume the animation
    TogglePause,

    /// Exit the application
    Exit,
}
