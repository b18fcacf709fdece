use crate::quiz::TimerCycle;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second of quiz time elapsed in the given timer cycle
    ClockTick { cycle: TimerCycle },
}
