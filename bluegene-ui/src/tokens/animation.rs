// Animation token system.

use zoon::*;

// Animation durations
pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_normal() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_NORMAL)])
}

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_transform() -> impl Style<'static> {
    Transitions::new([Transition::property("transform").duration(DURATION_NORMAL)])
}
