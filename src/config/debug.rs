//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! release builds stay quiet. All of them are further gated by
//! `cfg(debug_assertions)` at the call sites.

pub struct DebugFlags {
    /// Emit a line for every fetch issued and every response applied or dropped.
    pub print_fetch_events: bool,
    /// Emit refresh timer transitions (idle <-> polling) and due ticks.
    pub print_timer_events: bool,
    /// Emit chart handle creation and disposal.
    pub print_chart_lifecycle: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_events: false,
    print_timer_events: false,
    print_chart_lifecycle: false,
    print_state_serde: false,
    print_shutdown: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_ships_off() {
        let DebugFlags {
            print_fetch_events,
            print_timer_events,
            print_chart_lifecycle,
            print_state_serde,
            print_shutdown,
        } = DEBUG_FLAGS;
        assert!(
            ![
                print_fetch_events,
                print_timer_events,
                print_chart_lifecycle,
                print_state_serde,
                print_shutdown,
            ]
            .contains(&true)
        );
    }
}
