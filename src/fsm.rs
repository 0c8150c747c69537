/// Per-instance "time in state" counter shared by every state.
///
/// Each state owns one of these. `reset` is called from `enter`, and `stay`
/// is the fallthrough every `update` ends on when no transition fires, so
/// the counter advances exactly once per frame the state stays active.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateClock {
    elapsed: f32,
}

impl StateClock {
    /// Seconds since the most recent `reset`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Default `update` behavior: advance the clock and stay.
    pub fn stay<T>(&mut self, dt: f32) -> Transition<T> {
        self.tick(dt);
        Transition::Stay
    }
}

/// Result of one `update` call.
///
/// `Stay` keeps the receiver active. `Go` names the state to switch to and
/// may carry payload the incoming state needs before its `enter` runs.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition<T> {
    Stay,
    Go(T),
}

impl<T> Transition<T> {
    pub fn is_stay(&self) -> bool {
        matches!(self, Self::Stay)
    }
}

/// A unit of behavior driven once per frame by its owner.
///
/// `C` is the shared context the owner lends for the duration of one call.
/// The owner calls `exit` on the outgoing state, swaps its active pointer,
/// then calls `enter` on the incoming state, whenever `update` returns `Go`.
pub trait State<C> {
    /// What this state may request as its successor.
    type Next;

    fn clock(&self) -> &StateClock;

    fn enter(&mut self, ctx: &mut C);

    fn update(&mut self, ctx: &mut C, dt: f32) -> Transition<Self::Next>;

    fn exit(&mut self, _ctx: &mut C) {}

    fn elapsed(&self) -> f32 {
        self.clock().elapsed()
    }
}
