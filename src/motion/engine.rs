use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

use log::trace;

use super::{AnimationSpec, Lerp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// Passed to a completion callback. `finished` is false when the animation
/// was superseded by a newer target before reaching its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationResult {
    pub finished: bool,
}

type Completion = Box<dyn FnOnce(AnimationResult)>;

/// Shared scalar driven by an [`AnimationEngine`].
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    slot: Rc<RefCell<ValueSlot>>,
}

#[derive(Debug)]
struct ValueSlot {
    current: f32,
    running: Option<(AnimationId, f32)>,
}

impl AnimatedValue {
    pub fn new(initial: f32) -> Self {
        Self {
            slot: Rc::new(RefCell::new(ValueSlot {
                current: initial,
                running: None,
            })),
        }
    }

    pub fn get(&self) -> f32 {
        self.slot.borrow().current
    }

    /// Where the value is heading: the running target, or the current value
    /// when idle.
    pub fn target(&self) -> f32 {
        let slot = self.slot.borrow();
        slot.running.map(|(_, to)| to).unwrap_or(slot.current)
    }

    pub fn is_animating(&self) -> bool {
        self.slot.borrow().running.is_some()
    }
}

struct Running {
    id: AnimationId,
    value: Weak<RefCell<ValueSlot>>,
    from: f32,
    to: f32,
    spec: AnimationSpec,
    elapsed: Duration,
    on_end: Option<Completion>,
}

#[derive(Default)]
struct EngineInner {
    next_id: u64,
    running: Vec<Running>,
}

impl EngineInner {
    fn take(&mut self, id: AnimationId) -> Option<Running> {
        let idx = self.running.iter().position(|anim| anim.id == id)?;
        Some(self.running.remove(idx))
    }
}

/// Clock-driven tween runner. Cloning yields another handle to the same
/// engine; the host advances it with [`AnimationEngine::tick`].
#[derive(Clone, Default)]
pub struct AnimationEngine {
    inner: Rc<RefCell<EngineInner>>,
}

impl fmt::Debug for AnimationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationEngine")
            .field("running", &self.running())
            .finish()
    }
}

impl AnimationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `value` towards `to`. A transition already running on
    /// the same value is superseded: it stops where it is, its callback gets
    /// `finished: false`, and the new one starts from the current position.
    pub fn timing(
        &self,
        value: &AnimatedValue,
        to: f32,
        spec: AnimationSpec,
        on_end: impl FnOnce(AnimationResult) + 'static,
    ) -> AnimationId {
        let (id, superseded) = {
            let mut inner = self.inner.borrow_mut();
            let id = AnimationId(inner.next_id);
            inner.next_id += 1;

            let mut slot = value.slot.borrow_mut();
            let superseded = slot
                .running
                .take()
                .and_then(|(previous, _)| inner.take(previous));
            let from = slot.current;
            slot.running = Some((id, to));
            inner.running.push(Running {
                id,
                value: Rc::downgrade(&value.slot),
                from,
                to,
                spec,
                elapsed: Duration::ZERO,
                on_end: Some(Box::new(on_end)),
            });
            trace!("animation {id:?} started {from} -> {to}");
            (id, superseded)
        };

        if let Some(callback) = superseded.and_then(|anim| anim.on_end) {
            callback(AnimationResult { finished: false });
        }
        id
    }

    /// Advance every running animation by `dt`. Completion callbacks run
    /// after the engine state has been updated, so they may start new
    /// animations. Returns the number still running.
    pub fn tick(&self, dt: Duration) -> usize {
        let (completed, remaining) = {
            let mut inner = self.inner.borrow_mut();
            let mut completed = Vec::new();
            inner.running.retain_mut(|anim| {
                let Some(slot) = anim.value.upgrade() else {
                    return false;
                };
                anim.elapsed += dt;
                let Some((progress, done)) = anim.spec.progress(anim.elapsed) else {
                    return true;
                };
                let mut slot = slot.borrow_mut();
                if done {
                    slot.current = anim.to;
                    slot.running = None;
                    trace!("animation {:?} finished at {}", anim.id, anim.to);
                    completed.extend(anim.on_end.take());
                    false
                } else {
                    slot.current = anim.from.lerp(&anim.to, progress);
                    true
                }
            });
            (completed, inner.running.len())
        };

        for callback in completed {
            callback(AnimationResult { finished: true });
        }
        remaining
    }

    pub fn running(&self) -> usize {
        self.inner.borrow().running.len()
    }

    pub fn is_idle(&self) -> bool {
        self.running() == 0
    }
}
