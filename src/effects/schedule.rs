use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Ordered list of absolute delays, one per animation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    delays: Vec<u32>,
}

impl Schedule {
    pub fn staggered(initial_ms: u32, step_ms: u32, count: usize) -> Self {
        let delays = (0..count as u32)
            .map(|i| initial_ms.saturating_add(step_ms.saturating_mul(i)))
            .collect();
        Self { delays }
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

/// Reveals `count` items one after another each time `run` changes to a new
/// `Some` value. Returns how many items are revealed so far. Pending steps of
/// a previous run are cancelled, so a page hidden again never animates late.
#[hook]
pub fn use_staggered_reveal(run: Option<u64>, count: usize, initial_ms: u32, step_ms: u32) -> usize {
    let revealed = use_state_eq(|| 0usize);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |(run, count)| {
                setter.set(0);
                let timeouts: Vec<Timeout> = match run {
                    Some(_) => Schedule::staggered(initial_ms, step_ms, *count)
                        .delays()
                        .iter()
                        .enumerate()
                        .map(|(i, delay)| {
                            let setter = setter.clone();
                            Timeout::new(*delay, move || setter.set(i + 1))
                        })
                        .collect(),
                    None => Vec::new(),
                };
                move || drop(timeouts)
            },
            (run, count),
        );
    }

    *revealed
}
