use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::reveal::Reveal;

pub const COUNTER_DURATION_MS: i64 = 2000;
const FRAME_MS: u32 = 16;

/// A stat such as `150+` split into the number and its trailing text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTarget {
    pub value: u32,
    pub suffix: String,
}

pub fn parse_stat(text: &str) -> Option<StatTarget> {
    let text = text.trim();
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let value = text[..digits_end].parse().ok()?;
    Some(StatTarget {
        value,
        suffix: text[digits_end..].to_string(),
    })
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(4)
}

pub fn counter_value(target: u32, elapsed_ms: i64, duration_ms: i64) -> u32 {
    if duration_ms <= 0 {
        return target;
    }
    let progress = elapsed_ms as f64 / duration_ms as f64;
    (target as f64 * ease_out_quart(progress)).floor() as u32
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let target = parse_stat(&props.value);
    let shown = use_state_eq(|| None::<u32>);
    let running = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let running_setter = running.setter();
        let target_value = target.as_ref().map(|t| t.value);
        use_effect_with_deps(
            move |(running, target_value)| {
                let interval = match (*running, *target_value) {
                    (true, Some(value)) => {
                        let start = Utc::now();
                        shown.set(Some(0));
                        Some(Interval::new(FRAME_MS, move || {
                            let elapsed = (Utc::now() - start).num_milliseconds();
                            shown.set(Some(counter_value(value, elapsed, COUNTER_DURATION_MS)));
                            if elapsed >= COUNTER_DURATION_MS {
                                running_setter.set(false);
                            }
                        }))
                    }
                    _ => None,
                };
                move || drop(interval)
            },
            (*running, target_value),
        );
    }

    let on_reveal = {
        let running = running.clone();
        let animatable = target.is_some();
        Callback::from(move |_: ()| {
            if animatable {
                running.set(true);
            }
        })
    };

    let text = match (&target, *shown) {
        (Some(target), Some(current)) => format!("{}{}", current, target.suffix),
        _ => props.value.to_string(),
    };

    html! {
        <Reveal class={classes!("stat-item")} {on_reveal}>
            <div class="stat-number">{text}</div>
            <div class="stat-label">{props.label.clone()}</div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_and_suffix() {
        assert_eq!(
            parse_stat("150+"),
            Some(StatTarget { value: 150, suffix: "+".to_string() })
        );
        assert_eq!(
            parse_stat(" 98% "),
            Some(StatTarget { value: 98, suffix: "%".to_string() })
        );
        assert_eq!(parse_stat("24"), Some(StatTarget { value: 24, suffix: String::new() }));
    }

    #[test]
    fn only_leading_digits_are_counted() {
        assert_eq!(parse_stat("24/7x"), Some(StatTarget { value: 24, suffix: "/7x".to_string() }));
        assert_eq!(parse_stat("Global"), None);
        assert_eq!(parse_stat(""), None);
    }

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(3.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn counter_reaches_target_and_never_overshoots() {
        assert_eq!(counter_value(150, 0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_value(150, COUNTER_DURATION_MS, COUNTER_DURATION_MS), 150);
        assert_eq!(counter_value(150, 5_000, COUNTER_DURATION_MS), 150);

        let mut last = 0;
        for elapsed in (0..=COUNTER_DURATION_MS).step_by(16) {
            let value = counter_value(150, elapsed, COUNTER_DURATION_MS);
            assert!(value >= last);
            assert!(value <= 150);
            last = value;
        }
    }
}
